use crate::types::errors::MonetaryError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DECIMAL_PLACES: u32 = 2;

/// A signed currency amount.
///
/// The full decimal value is kept as given; rounding only happens when the amount is
/// displayed, which always yields exactly two fractional digits with `.` as the separator.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default)]
pub struct Monetary(Decimal);

impl Monetary {
    pub fn new(value: Decimal) -> Self {
        Monetary(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The amount rounded half away from zero to at most two places. Zero is always unsigned.
    pub fn rounded(&self) -> Decimal {
        let rounded = self.0.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

        if rounded.is_zero() {
            return Decimal::ZERO;
        }

        rounded
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        //NOTE: The scale of the largest values cannot be raised to two, so the fraction is padded here instead
        let text = self.rounded().to_string();
        let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

        write!(formatter, "{integer}.{fraction:0<width$}", width = DECIMAL_PLACES as usize)
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
        }

        let value = value.strip_prefix('+').unwrap_or(value);

        Ok(Monetary(Decimal::from_str_exact(value)?))
    }
}

impl<'de> Deserialize<'de> for Monetary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Monetary::from_str(&value).map_err(de::Error::custom)
    }
}
