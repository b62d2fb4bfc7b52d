#[cfg(test)]
mod tests;
mod transaction;

use std::fmt;
use std::fmt::{Display, Formatter};

use serde::Deserialize;

pub use transaction::{QifTransaction, SubTransaction};

/// Flat account-type label written to the QIF `Type:` header.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Checking,
    Savings,
    Cash,
    CreditCard,
    Investment,
    Asset,
    Liability
}

impl TransactionType {
    pub fn name(&self) -> &'static str {
        match self {
            TransactionType::Checking => "Checking",
            TransactionType::Savings => "Savings",
            TransactionType::Cash => "Cash",
            TransactionType::CreditCard => "CreditCard",
            TransactionType::Investment => "Investment",
            TransactionType::Asset => "Asset",
            TransactionType::Liability => "Liability"
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
