use std::{fmt, io};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QifError {
    #[error("Invalid argument [{parameter}]: {reason}")]
    InvalidArgument {
        parameter: &'static str,
        reason: &'static str
    },
    #[error("No transactions were provided, a QIF file needs at least one to derive its header")]
    EmptyTransactions,
    #[error("Failed to append QIF output: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to format QIF output: {0}")]
    Format(#[from] fmt::Error)
}

impl QifError {
    pub fn blank_file_name() -> Self {
        Self::InvalidArgument {
            parameter: "file_name",
            reason: "file name must not be blank"
        }
    }

    /// Name of the offending argument, when the error is about one.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { parameter, .. } => Some(*parameter),
            _ => None
        }
    }
}
