//! The module contains the error the engine can throw.
//!
//! The errors split in two groups:
//!
//! - user errors ([`InvalidAmount`], [`InvalidId`], [`InvalidMonth`],
//!   [`NotFound`], [`TotalOverflow`]) are reported to the user as a single
//!   line;
//! - storage errors ([`Parse`], [`Io`], [`Csv`]) mean the backing file or the
//!   export target could not be used and are propagated to the caller.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidId`]: EngineError::InvalidId
//!  [`InvalidMonth`]: EngineError::InvalidMonth
//!  [`NotFound`]: EngineError::NotFound
//!  [`TotalOverflow`]: EngineError::TotalOverflow
//!  [`Parse`]: EngineError::Parse
//!  [`Io`]: EngineError::Io
//!  [`Csv`]: EngineError::Csv
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Amount must be a positive number")]
    InvalidAmount(String),
    #[error("Invalid expense ID")]
    InvalidId(String),
    #[error("Invalid month. Please use a number between 1-12.")]
    InvalidMonth(String),
    #[error("No expense found with ID {0}")]
    NotFound(i64),
    #[error("total of the selected expenses is too large")]
    TotalOverflow,
    #[error("corrupt expense file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl EngineError {
    /// Returns `true` for errors caused by user input rather than storage.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::InvalidId(_)
                | Self::InvalidMonth(_)
                | Self::NotFound(_)
                | Self::TotalOverflow
        )
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidId(a), Self::InvalidId(b)) => a == b,
            (Self::InvalidMonth(a), Self::InvalidMonth(b)) => a == b,
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::TotalOverflow, Self::TotalOverflow) => true,
            (Self::Parse(a), Self::Parse(b)) => a.to_string() == b.to_string(),
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            (Self::Csv(a), Self::Csv(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
