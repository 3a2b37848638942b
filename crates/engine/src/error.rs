//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidArgument`] thrown when an operation receives a degenerate
//!   argument, e.g. an equal split over zero members.
//! - [`InvalidAmount`] thrown when a monetary value cannot be parsed or
//!   converted into cents.
//!
//! Everything else is tolerated: balance aggregation and debt
//! simplification accept any input and always produce a result.
//!
//!  [`InvalidArgument`]: EngineError::InvalidArgument
//!  [`InvalidAmount`]: EngineError::InvalidAmount
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidArgument(a), Self::InvalidArgument(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            _ => false,
        }
    }
}
