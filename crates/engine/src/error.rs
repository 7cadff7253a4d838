//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidAmount`] thrown when an expense amount is not positive or
//!   exceeds the creation cap.
//! - [`InvalidShares`] thrown when a participant list fails validation.
//! - [`UnbalancedLedger`] thrown when a balance map handed to the planner
//!   does not sum to zero.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidShares`]: EngineError::InvalidShares
//!  [`UnbalancedLedger`]: EngineError::UnbalancedLedger
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid shares: {0}")]
    InvalidShares(String),
    #[error("Unbalanced ledger: {0}")]
    UnbalancedLedger(String),
}
