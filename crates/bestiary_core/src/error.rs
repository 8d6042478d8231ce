//! Error types for generation runs.
//!
//! Any of these aborts the current generation call; builders never hand back
//! a partially assembled graph.

use bestiary_data::ValidationError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenError {
    /// Malformed creature construction input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A sampling step needs more distinct items than the pool holds
    #[error("Insufficient pool for {context}: need {needed}, have {available}")]
    InsufficientPool {
        context: String,
        needed: usize,
        available: usize,
    },

    /// A ranged draw received an empty or inverted range
    #[error("Invalid range [{low}, {high}]")]
    InvalidRange { low: usize, high: usize },

    /// A chance outside [0, 1]
    #[error("Invalid probability: {0}")]
    InvalidProbability(f64),

    /// Configuration values that cannot drive a run
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GenError>;

impl GenError {
    #[must_use]
    pub fn insufficient_pool<S: Into<String>>(context: S, needed: usize, available: usize) -> Self {
        Self::InsufficientPool {
            context: context.into(),
            needed,
            available,
        }
    }

    #[must_use]
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
