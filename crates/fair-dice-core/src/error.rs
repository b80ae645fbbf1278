//! Protocol error types.

use thiserror::Error;

/// Errors from the fairness protocol
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("invalid range: range size must be positive, got {range}")]
    InvalidRange { range: usize },

    #[error("invalid round state: expected {expected}, round is {actual}")]
    InvalidState {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("entropy source failure: {0}")]
    Entropy(#[from] rand::Error),
}
