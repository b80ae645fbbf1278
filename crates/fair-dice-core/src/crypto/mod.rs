//! Cryptographic primitives for the fairness protocol.
//!
//! This module provides:
//! - Secret and SecretGenerator for per-round randomness
//! - Commitment for the binding, hiding commit-reveal digest

mod commitment;
mod secret;

pub use commitment::Commitment;
pub use secret::{Secret, SecretGenerator};
