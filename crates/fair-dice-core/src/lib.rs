//! Fair Dice Core Library
//!
//! This crate provides the provably-fair randomness protocol for the
//! non-transitive dice game: cryptographic commitments, unbiased bit and
//! index derivation, and the round state machine that sequences them.

pub mod crypto;
pub mod dice;
pub mod error;
pub mod fairness;
pub mod protocol;

pub use crypto::{Commitment, Secret, SecretGenerator};
pub use dice::{Die, DieParseError, DuelOutcome, FairRoll, FACES_PER_DIE};
pub use error::ProtocolError;
pub use fairness::{fair_bit, fair_index};
pub use protocol::{CoinToss, Round, RoundId};
