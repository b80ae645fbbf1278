//! Secret generation for commit-reveal rounds.

use crate::error::ProtocolError;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 32-byte secret, committed at round start and disclosed at reveal
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Secret([u8; 32]);

impl Secret {
    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for Secret {
    // prefix only, so an unrevealed secret cannot leak through logs
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Draws fresh secrets from an explicit, caller-supplied randomness source.
///
/// The source must be cryptographically secure; the default is the operating
/// system's entropy. Tests substitute a seeded ChaCha generator.
pub struct SecretGenerator<R = OsRng> {
    rng: R,
}

impl SecretGenerator<OsRng> {
    /// Generator backed by OS entropy
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for SecretGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> SecretGenerator<R> {
    /// Generator backed by an explicit source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a fresh 256-bit secret.
    ///
    /// An entropy-source failure is fatal and surfaces as
    /// [`ProtocolError::Entropy`]; there is no fallback to a weaker source.
    pub fn generate(&mut self) -> Result<Secret, ProtocolError> {
        let mut bytes = [0u8; 32];
        self.rng.try_fill_bytes(&mut bytes)?;
        Ok(Secret(bytes))
    }
}
