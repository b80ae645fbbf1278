//! One commit-reveal cycle: generate a secret, publish its commitment,
//! later reveal the secret for verification.

use crate::crypto::{Commitment, Secret, SecretGenerator};
use crate::error::ProtocolError;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique round identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    /// Create a new random round ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundId({})", self.0)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

enum RoundState {
    Created,
    Committed {
        secret: Secret,
        commitment: Commitment,
    },
    Revealed {
        secret: Secret,
        commitment: Commitment,
    },
}

impl RoundState {
    fn name(&self) -> &'static str {
        match self {
            RoundState::Created => "created",
            RoundState::Committed { .. } => "committed",
            RoundState::Revealed { .. } => "revealed",
        }
    }
}

/// One party's commit-reveal round.
///
/// States advance `created -> committed -> revealed`, each transition exactly
/// once; calls out of sequence fail with [`ProtocolError::InvalidState`].
/// The secret stays private to the round until [`Round::reveal`].
pub struct Round {
    id: RoundId,
    state: RoundState,
}

impl Round {
    /// Create a round in the `created` state
    pub fn new() -> Self {
        Self {
            id: RoundId::new(),
            state: RoundState::Created,
        }
    }

    /// Get this round's identifier
    pub fn id(&self) -> RoundId {
        self.id
    }

    /// Generate a fresh secret and publish its commitment.
    ///
    /// Fails with `InvalidState` if the round has already started, or with
    /// `Entropy` if the randomness source fails (fatal, aborts the round).
    pub fn start<R: RngCore + CryptoRng>(
        &mut self,
        generator: &mut SecretGenerator<R>,
    ) -> Result<Commitment, ProtocolError> {
        match self.state {
            RoundState::Created => {
                let secret = generator.generate()?;
                let commitment = Commitment::new(&secret);
                self.state = RoundState::Committed { secret, commitment };
                Ok(commitment)
            }
            _ => Err(ProtocolError::InvalidState {
                expected: "created",
                actual: self.state.name(),
            }),
        }
    }

    /// Disclose the committed secret; callable exactly once.
    pub fn reveal(&mut self) -> Result<Secret, ProtocolError> {
        match &self.state {
            RoundState::Committed { secret, commitment } => {
                let secret = secret.clone();
                let commitment = *commitment;
                self.state = RoundState::Revealed {
                    secret: secret.clone(),
                    commitment,
                };
                Ok(secret)
            }
            other => Err(ProtocolError::InvalidState {
                expected: "committed",
                actual: other.name(),
            }),
        }
    }

    /// The published commitment, if the round has started
    pub fn commitment(&self) -> Option<&Commitment> {
        match &self.state {
            RoundState::Created => None,
            RoundState::Committed { commitment, .. }
            | RoundState::Revealed { commitment, .. } => Some(commitment),
        }
    }

    /// Has the secret been disclosed?
    pub fn is_revealed(&self) -> bool {
        matches!(self.state, RoundState::Revealed { .. })
    }

    /// Observer check after reveal: does the disclosed secret match the
    /// published commitment? A mismatch is `false`, not an error.
    pub fn verify(secret: &Secret, commitment: &Commitment) -> bool {
        commitment.verify(secret)
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
