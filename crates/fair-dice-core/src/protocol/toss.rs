//! Turn-order coin toss built from two independent rounds.

use crate::crypto::{Commitment, Secret, SecretGenerator};
use crate::error::ProtocolError;
use crate::fairness;
use crate::protocol::Round;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

/// A completed two-party coin toss.
///
/// One round per party; both commitments are published before either secret
/// is disclosed, so neither party can bias the bit after seeing the other's
/// input. Bit 1 means the player goes first.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoinToss {
    pub player_commitment: Commitment,
    pub computer_commitment: Commitment,
    pub player_secret: Secret,
    pub computer_secret: Secret,
    pub player_first: bool,
}

impl CoinToss {
    /// Run the full toss: commit both rounds, then reveal both.
    pub fn run<R: RngCore + CryptoRng>(
        generator: &mut SecretGenerator<R>,
    ) -> Result<Self, ProtocolError> {
        let mut player = Round::new();
        let mut computer = Round::new();

        // both commitments exist before either secret is disclosed
        let player_commitment = player.start(generator)?;
        let computer_commitment = computer.start(generator)?;

        let player_secret = player.reveal()?;
        let computer_secret = computer.reveal()?;

        let player_first = fairness::fair_bit(&player_secret, &computer_secret) == 1;

        Ok(Self {
            player_commitment,
            computer_commitment,
            player_secret,
            computer_secret,
            player_first,
        })
    }

    /// Reproduce the toss from the revealed secrets; any observer can call
    /// this to check that neither commitment was swapped after the fact.
    pub fn verify(&self) -> bool {
        self.player_commitment.verify(&self.player_secret)
            && self.computer_commitment.verify(&self.computer_secret)
            && (fairness::fair_bit(&self.player_secret, &self.computer_secret) == 1)
                == self.player_first
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_toss_verifies() {
        let mut generator = SecretGenerator::new();
        let toss = CoinToss::run(&mut generator).unwrap();

        assert!(toss.verify());
    }

    #[test]
    fn test_tampered_secret_fails_verification() {
        let mut generator = SecretGenerator::new();
        let mut toss = CoinToss::run(&mut generator).unwrap();

        toss.computer_secret = generator.generate().unwrap();

        assert!(!toss.verify());
    }

    #[test]
    fn test_flipped_outcome_fails_verification() {
        let mut generator = SecretGenerator::new();
        let mut toss = CoinToss::run(&mut generator).unwrap();

        toss.player_first = !toss.player_first;

        assert!(!toss.verify());
    }
}
