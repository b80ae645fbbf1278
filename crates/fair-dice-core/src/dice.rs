//! Dice types, committed fair rolls, and duel judging.

use crate::crypto::{Commitment, Secret, SecretGenerator};
use crate::error::ProtocolError;
use crate::fairness;
use crate::protocol::{Round, RoundId};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Face count the game rule fixes per die
pub const FACES_PER_DIE: usize = 6;

/// Errors from parsing a die description like "2,2,4,4,9,9"
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DieParseError {
    #[error("die faces must be integers")]
    NotAnInteger,

    #[error("a die needs exactly {FACES_PER_DIE} faces, got {found}")]
    WrongFaceCount { found: usize },
}

/// An ordered sequence of integer faces.
///
/// The game rule fixes six faces per die, but index derivation works over
/// any non-empty length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    faces: Vec<i32>,
}

impl Die {
    /// A die over the given faces
    pub fn new(faces: Vec<i32>) -> Self {
        Self { faces }
    }

    /// The ordered faces
    pub fn faces(&self) -> &[i32] {
        &self.faces
    }

    /// Number of faces
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Is the die empty? An empty die cannot be rolled.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// The face at `index`; callers obtain indices from [`fairness::fair_index`]
    pub fn face(&self, index: usize) -> i32 {
        self.faces[index]
    }
}

impl FromStr for Die {
    type Err = DieParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let faces = s
            .split(',')
            .map(|v| v.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| DieParseError::NotAnInteger)?;

        if faces.len() != FACES_PER_DIE {
            return Err(DieParseError::WrongFaceCount { found: faces.len() });
        }

        Ok(Self { faces })
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<String> = self.faces.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}]", faces.join(","))
    }
}

/// One committed roll: a finished commit-reveal round plus the face it
/// selected. Everything needed for post-hoc verification is public.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FairRoll {
    pub round_id: RoundId,
    pub commitment: Commitment,
    pub secret: Secret,
    pub index: usize,
    pub face: i32,
}

impl FairRoll {
    /// Run one full round (commit, then reveal) and map the revealed secret
    /// onto a face of `die`.
    pub fn roll<R: RngCore + CryptoRng>(
        die: &Die,
        generator: &mut SecretGenerator<R>,
    ) -> Result<Self, ProtocolError> {
        let mut round = Round::new();
        let commitment = round.start(generator)?;
        let secret = round.reveal()?;
        let index = fairness::fair_index(&secret, die.len())?;

        Ok(Self {
            round_id: round.id(),
            commitment,
            secret: secret.clone(),
            index,
            face: die.face(index),
        })
    }

    /// Reproduce the outcome from the revealed secret alone; any observer
    /// can call this against the published commitment.
    pub fn verify(&self, die: &Die) -> bool {
        self.commitment.verify(&self.secret)
            && fairness::fair_index(&self.secret, die.len())
                .map_or(false, |index| {
                    index == self.index && die.face(index) == self.face
                })
    }
}

/// Result of comparing the two rolled faces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelOutcome {
    PlayerWins,
    ComputerWins,
    Tie,
}

impl DuelOutcome {
    /// Higher face wins; equal faces tie
    pub fn judge(player_face: i32, computer_face: i32) -> Self {
        if player_face > computer_face {
            DuelOutcome::PlayerWins
        } else if player_face < computer_face {
            DuelOutcome::ComputerWins
        } else {
            DuelOutcome::Tie
        }
    }

    /// Convert to a display string
    pub fn as_str(&self) -> &'static str {
        match self {
            DuelOutcome::PlayerWins => "You win!",
            DuelOutcome::ComputerWins => "Computer wins!",
            DuelOutcome::Tie => "It's a tie!",
        }
    }
}

impl fmt::Display for DuelOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_parsing() {
        let die: Die = "2,2,4,4,9,9".parse().unwrap();

        assert_eq!(die.faces(), &[2, 2, 4, 4, 9, 9]);
    }

    #[test]
    fn test_die_parsing_tolerates_spaces() {
        let die: Die = "6, 8, 1, 1, 8, 6".parse().unwrap();

        assert_eq!(die.faces(), &[6, 8, 1, 1, 8, 6]);
    }

    #[test]
    fn test_die_parsing_rejects_wrong_count() {
        let err = "1,2,3".parse::<Die>().unwrap_err();

        assert_eq!(err, DieParseError::WrongFaceCount { found: 3 });
    }

    #[test]
    fn test_die_parsing_rejects_non_integers() {
        let err = "1,2,3,four,5,6".parse::<Die>().unwrap_err();

        assert_eq!(err, DieParseError::NotAnInteger);
    }

    #[test]
    fn test_die_display_matches_menu_format() {
        let die = Die::new(vec![2, 2, 4, 4, 9, 9]);

        assert_eq!(die.to_string(), "[2,2,4,4,9,9]");
    }

    #[test]
    fn test_fair_roll_lands_on_a_face() {
        let mut generator = SecretGenerator::new();
        let die = Die::new(vec![2, 2, 4, 4, 9, 9]);

        let roll = FairRoll::roll(&die, &mut generator).unwrap();

        assert!(roll.index < die.len());
        assert!(die.faces().contains(&roll.face));
        assert!(roll.verify(&die));
    }

    #[test]
    fn test_fair_roll_rejects_empty_die() {
        let mut generator = SecretGenerator::new();
        let die = Die::new(vec![]);

        let err = FairRoll::roll(&die, &mut generator).unwrap_err();

        assert!(matches!(err, ProtocolError::InvalidRange { range: 0 }));
    }

    #[test]
    fn test_tampered_roll_fails_verification() {
        let mut generator = SecretGenerator::new();
        let die = Die::new(vec![2, 2, 4, 4, 9, 9]);

        let mut roll = FairRoll::roll(&die, &mut generator).unwrap();
        roll.face = 99;

        assert!(!roll.verify(&die));
    }

    #[test]
    fn test_duel_judging() {
        assert_eq!(DuelOutcome::judge(9, 6), DuelOutcome::PlayerWins);
        assert_eq!(DuelOutcome::judge(2, 8), DuelOutcome::ComputerWins);
        assert_eq!(DuelOutcome::judge(4, 4), DuelOutcome::Tie);
    }
}
