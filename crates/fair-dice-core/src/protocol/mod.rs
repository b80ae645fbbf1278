//! Round orchestration for the commit-reveal protocol.

mod round;
mod toss;

pub use round::{Round, RoundId};
pub use toss::CoinToss;
