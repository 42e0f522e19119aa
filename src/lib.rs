pub mod error;
pub mod guess;
pub mod round;

pub use error::GuessError;
pub use guess::{parse_guess, GuessValue, TargetNumber, MAX_GUESS, MIN_GUESS};
pub use round::{GuessRound, Outcome};
