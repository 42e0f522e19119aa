use std::fmt;
use std::io::{BufRead, Write};

use log::info;
use rand::Rng;

use crate::error::GuessError;
use crate::guess::{parse_guess, GuessValue, TargetNumber, PROMPT};

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Outcome {
    Correct,
    Missed(TargetNumber),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Correct => write!(f, "You guessed correctly!"),
            Outcome::Missed(target) => write!(
                f,
                "Sorry, the number was {}. Try again next time!",
                target
            ),
        }
    }
}

/// One game: a single target, a single guess, a single outcome line.
pub struct GuessRound {
    target: TargetNumber,
}

impl GuessRound {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_target(TargetNumber::draw(rng))
    }

    pub fn with_target(target: TargetNumber) -> Self {
        GuessRound { target }
    }

    pub fn target(&self) -> TargetNumber {
        self.target
    }

    pub fn evaluate(&self, guess: GuessValue) -> Outcome {
        if guess.matches(self.target) {
            Outcome::Correct
        } else {
            Outcome::Missed(self.target)
        }
    }

    /// Prompts once and reads exactly one line.
    pub fn read_guess<B, W>(&self, input: &mut B, output: &mut W) -> Result<GuessValue, GuessError>
    where
        B: BufRead,
        W: Write,
    {
        write!(output, "{}", PROMPT)?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(GuessError::EndOfInput);
        }
        parse_guess(&line)
    }

    /*
        Rejected input still gets its message written before the error is
        returned; callers only need to decide the exit path.
     */
    pub fn play<B, W>(self, mut input: B, mut output: W) -> Result<Outcome, GuessError>
    where
        B: BufRead,
        W: Write,
    {
        let guess = match self.read_guess(&mut input, &mut output) {
            Ok(guess) => guess,
            Err(e) if e.is_input_error() => {
                writeln!(output, "{}", e)?;
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        let outcome = self.evaluate(guess);
        info!("Guess {} against target {}: {:?}", guess, self.target, outcome);
        writeln!(output, "{}", outcome)?;
        Ok(outcome)
    }
}
