use std::fmt;
use std::num::IntErrorKind;

use log::{debug, info};
use rand::Rng;

use crate::error::GuessError;

pub const MIN_GUESS: u8 = 1;
pub const MAX_GUESS: u8 = 100;
pub const PROMPT: &str = "Guess an integer between 1 and 100: ";

/// The secret number, always within `MIN_GUESS..=MAX_GUESS`.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct TargetNumber(u8);

impl TargetNumber {
    pub fn draw<R: Rng>(rng: &mut R) -> Self {
        let target = TargetNumber(rng.random_range(MIN_GUESS..=MAX_GUESS));
        debug!("Drew target number {}", target);
        target
    }

    /// Fixed target, for when the caller already knows the secret.
    pub fn new(value: u8) -> Option<Self> {
        if (MIN_GUESS..=MAX_GUESS).contains(&value) {
            Some(TargetNumber(value))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for TargetNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A guess that parsed and passed the range check.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct GuessValue(u8);

impl GuessValue {
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn matches(self, target: TargetNumber) -> bool {
        self.0 == target.0
    }
}

impl fmt::Display for GuessValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/*
    accepts `[+-]digits` with optional single underscores between digits,
    surrounded by any amount of whitespace. Digits are ASCII only.
 */
fn parse_integer(raw: &str) -> Result<i64, GuessError> {
    // file/group/record/unit separators count as whitespace too
    let s = raw.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c));
    let (negative, body) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let bytes = body.as_bytes();
    if bytes.is_empty() || bytes[0] == b'_' || bytes[bytes.len() - 1] == b'_' {
        return Err(GuessError::InvalidNumber);
    }
    let mut digits = String::with_capacity(bytes.len() + 1);
    if negative {
        digits.push('-');
    }
    let mut prev_underscore = false;
    for &ch in bytes {
        match ch {
            b'0'..=b'9' => {
                digits.push(ch as char);
                prev_underscore = false;
            }
            b'_' if !prev_underscore => prev_underscore = true,
            _ => return Err(GuessError::InvalidNumber),
        }
    }
    // Grammar is already checked, so only overflow can fail here.
    match digits.parse::<i64>() {
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(GuessError::InvalidNumber),
        },
    }
}

pub fn parse_guess(raw: &str) -> Result<GuessValue, GuessError> {
    let n = parse_integer(raw).map_err(|e| {
        info!("Rejected non-numeric guess {:?}", raw.trim_end());
        e
    })?;
    if n < MIN_GUESS as i64 || n > MAX_GUESS as i64 {
        info!("Rejected out of range guess {}", n);
        return Err(GuessError::OutOfRange(n));
    }
    let guess = GuessValue(n as u8);
    debug!("Parsed guess {}", guess);
    Ok(guess)
}
