#[derive(thiserror::Error, Debug)]
pub enum GuessError {
    #[error("Please enter a valid number")]
    InvalidNumber,
    #[error("Please enter a number between 1 and 100")]
    OutOfRange(i64),
    #[error("Input stream closed before a guess was entered")]
    EndOfInput,
    #[error("Terminal io error (error: {0})")]
    Io(#[from] std::io::Error),
}

impl GuessError {
    /// Rejected input ends the round normally; anything else is a failure of the run.
    pub fn is_input_error(&self) -> bool {
        matches!(self, GuessError::InvalidNumber | GuessError::OutOfRange(_))
    }
}
