use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("{guess} is outside 1..={range}")]
    OutOfRange { guess: i64, range: u32 },

    #[error("the round is already over")]
    RoundOver,
}
