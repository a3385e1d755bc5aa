use std::fmt;

/// Message shown to the player after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    InvalidRange { range: u32 },
    Won,
    Lost { secret: u32 },
    TooLow { remaining: u32 },
    TooHigh { remaining: u32 },
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { range } => {
                write!(f, "Please enter a valid number between 1 and {range}")
            }
            Self::Won => f.write_str("Congratulations! You won! 🎉"),
            Self::Lost { secret } => write!(f, "Game Over! The number was {secret}"),
            Self::TooLow { remaining } => write!(f, "Too low! {remaining} attempts remaining"),
            Self::TooHigh { remaining } => write!(f, "Too high! {remaining} attempts remaining"),
        }
    }
}

impl From<Feedback> for String {
    fn from(value: Feedback) -> Self {
        value.to_string()
    }
}
