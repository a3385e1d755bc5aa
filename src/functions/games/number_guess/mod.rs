mod difficulty;
pub use difficulty::{Catalog, Difficulty, DifficultyProfile, InvalidProfile, UnknownDifficulty};

mod error;
pub use error::GuessError;

mod feedback;
pub use feedback::Feedback;

pub mod random;
pub use random::RandomSource;

mod round;
pub use round::{start_round, submit_guess, Phase, RoundState, Verdict};

mod session;
pub use session::Session;

pub const RULES: [&str; 4] = [
    "Choose your difficulty level",
    "Enter a number within the given range",
    "Use the feedback to guide your next guess",
    "Win before running out of attempts!",
];
