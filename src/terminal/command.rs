use crate::functions::games::number_guess::Difficulty;

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Difficulty(Difficulty),
    Rules,
    Again,
    Help,
    Quit,
}

impl Command {
    /// Anything that isn't a keyword is treated as a guess, so the game
    /// gets to reject it.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();

        if let Ok(difficulty) = trimmed.parse() {
            return Self::Difficulty(difficulty);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "rules" | "r" => Self::Rules,
            "again" | "play again" | "a" => Self::Again,
            "help" | "h" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Guess(trimmed.to_owned()),
        }
    }
}
