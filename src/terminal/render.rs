use std::fmt;

use crate::functions::games::number_guess::{Difficulty, Session, RULES};

const FILLED: char = '●';
const HOLLOW: char = '○';

pub const HELP: &str = "\
commands:
  <number>             make a guess
  easy | medium | hard change difficulty (starts a new round)
  rules                show or hide the rules
  again                play again once the round is over
  help                 show this message
  quit                 leave the game";

/// The whole screen for the current session state.
pub struct Screen<'a, R>(pub &'a Session<R>);

impl<R> fmt::Display for Screen<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        let profile = session.profile();
        let round = session.round();

        writeln!(f, "Number Guesser")?;
        writeln!(f, "Guess the secret number")?;

        let rules_toggle = if session.show_rules() {
            "Hide Rules"
        } else {
            "Show Rules"
        };
        writeln!(f, "({rules_toggle}: type `rules`)")?;

        if session.show_rules() {
            writeln!(f)?;
            writeln!(f, "How to Play:")?;
            for rule in RULES {
                writeln!(f, "  • {rule}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", difficulty_row(session.difficulty()))?;
        writeln!(
            f,
            "{}",
            attempt_dots(profile.attempt_budget(), round.attempts_remaining())
        )?;

        if round.is_active() {
            writeln!(f, "Enter a number (1-{})", profile.range())?;
        }

        if let Some(feedback) = round.feedback() {
            writeln!(f)?;
            writeln!(f, "{feedback}")?;
        }

        if round.is_over() {
            writeln!(f)?;
            writeln!(f, "Play Again: type `again`")?;
        }

        Ok(())
    }
}

pub fn render<R>(session: &Session<R>) -> String {
    Screen(session).to_string()
}

fn difficulty_row(selected: Difficulty) -> String {
    Difficulty::ALL
        .into_iter()
        .map(|difficulty| {
            if difficulty == selected {
                format!("[{}]", difficulty.label())
            } else {
                format!(" {} ", difficulty.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One filled dot per attempt left, one hollow dot per attempt spent.
fn attempt_dots(budget: u32, remaining: u32) -> String {
    (0..budget)
        .map(|i| if i < remaining { FILLED } else { HOLLOW })
        .collect()
}
