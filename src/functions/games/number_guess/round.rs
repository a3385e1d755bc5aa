use std::{cmp::Ordering, ops::Not};

use tracing::{debug, instrument, trace, warn};

use super::{
    random::{scale, RandomSource},
    DifficultyProfile, Feedback, GuessError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Active,
    Won,
    Lost,
}

impl Phase {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What an accepted guess did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    TooLow,
    TooHigh,
    Correct,
    OutOfAttempts,
}

/// One round, from the secret being picked until it's won or lost.
///
/// The secret never changes once picked. Attempts only go down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    secret: u32,
    attempts_remaining: u32,
    feedback: Option<Feedback>,
    phase: Phase,
}

impl RoundState {
    fn new(secret: u32, attempts: u32) -> Self {
        Self {
            secret,
            attempts_remaining: attempts,
            feedback: None,
            phase: Phase::Active,
        }
    }

    pub const fn secret_number(&self) -> u32 {
        self.secret
    }

    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    pub const fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// The feedback as text, empty if there is none yet.
    pub fn feedback_message(&self) -> String {
        self.feedback.map(String::from).unwrap_or_default()
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn is_active(&self) -> bool {
        self.is_over().not()
    }

    /// Applies one guess.
    ///
    /// Invalid input sets the invalid-range feedback but spends no attempt.
    /// A finished round is left completely untouched.
    #[instrument(skip(self, profile), fields(secret = self.secret), level = "debug")]
    pub fn guess(&mut self, profile: &DifficultyProfile, raw: &str) -> Result<Verdict, GuessError> {
        if self.is_over() {
            warn!(phase = ?self.phase, "guess submitted to a finished round");
            return Err(GuessError::RoundOver);
        }

        let guess = match parse_guess(profile, raw) {
            Ok(guess) => guess,
            Err(err) => {
                debug!(%err, "rejected guess");
                self.feedback = Some(Feedback::InvalidRange {
                    range: profile.range(),
                });
                return Err(err);
            }
        };

        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        let remaining = self.attempts_remaining;

        let (verdict, feedback) = match guess.cmp(&i64::from(self.secret)) {
            Ordering::Equal => {
                self.phase = Phase::Won;
                (Verdict::Correct, Feedback::Won)
            }
            _ if remaining == 0 => {
                self.phase = Phase::Lost;
                (
                    Verdict::OutOfAttempts,
                    Feedback::Lost {
                        secret: self.secret,
                    },
                )
            }
            Ordering::Less => (Verdict::TooLow, Feedback::TooLow { remaining }),
            Ordering::Greater => (Verdict::TooHigh, Feedback::TooHigh { remaining }),
        };

        self.feedback = Some(feedback);

        debug!(guess, ?verdict, remaining);

        Ok(verdict)
    }
}

/// Reads an optional sign and the leading run of digits, ignoring whatever
/// follows, so `"50.7"` is 50 and `"5e1"` is 5.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let magnitude = rest[..digits].bytes().fold(0i64, |acc, digit| {
        acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}

fn parse_guess(profile: &DifficultyProfile, raw: &str) -> Result<i64, GuessError> {
    let guess =
        parse_leading_int(raw).ok_or_else(|| GuessError::NotANumber(raw.to_owned()))?;

    if profile.contains(guess) {
        Ok(guess)
    } else {
        Err(GuessError::OutOfRange {
            guess,
            range: profile.range(),
        })
    }
}

/// Picks a secret for `profile` and hands back a fresh, active round.
///
/// Takes exactly one draw from `rng`.
#[instrument(skip(rng), level = "debug")]
pub fn start_round(profile: &DifficultyProfile, rng: &mut impl RandomSource) -> RoundState {
    let draw = rng.draw();
    let secret = scale(draw, profile.range());

    trace!(draw, secret);

    RoundState::new(secret, profile.attempt_budget())
}

/// Pure transition: takes the round by value and returns the next one.
pub fn submit_guess(mut state: RoundState, profile: &DifficultyProfile, raw: &str) -> RoundState {
    let _ = state.guess(profile, raw);
    state
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use super::{start_round, submit_guess, Phase, RoundState, Verdict};
    use crate::functions::games::number_guess::{
        random::{seeded, FixedDraw},
        Catalog, Difficulty, DifficultyProfile, Feedback, GuessError,
    };

    const MEDIUM: DifficultyProfile = DifficultyProfile::MEDIUM;

    /// A medium round with a secret of 50.
    fn fifty() -> RoundState {
        start_round(&MEDIUM, &mut FixedDraw(0.49))
    }

    #[test]
    fn start_round_within_range() {
        let mut rng = seeded(Some(1234));

        for profile in Catalog::default().iter() {
            for _ in 0..500 {
                let round = start_round(&profile, &mut rng);

                assert!((1..=profile.range()).contains(&round.secret_number()));
                assert_eq!(round.attempts_remaining(), profile.attempt_budget());
                assert_eq!(round.feedback(), None);
                assert!(round.is_active());
            }
        }
    }

    #[test]
    fn secret_follows_draw() {
        for draw in [0.0, 0.1, 0.25, 0.49, 0.5, 0.75, 0.999] {
            let round = start_round(&MEDIUM, &mut FixedDraw(draw));
            let expected = (draw * 100.0).floor() as u32 + 1;
            assert_eq!(round.secret_number(), expected);
        }
    }

    #[test]
    #[traced_test]
    fn win_on_first_try() {
        let round = submit_guess(fifty(), &MEDIUM, "50");

        assert_eq!(round.phase(), Phase::Won);
        assert!(round.is_over());
        assert_eq!(round.feedback(), Some(&Feedback::Won));
        assert_eq!(round.attempts_remaining(), 9);
    }

    #[test]
    fn too_low() {
        let round = submit_guess(fifty(), &MEDIUM, "25");

        assert_eq!(round.feedback_message(), "Too low! 9 attempts remaining");
        assert_eq!(round.attempts_remaining(), MEDIUM.attempt_budget() - 1);
        assert!(round.is_active());
    }

    #[test]
    fn too_high() {
        let mut round = fifty();
        let verdict = round.guess(&MEDIUM, " 75 ");

        assert_eq!(verdict, Ok(Verdict::TooHigh));
        assert_eq!(round.feedback(), Some(&Feedback::TooHigh { remaining: 9 }));
    }

    #[test]
    #[traced_test]
    fn lose_after_budget() {
        let mut round = fifty();

        for _ in 0..10 {
            round = submit_guess(round, &MEDIUM, "1");
        }

        assert_eq!(round.phase(), Phase::Lost);
        assert_eq!(round.attempts_remaining(), 0);
        assert_eq!(round.feedback_message(), "Game Over! The number was 50");
    }

    #[test]
    fn win_on_last_attempt() {
        let mut round = fifty();

        for _ in 0..9 {
            round = submit_guess(round, &MEDIUM, "1");
        }
        assert!(round.is_active());

        let round = submit_guess(round, &MEDIUM, "50");
        assert_eq!(round.phase(), Phase::Won);
        assert_eq!(round.attempts_remaining(), 0);
    }

    #[test]
    fn out_of_range_spends_nothing() {
        let mut round = fifty();
        let err = round.guess(&MEDIUM, "101");

        assert_eq!(
            err,
            Err(GuessError::OutOfRange {
                guess: 101,
                range: 100
            })
        );
        assert_eq!(
            round.feedback_message(),
            "Please enter a valid number between 1 and 100"
        );
        assert_eq!(round.attempts_remaining(), 10);
    }

    #[test]
    fn invalid_input_is_idempotent() {
        let mut round = fifty();
        round = submit_guess(round, &MEDIUM, "30");

        for input in ["", "abc", "0", "-4", ".5", "-", "e5", "100000000000000000000"] {
            let before = round.clone();
            round = submit_guess(round, &MEDIUM, input);

            assert_eq!(round.attempts_remaining(), before.attempts_remaining());
            assert_eq!(round.is_over(), before.is_over());
            assert_eq!(round.secret_number(), before.secret_number());
            assert_eq!(
                round.feedback(),
                Some(&Feedback::InvalidRange { range: 100 })
            );
        }
    }

    #[test]
    fn leading_digits_count_as_guess() {
        let round = submit_guess(fifty(), &MEDIUM, "50.7");
        assert_eq!(round.phase(), Phase::Won);
        assert_eq!(round.attempts_remaining(), 9);

        let round = submit_guess(fifty(), &MEDIUM, "5e1");
        assert_eq!(round.feedback(), Some(&Feedback::TooLow { remaining: 9 }));

        let round = submit_guess(fifty(), &MEDIUM, " +75abc");
        assert_eq!(round.feedback(), Some(&Feedback::TooHigh { remaining: 9 }));
    }

    #[test]
    fn parse_leading_int() {
        assert_eq!(super::parse_leading_int("42"), Some(42));
        assert_eq!(super::parse_leading_int(" 3.9 "), Some(3));
        assert_eq!(super::parse_leading_int("-12px"), Some(-12));
        assert_eq!(super::parse_leading_int("1e2"), Some(1));
        assert_eq!(super::parse_leading_int("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(super::parse_leading_int("x1"), None);
        assert_eq!(super::parse_leading_int("+"), None);
        assert_eq!(super::parse_leading_int(""), None);
    }

    #[test]
    fn not_a_number() {
        let mut round = fifty();

        assert_eq!(
            round.guess(&MEDIUM, "fifty"),
            Err(GuessError::NotANumber("fifty".to_owned()))
        );
    }

    #[test]
    #[traced_test]
    fn finished_round_is_frozen() {
        let won = submit_guess(fifty(), &MEDIUM, "50");

        for input in ["50", "1", "abc"] {
            let mut after = won.clone();
            assert_eq!(after.guess(&MEDIUM, input), Err(GuessError::RoundOver));
            assert_eq!(after, won);
        }

        assert!(logs_contain("guess submitted to a finished round"));
    }

    #[test]
    fn lost_round_is_frozen() {
        let mut lost = fifty();
        for _ in 0..10 {
            lost = submit_guess(lost, &MEDIUM, "99");
        }

        let after = submit_guess(lost.clone(), &MEDIUM, "50");
        assert_eq!(after, lost);
        assert_eq!(after.phase(), Phase::Lost);
    }

    #[test]
    fn attempts_drop_by_one_per_valid_guess() {
        let profile = Catalog::default().profile_for(Difficulty::Hard);
        let mut round = start_round(&profile, &mut FixedDraw(0.0));
        assert_eq!(round.secret_number(), 1);

        let mut previous = round.attempts_remaining();
        for guess in ["150", "2", "149", "3"] {
            round = submit_guess(round, &profile, guess);
            assert_eq!(round.attempts_remaining(), previous - 1);
            previous = round.attempts_remaining();
        }
    }
}
