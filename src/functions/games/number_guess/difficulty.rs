use std::{fmt, num::NonZeroU32, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(
    clap::ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Capitalized, the way the level buttons show it.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not a difficulty, expected easy, medium or hard")]
pub struct UnknownDifficulty(String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| s.trim().eq_ignore_ascii_case(difficulty.name()))
            .ok_or_else(|| UnknownDifficulty(s.to_owned()))
    }
}

const fn non_zero(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(n) => n,
        None => panic!("profile values must be non-zero"),
    }
}

/// Attempt budget and number range for one difficulty.
///
/// The range is inclusive and always starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyProfile {
    id: Difficulty,
    attempt_budget: NonZeroU32,
    range: NonZeroU32,
}

impl DifficultyProfile {
    pub const EASY: Self = Self::from_const(Difficulty::Easy, 15, 50);
    pub const MEDIUM: Self = Self::from_const(Difficulty::Medium, 10, 100);
    pub const HARD: Self = Self::from_const(Difficulty::Hard, 7, 150);

    const fn from_const(id: Difficulty, attempt_budget: u32, range: u32) -> Self {
        Self {
            id,
            attempt_budget: non_zero(attempt_budget),
            range: non_zero(range),
        }
    }

    pub fn new(id: Difficulty, attempt_budget: u32, range: u32) -> Result<Self, InvalidProfile> {
        let attempt_budget = NonZeroU32::new(attempt_budget).ok_or(InvalidProfile {
            difficulty: id,
            field: "attempt budget",
        })?;

        let range = NonZeroU32::new(range).ok_or(InvalidProfile {
            difficulty: id,
            field: "range",
        })?;

        Ok(Self {
            id,
            attempt_budget,
            range,
        })
    }

    pub const fn id(&self) -> Difficulty {
        self.id
    }

    pub const fn attempt_budget(&self) -> u32 {
        self.attempt_budget.get()
    }

    pub const fn range(&self) -> u32 {
        self.range.get()
    }

    pub fn contains(&self, guess: i64) -> bool {
        (1..=i64::from(self.range())).contains(&guess)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{difficulty} difficulty needs a positive {field}")]
pub struct InvalidProfile {
    difficulty: Difficulty,
    field: &'static str,
}

/// One profile per difficulty. Built once at startup, never changed after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    easy: DifficultyProfile,
    medium: DifficultyProfile,
    hard: DifficultyProfile,
}

impl Catalog {
    pub const STANDARD: Self = Self {
        easy: DifficultyProfile::EASY,
        medium: DifficultyProfile::MEDIUM,
        hard: DifficultyProfile::HARD,
    };

    pub const fn profile_for(&self, id: Difficulty) -> DifficultyProfile {
        match id {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// Replaces the attempt budget and/or range of one difficulty.
    ///
    /// Values left as `None` keep whatever the catalog already had.
    #[tracing::instrument(skip(self), level = "trace")]
    pub fn with_override(
        mut self,
        id: Difficulty,
        attempt_budget: Option<u32>,
        range: Option<u32>,
    ) -> Result<Self, InvalidProfile> {
        let current = self.profile_for(id);

        let profile = DifficultyProfile::new(
            id,
            attempt_budget.unwrap_or(current.attempt_budget()),
            range.unwrap_or(current.range()),
        )?;

        *self.slot_mut(id) = profile;

        tracing::trace!(?profile, "overrode profile");

        Ok(self)
    }

    fn slot_mut(&mut self, id: Difficulty) -> &mut DifficultyProfile {
        match id {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = DifficultyProfile> + '_ {
        Difficulty::ALL.into_iter().map(|id| self.profile_for(id))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Catalog, Difficulty, DifficultyProfile, InvalidProfile};

    #[test]
    fn standard_profiles() {
        let catalog = Catalog::default();

        let easy = catalog.profile_for(Difficulty::Easy);
        assert_eq!((easy.attempt_budget(), easy.range()), (15, 50));

        let medium = catalog.profile_for(Difficulty::Medium);
        assert_eq!((medium.attempt_budget(), medium.range()), (10, 100));

        let hard = catalog.profile_for(Difficulty::Hard);
        assert_eq!((hard.attempt_budget(), hard.range()), (7, 150));
    }

    #[test]
    fn profile_ids_match() {
        for id in Difficulty::ALL {
            assert_eq!(Catalog::STANDARD.profile_for(id).id(), id);
        }
    }

    #[test]
    fn parse_difficulty() {
        assert_eq!("easy".parse(), Ok(Difficulty::Easy));
        assert_eq!(" Medium ".parse(), Ok(Difficulty::Medium));
        assert_eq!("HARD".parse(), Ok(Difficulty::Hard));
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn contains_is_inclusive() {
        let profile = DifficultyProfile::MEDIUM;

        assert!(profile.contains(1));
        assert!(profile.contains(100));
        assert!(!profile.contains(0));
        assert!(!profile.contains(101));
        assert!(!profile.contains(-3));
    }

    #[test]
    fn partial_override() {
        let catalog = Catalog::default()
            .with_override(Difficulty::Hard, Some(3), None)
            .expect("3 is positive");

        let hard = catalog.profile_for(Difficulty::Hard);
        assert_eq!((hard.attempt_budget(), hard.range()), (3, 150));
        assert_eq!(
            catalog.profile_for(Difficulty::Easy),
            DifficultyProfile::EASY
        );
    }

    #[test]
    fn zero_override_rejected() {
        let err = Catalog::default()
            .with_override(Difficulty::Easy, None, Some(0))
            .expect_err("zero range");

        assert_eq!(
            err,
            InvalidProfile {
                difficulty: Difficulty::Easy,
                field: "range",
            }
        );
        assert_eq!(err.to_string(), "easy difficulty needs a positive range");
    }
}
