use std::ops::Not;

use rand::rngs::StdRng;
use tracing::{debug, info, instrument};

use super::{
    random::RandomSource,
    round::{start_round, submit_guess},
    Catalog, Difficulty, DifficultyProfile, RoundState,
};

/// Everything the player can see and change.
///
/// The presentation layer calls one method per user action and reads the
/// accessors afterwards to redraw.
#[derive(Debug, Clone)]
pub struct Session<R = StdRng> {
    catalog: Catalog,
    difficulty: Difficulty,
    round: RoundState,
    rng: R,
    show_rules: bool,
}

impl<R> Session<R> {
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub const fn profile(&self) -> DifficultyProfile {
        self.catalog.profile_for(self.difficulty)
    }

    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    pub const fn show_rules(&self) -> bool {
        self.show_rules
    }

    pub fn toggle_rules(&mut self) {
        self.show_rules = self.show_rules.not();
    }
}

impl<R: RandomSource> Session<R> {
    pub fn new(catalog: Catalog, difficulty: Difficulty, mut rng: R) -> Self {
        let round = start_round(&catalog.profile_for(difficulty), &mut rng);

        Self {
            catalog,
            difficulty,
            round,
            rng,
            show_rules: false,
        }
    }

    /// Switches difficulty and throws away the current round.
    ///
    /// Picking the difficulty that's already selected does nothing.
    #[instrument(skip(self), fields(from = %self.difficulty))]
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty == self.difficulty {
            return;
        }

        self.difficulty = difficulty;
        self.restart();
    }

    pub fn play_again(&mut self) {
        info!(difficulty = %self.difficulty, "starting over");
        self.restart();
    }

    fn restart(&mut self) {
        self.round = start_round(&self.profile(), &mut self.rng);
        debug!(attempts = self.round.attempts_remaining(), "new round");
    }

    /// Empty input is ignored, like a disabled guess button.
    pub fn submit(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }

        let profile = self.profile();
        self.round = submit_guess(self.round.clone(), &profile, raw);
    }
}
