use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::functions::games::number_guess::{Catalog, Difficulty, InvalidProfile};

use super::env;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub game: GameConfig,

    #[serde(default)]
    pub difficulty: DifficultyOverrides,

    #[serde(default)]
    pub logs: LogsConfig,
}

impl AppConfig {
    /// A missing file is fine and gives the defaults.
    #[tracing::instrument(skip_all, fields(path = ?path))]
    pub(super) fn load(path: &env::Path) -> Result<Self, Error> {
        if !path.as_path().exists() {
            debug!("no config file, using defaults");
        }

        ::config::Config::builder()
            .add_source(
                ::config::File::from(path.as_path())
                    .format(::config::FileFormat::Toml)
                    .required(false),
            )
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)
    }

    /// The standard catalog with any `[difficulty.*]` tables applied.
    pub fn catalog(&self) -> Result<Catalog, InvalidProfile> {
        Difficulty::ALL
            .into_iter()
            .try_fold(Catalog::default(), |catalog, id| {
                match self.difficulty.get(id) {
                    Some(ProfileConfig { attempts, range }) => {
                        catalog.with_override(id, *attempts, *range)
                    }
                    None => Ok(catalog),
                }
            })
    }
}

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
pub enum Error {
    #[error("file read error: {0}")]
    #[event(level = ERROR)]
    Read(config::ConfigError),

    #[error("parsing error: {0}")]
    #[event(level = ERROR)]
    Parse(config::ConfigError),
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DifficultyOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    easy: Option<ProfileConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    medium: Option<ProfileConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    hard: Option<ProfileConfig>,
}

impl DifficultyOverrides {
    const fn get(&self, id: Difficulty) -> Option<&ProfileConfig> {
        match id {
            Difficulty::Easy => self.easy.as_ref(),
            Difficulty::Medium => self.medium.as_ref(),
            Difficulty::Hard => self.hard.as_ref(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attempts: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    range: Option<u32>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LogsConfig {
    #[serde(default)]
    flavor_texts: Vec<String>,
}

impl LogsConfig {
    pub fn flavor_text(&self) -> Option<&str> {
        let flavor_text = self
            .flavor_texts
            .iter()
            .choose(&mut rand::thread_rng())
            .map(|s| s.as_str());

        if flavor_text.is_none() {
            warn!("no flavor texts provided in config :(");
        }

        flavor_text
    }
}
