mod app;
use std::ops::Deref;

pub use app::AppConfig as Config;

pub mod env;

use crate::{
    cli::Cli,
    functions::games::number_guess::{Catalog, Difficulty, InvalidProfile},
};

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
pub enum Error {
    #[error("problem loading config file: {0}")]
    App(#[from] app::Error),

    #[error("invalid difficulty settings: {0}")]
    #[event(level = ERROR)]
    Profile(#[from] InvalidProfile),

    #[error("couldn't print config: {0}")]
    #[event(level = ERROR)]
    Print(#[from] toml::ser::Error),
}

/// The config file with command-line overrides applied.
#[derive(Debug, Clone)]
pub struct ConfigSetup {
    pub app: Config,
    catalog: Catalog,
    path: env::Path,
}

impl ConfigSetup {
    #[tracing::instrument(skip_all, name = "config")]
    pub fn load(cli: &Cli) -> Result<Self, Error> {
        let path = env::Path::resolve(cli.config.as_ref());

        let mut app = Config::load(&path)?;

        if let Some(difficulty) = cli.difficulty {
            tracing::trace!(%difficulty, "difficulty set on command line");
            app.game.difficulty = Some(difficulty);
        }

        if let Some(seed) = cli.seed {
            tracing::trace!(seed, "seed set on command line");
            app.game.seed = Some(seed);
        }

        let catalog = app.catalog()?;

        tracing::debug!(?catalog, "loaded");

        Ok(Self { app, catalog, path })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn difficulty(&self) -> Difficulty {
        self.app.game.difficulty.unwrap_or_default()
    }

    pub fn seed(&self) -> Option<u64> {
        self.app.game.seed
    }

    pub fn path(&self) -> &env::Path {
        &self.path
    }

    /// The resolved config as TOML.
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml::to_string_pretty(&self.app)?)
    }
}

impl Deref for ConfigSetup {
    type Target = Config;

    fn deref(&self) -> &Self::Target {
        &self.app
    }
}
