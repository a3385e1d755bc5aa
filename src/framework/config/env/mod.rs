pub const CONFIG_VAR: &str = "NUMGUESS_CONFIG";
pub const LOG_VAR: &str = "NUMGUESS_LOG";

/// Location of the TOML config file.
#[derive(Clone, PartialEq, Eq)]
pub struct Path {
    inner: std::path::PathBuf,
}

impl Path {
    fn new(s: &str) -> Self {
        Self {
            inner: std::path::Path::new(s).to_path_buf(),
        }
    }

    fn from_string(s: String) -> Self {
        Self { inner: s.into() }
    }

    pub fn from_var() -> Option<Self> {
        std::env::var(CONFIG_VAR).map(Self::from_string).ok()
    }

    /// `--config` wins, then the environment, then the default.
    #[tracing::instrument(level = "trace")]
    pub fn resolve(cli: Option<&Self>) -> Self {
        cli.cloned()
            .or_else(Self::from_var)
            .unwrap_or_default()
    }

    pub fn as_path(&self) -> &std::path::Path {
        &self.inner
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new("./numguess.toml")
    }
}

impl std::fmt::Debug for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::path::Path::fmt(&self.inner, f)
    }
}

impl std::str::FromStr for Path {
    type Err = <std::path::PathBuf as std::str::FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            inner: std::str::FromStr::from_str(s)?,
        })
    }
}
