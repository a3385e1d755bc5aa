use thiserror::Error as ThisError;
use thisslime::TracingError;

#[derive(Debug, ThisError, TracingError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] crate::framework::config::Error),

    #[error(transparent)]
    Terminal(#[from] crate::terminal::Error),
}
