pub mod config;
pub use config::ConfigSetup;

pub mod logging;
