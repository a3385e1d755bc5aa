#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

pub mod cli;

pub mod errors;
pub use errors::Error;

pub mod framework;

/// Game logic, independent of any front-end.
pub mod functions;

/// The terminal front-end.
pub mod terminal;
