//! # Runtime Infrastructure
//!
//! Shared process-level plumbing for the soundboard core. Currently this is
//! the logging/tracing bootstrap; hosts call [`logging::init_logging`] once at
//! startup and every crate in the workspace logs through `tracing`.

pub mod error;
pub mod logging;

pub use error::{Error, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};
