//! Workspace umbrella crate.
//!
//! Host applications can depend on `soundboard` and reach the whole core
//! through the façade in `core-service` without wiring each workspace crate
//! individually.

pub use core_runtime as runtime;
pub use core_service as service;

pub use core_service::{SoundboardBuilder, SoundboardService};
