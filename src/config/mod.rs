//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (paths, thresholds, score points)
//! - Logging option types shared between the CLI and the library

mod constants;
mod types;

pub use constants::*;
pub use types::{LogFormat, LogLevel};
