//! Command handlers for the mailroom binary.

pub mod completions;
pub mod config;
pub mod send;
pub mod streams;

use std::path::Path;

use anyhow::Result;
use mailroom::Config;

/// Resolve the configuration: an explicit file, or the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
