//! Subcommand handlers for the `seekbar` binary.

pub mod config;
pub mod play;
pub mod progress_row;

use std::path::Path;

use anyhow::{Context, Result};
use seekbar::Config;

/// Load config from `path` if given, otherwise from the user config file.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::load().context("Failed to load user config"),
    }
}
