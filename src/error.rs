//! Seek bar errors.

use std::path::PathBuf;

/// Errors that can occur while building a seek bar or loading its configuration.
///
/// The control itself never fails at runtime: player state is trusted as-is
/// and every player request is assumed to succeed.
#[derive(Debug, thiserror::Error)]
pub enum SeekBarError {
    #[error("No component registered under '{name}'")]
    UnknownComponent { name: String },

    #[error("Component '{name}' is already registered")]
    DuplicateComponent { name: String },

    #[error("Component registered under '{name}' is not a tooltip bar")]
    NotATooltip { name: String },

    #[error("Could not determine a configuration directory for this platform")]
    NoConfigDir,

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, SeekBarError>;
