//! Seek bar configuration
//!
//! Options are read from a TOML file whose keys follow the player option
//! paths, e.g. `controlBar.progressControl.keepTooltipsInside`:
//!
//! ```toml
//! [controlBar.progressControl]
//! keepTooltipsInside = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeekBarError};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub control_bar: ControlBarConfig,
}

/// `controlBar` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlBarConfig {
    pub progress_control: ProgressControlConfig,
}

/// `controlBar.progressControl` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressControlConfig {
    /// Keep the floating time tooltip inside the player's visible area
    pub keep_tooltips_inside: bool,
}

impl Config {
    /// Path of the user config file (`<config dir>/seekbar/config.toml`).
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(SeekBarError::NoConfigDir)?;
        Ok(dir.join("seekbar").join("config.toml"))
    }

    /// Load the user config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load config from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| SeekBarError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse config from TOML text. Missing sections take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        let write_err = |source| SeekBarError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }

    /// `controlBar.progressControl.keepTooltipsInside`
    pub fn keep_tooltips_inside(&self) -> bool {
        self.control_bar.progress_control.keep_tooltips_inside
    }

    /// Convenience constructor used by hosts that take the flag from elsewhere.
    pub fn with_keep_tooltips_inside(mut self, enabled: bool) -> Self {
        self.control_bar.progress_control.keep_tooltips_inside = enabled;
        self
    }
}
