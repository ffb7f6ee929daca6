//! Settings resolved from the commandline, environment, an optional TOML
//! file and built-in defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::types::{Action, Mode};

/// Extension used when none is configured anywhere.
pub const DEFAULT_EXTENSION: &str = ".bak";

/// Effective settings for one bakker invocation.
///
/// The settings file is intended to be edited by humans; every field is
/// optional and missing fields fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Suffix that derives the marked name from the unmarked one.
    pub extension: String,

    /// Whether a transfer happens: toggle, add or remove.
    pub mode: Mode,

    /// How a transfer is performed: move or copy.
    pub action: Action,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            mode: Mode::Toggle,
            action: Action::Move,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            return Err(anyhow!("extension must not be empty"));
        }
        Ok(())
    }
}

/// Load settings from a TOML file.
///
/// If the file is missing, returns `Settings::default()`.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        let settings = Settings::default();
        settings.validate()?;
        return Ok(settings);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let settings: Settings =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    settings.validate()?;
    Ok(settings)
}
