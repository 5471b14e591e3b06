//! Configuration loaded from `config.toml`.
//!
//! The default location is `$XDG_CONFIG_HOME/zcalc/config.toml`. Every key
//! is optional:
//!
//! ```toml
//! [display]
//! max_chars = 9
//! error_text = "error"
//!
//! [keys]
//! sign = ["n"]
//! clear = ["Delete"]
//! ```

use crate::calculator::{DEFAULT_ERROR_TEXT, DEFAULT_MAX_CHARS, DisplaySettings};
use crate::input::{Keymap, KeymapError};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::{fs, io};
use thiserror::Error;
use tracing::debug;

/// Smallest width that still fits a one-digit mantissa in exponential form.
const MIN_MAX_CHARS: usize = 3;
/// Widest result the display will format.
const MAX_MAX_CHARS: usize = 64;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("display.max_chars must be at least 3, got {0}")]
    MaxCharsTooSmall(usize),
    #[error("display.max_chars must be at most 64, got {0}")]
    MaxCharsTooLarge(usize),
    #[error(transparent)]
    Keymap(#[from] KeymapError),
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    /// Extra key bindings: action name to key names.
    pub keys: HashMap<String, Vec<String>>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub max_chars: usize,
    pub error_text: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            error_text: DEFAULT_ERROR_TEXT.to_string(),
        }
    }
}

impl Config {
    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, a missing default file
    /// yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(path = %path.display(), "loading config");
                Self::from_toml_str(&contents).map_err(|err| match err {
                    ConfigError::Parse { source, .. } => ConfigError::Parse { path, source },
                    other => other,
                })
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound && !required => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.display.max_chars < MIN_MAX_CHARS {
            return Err(ConfigError::MaxCharsTooSmall(self.display.max_chars));
        }
        if self.display.max_chars > MAX_MAX_CHARS {
            return Err(ConfigError::MaxCharsTooLarge(self.display.max_chars));
        }
        // Surface unknown action names at load time.
        self.keymap()?;
        Ok(())
    }

    pub fn display_settings(&self) -> DisplaySettings {
        DisplaySettings {
            max_chars: self.display.max_chars,
            error_text: self.display.error_text.clone(),
        }
    }

    pub fn keymap(&self) -> Result<Keymap, KeymapError> {
        Keymap::with_overrides(&self.keys)
    }
}
