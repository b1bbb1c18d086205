//! Configuration discovery and loading for Footprint.
//!
//! The file is plain TOML with every key optional. Raw structs mirror the file
//! and never leave this crate; [`load_settings`] resolves them into a
//! [`Settings`] value whose existence proves every field is valid.

#![allow(clippy::missing_errors_doc)]

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use footprint_types::{MinQuantity, OwnerId, Settings};

/// Environment variable that overrides the default config location.
pub const CONFIG_ENV: &str = "FOOTPRINT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid `{key}` in config at {}: {reason}", path.display())]
    Invalid {
        path: PathBuf,
        key: &'static str,
        reason: String,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path,
        }
    }
}

// ============================================================================
// Raw file shape
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    validation: Option<RawValidation>,
    owner: Option<RawOwner>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawValidation {
    min_quantity: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOwner {
    placeholder_id: Option<String>,
}

impl RawConfig {
    fn resolve(self, path: &Path) -> Result<Settings, ConfigError> {
        let min_quantity = match self.validation.and_then(|v| v.min_quantity) {
            Some(value) => MinQuantity::new(value).map_err(|err| ConfigError::Invalid {
                path: path.to_path_buf(),
                key: "validation.min_quantity",
                reason: err.to_string(),
            })?,
            None => MinQuantity::default(),
        };

        let default_owner = match self.owner.and_then(|o| o.placeholder_id) {
            Some(id) => OwnerId::new(id.trim()).map_err(|err| ConfigError::Invalid {
                path: path.to_path_buf(),
                key: "owner.placeholder_id",
                reason: err.to_string(),
            })?,
            None => OwnerId::placeholder(),
        };

        Ok(Settings::new(min_quantity, default_owner))
    }
}

// ============================================================================
// Discovery and loading
// ============================================================================

/// `$FOOTPRINT_CONFIG` if set and non-empty, otherwise `~/.footprint/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    config_path_from(std::env::var_os(CONFIG_ENV), dirs::home_dir())
}

fn config_path_from(env: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    match env {
        Some(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => home.map(|home| home.join(".footprint").join("config.toml")),
    }
}

/// Parse settings from TOML text. `path` is only used for error reporting.
pub fn parse_settings(content: &str, path: &Path) -> Result<Settings, ConfigError> {
    let raw: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    raw.resolve(path)
}

/// Read settings from `path`. A missing file yields `Ok(None)`.
pub fn load_from(path: &Path) -> Result<Option<Settings>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(None);
        }
        Err(source) => {
            tracing::warn!("Failed to read config at {:?}: {}", path, source);
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    match parse_settings(&content, path) {
        Ok(settings) => Ok(Some(settings)),
        Err(err) => {
            tracing::warn!("Rejected config at {:?}: {}", path, err);
            Err(err)
        }
    }
}

/// Resolve settings for a run.
///
/// An explicit path must exist. A discovered path that does not exist, or no
/// home directory at all, means defaults.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    if let Some(path) = explicit {
        return match load_from(path)? {
            Some(settings) => Ok(settings),
            None => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        };
    }

    match config_path() {
        Some(path) => Ok(load_from(&path)?.unwrap_or_default()),
        None => Ok(Settings::default()),
    }
}
