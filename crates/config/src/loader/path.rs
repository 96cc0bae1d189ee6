//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Determine the configuration file path: `TRACER_CONFIG_PATH` override
//!   first, platform default via the `directories` crate otherwise.
//!
//! Does NOT handle:
//! - File I/O or document validation (see `document.rs`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned env values are trimmed.

use std::path::PathBuf;

use super::error::ConfigError;
use crate::constants::{CONFIG_DIR_APP_NAME, CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE_NAME};

/// Returns the path to the configuration file.
///
/// If `TRACER_CONFIG_PATH` is set (and not empty/whitespace), it is used as
/// is. Otherwise the platform config directory applies:
/// - Linux/macOS: `~/.config/tracer/tracing.json`
/// - Windows: `%AppData%\tracer\tracing.json`
///
/// # Errors
/// Returns `ConfigError::ConfigDirUnavailable` if the platform config
/// directory cannot be determined (should be rare).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = env_var_or_none(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = directories::ProjectDirs::from("", "", CONFIG_DIR_APP_NAME).ok_or_else(|| {
        ConfigError::ConfigDirUnavailable("failed to determine project directories".to_string())
    })?;

    Ok(proj_dirs.config_dir().join(DEFAULT_CONFIG_FILE_NAME))
}

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}
