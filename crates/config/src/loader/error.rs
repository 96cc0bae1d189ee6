//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading and query failures.
//! - Carry enough context for debugging (file paths, dotted key paths,
//!   expected vs. found JSON types).
//!
//! Does NOT handle:
//! - Recovery policy (the store decides what a failed load means for its
//!   current state).
//!
//! Invariants:
//! - `key_path` values are dotted paths from the document root
//!   (e.g. `tracing.integrations.db.enabled`); `$` denotes the root itself.
//! - File-level variants always include the offending file path.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or querying tracer configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be opened or read.
    #[error("failed to read configuration file at {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its contents are not valid JSON.
    ///
    /// An empty or truncated file falls under this variant: `serde_json`
    /// rejects empty input, so there is no silent empty-document path.
    #[error("failed to parse configuration file at {path}: {source}")]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A required key is absent from the document.
    #[error("missing required key '{key_path}' in configuration document")]
    MissingKey { key_path: String },

    /// A key is present but holds a value of the wrong JSON type.
    #[error("expected {expected} at '{key_path}', found {found}")]
    TypeMismatch {
        key_path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A query was issued before any successful load.
    #[error("configuration has not been loaded")]
    NotLoaded,

    /// The platform configuration directory could not be determined.
    #[error("unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),
}

impl ConfigError {
    /// Returns true if this error means the file did not exist.
    ///
    /// Lets callers distinguish "no configuration present" (often fine at
    /// startup) from a corrupt or unreadable file.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::FileUnreadable { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
