//! The configuration store: load-once, read-many access to tracer settings.
//!
//! Responsibilities:
//! - Own the currently published `TracingSettings` document.
//! - Load (and reload) the document from disk, publishing it atomically.
//! - Answer the tracer's queries: application name, global enabled flag,
//!   per-integration enabled flag.
//!
//! Does NOT handle:
//! - Parsing or validation details (see `loader::document`).
//! - Process-wide distribution: the host decides how to share the store
//!   (typically inside an `Arc` created during initialization).
//!
//! Invariants:
//! - A new document is fully read and validated before it is published;
//!   readers observe either the previous document or the complete new one.
//! - A failed load leaves the previously published document (or the Unloaded
//!   state) untouched.
//! - Queries before the first successful load fail with `NotLoaded`.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use crate::loader::{ConfigError, read_settings_file};
use crate::types::TracingSettings;

/// Holds the tracer configuration document and answers read-only queries.
///
/// The store starts empty (Unloaded); [`ConfigStore::load`] populates it.
/// All methods take `&self`, so a store shared across threads supports
/// unsynchronized concurrent reads and reload-during-read.
#[derive(Debug, Default)]
pub struct ConfigStore {
    settings: RwLock<Option<Arc<TracingSettings>>>,
}

impl ConfigStore {
    /// Creates an empty store. Queries fail with `NotLoaded` until a
    /// successful [`load`](ConfigStore::load).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `settings`, bypassing the
    /// filesystem. Intended for dependency injection in tests and for hosts
    /// that obtain settings elsewhere.
    pub fn from_settings(settings: TracingSettings) -> Self {
        Self {
            settings: RwLock::new(Some(Arc::new(settings))),
        }
    }

    /// Loads the configuration file at `path` and publishes it.
    ///
    /// The file is read, parsed, and validated in full before publication,
    /// so concurrent readers see either the previously published document or
    /// the complete new one. On error the store's prior state is retained:
    /// a failed first load leaves it Unloaded, a failed reload leaves the
    /// previous document in place.
    ///
    /// # Errors
    /// - `FileUnreadable` if the file cannot be opened or read.
    /// - `MalformedDocument` if the contents are not valid JSON (including
    ///   an empty file).
    /// - `MissingKey` / `TypeMismatch` if the document does not match the
    ///   expected shape.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let settings = read_settings_file(path).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "configuration load failed");
        })?;

        tracing::debug!(
            path = %path.display(),
            application_name = %settings.application_name,
            enabled = settings.enabled,
            integrations = settings.integrations.len(),
            "configuration loaded"
        );

        *self.write_guard() = Some(Arc::new(settings));
        Ok(())
    }

    /// Returns whether a document has been published.
    pub fn is_loaded(&self) -> bool {
        self.read_guard().is_some()
    }

    /// Returns the configured application name (`tracing.applicationName`).
    ///
    /// # Errors
    /// Returns `NotLoaded` before the first successful load.
    pub fn application_name(&self) -> Result<String, ConfigError> {
        Ok(self.snapshot()?.application_name.clone())
    }

    /// Returns the global tracing flag (`tracing.enabled`).
    ///
    /// # Errors
    /// Returns `NotLoaded` before the first successful load.
    pub fn is_tracing_enabled(&self) -> Result<bool, ConfigError> {
        Ok(self.snapshot()?.enabled)
    }

    /// Returns whether the named integration is enabled.
    ///
    /// Names are matched case-sensitively against the keys of
    /// `tracing.integrations`; an absent name is disabled (default-deny).
    ///
    /// # Errors
    /// Returns `NotLoaded` before the first successful load.
    pub fn is_integration_enabled(&self, name: &str) -> Result<bool, ConfigError> {
        Ok(self.snapshot()?.is_integration_enabled(name))
    }

    /// Returns a snapshot of the published document.
    ///
    /// The snapshot is a cheap `Arc` clone; use it to read several fields
    /// coherently across a concurrent reload.
    ///
    /// # Errors
    /// Returns `NotLoaded` before the first successful load.
    pub fn settings(&self) -> Result<Arc<TracingSettings>, ConfigError> {
        self.snapshot()
    }

    fn snapshot(&self) -> Result<Arc<TracingSettings>, ConfigError> {
        self.read_guard().clone().ok_or(ConfigError::NotLoaded)
    }

    // A poisoned lock only means a reader panicked mid-read; the published
    // Arc is still consistent, so recover the guard instead of panicking.
    fn read_guard(&self) -> std::sync::RwLockReadGuard<'_, Option<Arc<TracingSettings>>> {
        self.settings.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> std::sync::RwLockWriteGuard<'_, Option<Arc<TracingSettings>>> {
        self.settings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
