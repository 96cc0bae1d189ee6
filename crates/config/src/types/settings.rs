//! Typed model of the tracer configuration document.
//!
//! Responsibilities:
//! - Define `TracingSettings` (the validated `tracing` object) and
//!   `IntegrationSettings` (one entry of `tracing.integrations`).
//! - Answer queries against a held document without further validation.
//!
//! Does NOT handle:
//! - Construction from raw JSON (see `loader::document` for the validation
//!   pass that maps structural problems to `ConfigError`).
//!
//! Invariants:
//! - Integration names are matched by exact, case-sensitive equality.
//! - A name absent from `integrations` is disabled, never an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The validated contents of the `tracing` object.
///
/// Instances are produced by the loader's validation pass, so every field
/// here is known to have had the right JSON type in the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingSettings {
    /// Service name reported on every trace.
    pub application_name: String,
    /// Global switch for the tracer.
    pub enabled: bool,
    /// Per-integration switches, keyed by integration name.
    #[serde(default)]
    pub integrations: BTreeMap<String, IntegrationSettings>,
}

/// Settings for a single named integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationSettings {
    /// Whether instrumentation for this integration is active.
    pub enabled: bool,
}

impl TracingSettings {
    /// Returns whether the named integration is enabled.
    ///
    /// Unknown integrations are treated as disabled (default-deny) rather
    /// than as an error.
    pub fn is_integration_enabled(&self, name: &str) -> bool {
        self.integrations
            .get(name)
            .map(|integration| integration.enabled)
            .unwrap_or(false)
    }

    /// Iterates over all configured integration names, in sorted order.
    pub fn integration_names(&self) -> impl Iterator<Item = &str> {
        self.integrations.keys().map(String::as_str)
    }
}
