//! Document parsing and validation.
//!
//! Responsibilities:
//! - Read the configuration file into a `serde_json::Value` tree.
//! - Validate the tree into `TracingSettings` in a single pass, reporting the
//!   first structural problem as a `MissingKey` or `TypeMismatch` with the
//!   full dotted key path.
//!
//! Does NOT handle:
//! - Locating the file (see `path.rs`).
//! - Deciding what a failure means for previously loaded state (see `store`).
//!
//! Invariants:
//! - Validation checks everything the query methods will later read; a
//!   returned `TracingSettings` can be queried without further type checks.
//! - Integration entries are validated even when the integration is disabled,
//!   so a malformed entry is caught at load rather than at first query.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use super::error::ConfigError;
use crate::types::{IntegrationSettings, TracingSettings};

const TRACING_KEY: &str = "tracing";
const APPLICATION_NAME_KEY: &str = "applicationName";
const ENABLED_KEY: &str = "enabled";
const INTEGRATIONS_KEY: &str = "integrations";

/// Reads and validates the configuration file at `path`.
///
/// Non-ASCII paths are handled by `std::path` natively on all platforms.
pub(crate) fn read_settings_file(path: &Path) -> Result<TracingSettings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileUnreadable {
        path: path.to_path_buf(),
        source: e,
    })?;

    let document: Value =
        serde_json::from_str(&content).map_err(|e| ConfigError::MalformedDocument {
            path: path.to_path_buf(),
            source: e,
        })?;

    settings_from_document(&document)
}

/// Validates a parsed JSON document into `TracingSettings`.
///
/// Expected shape:
///
/// ```json
/// {
///   "tracing": {
///     "applicationName": "<string>",
///     "enabled": true,
///     "integrations": {
///       "<integrationName>": { "enabled": true }
///     }
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns `ConfigError::MissingKey` when a required key is absent and
/// `ConfigError::TypeMismatch` when a key holds the wrong JSON type; both
/// carry the dotted path of the offending key.
pub fn settings_from_document(document: &Value) -> Result<TracingSettings, ConfigError> {
    let root = as_object(document, "$")?;

    let tracing = as_object(require(root, TRACING_KEY, TRACING_KEY)?, TRACING_KEY)?;

    let application_name = as_string(
        require(tracing, APPLICATION_NAME_KEY, "tracing.applicationName")?,
        "tracing.applicationName",
    )?
    .to_string();

    let enabled = as_bool(
        require(tracing, ENABLED_KEY, "tracing.enabled")?,
        "tracing.enabled",
    )?;

    let integrations_value = require(tracing, INTEGRATIONS_KEY, "tracing.integrations")?;
    let integrations_object = as_object(integrations_value, "tracing.integrations")?;

    let mut integrations = BTreeMap::new();
    for (name, entry) in integrations_object {
        let entry_path = format!("tracing.integrations.{name}");
        let entry_object = as_object(entry, &entry_path)?;
        let enabled_path = format!("{entry_path}.enabled");
        let enabled = as_bool(require(entry_object, ENABLED_KEY, &enabled_path)?, &enabled_path)?;
        integrations.insert(name.clone(), IntegrationSettings { enabled });
    }

    Ok(TracingSettings {
        application_name,
        enabled,
        integrations,
    })
}

/// Looks up `key` in `object`, reporting its dotted path when absent.
fn require<'a>(
    object: &'a serde_json::Map<String, Value>,
    key: &str,
    key_path: &str,
) -> Result<&'a Value, ConfigError> {
    object.get(key).ok_or_else(|| ConfigError::MissingKey {
        key_path: key_path.to_string(),
    })
}

fn as_object<'a>(
    value: &'a Value,
    key_path: &str,
) -> Result<&'a serde_json::Map<String, Value>, ConfigError> {
    value.as_object().ok_or_else(|| ConfigError::TypeMismatch {
        key_path: key_path.to_string(),
        expected: "object",
        found: json_type_name(value),
    })
}

fn as_string<'a>(value: &'a Value, key_path: &str) -> Result<&'a str, ConfigError> {
    value.as_str().ok_or_else(|| ConfigError::TypeMismatch {
        key_path: key_path.to_string(),
        expected: "string",
        found: json_type_name(value),
    })
}

fn as_bool(value: &Value, key_path: &str) -> Result<bool, ConfigError> {
    value.as_bool().ok_or_else(|| ConfigError::TypeMismatch {
        key_path: key_path.to_string(),
        expected: "boolean",
        found: json_type_name(value),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
