//! Configuration loading and validation.
//!
//! Responsibilities:
//! - Read the configuration file and parse it as JSON.
//! - Validate the parsed tree into `TracingSettings` in a single pass,
//!   mapping every structural problem to an explicit `ConfigError`.
//! - Determine the configuration file location (env override or platform
//!   default).
//!
//! Does NOT handle:
//! - Publication of the loaded document (see `store` module).
//! - Merging of multiple configuration sources: the document is the single
//!   source of values, and `TRACER_CONFIG_PATH` only locates it.
//!
//! Invariants:
//! - Validation happens entirely at load time; query methods never encounter
//!   a missing key or a wrong type.
//! - A load failure produces an error, never a partial or empty document.

mod document;
mod error;
mod path;

pub use error::ConfigError;
pub use path::default_config_path;

pub use document::settings_from_document;
pub(crate) use document::read_settings_file;
