//! Configuration management for the tracer runtime.
//!
//! This crate loads the tracer's JSON configuration document from disk into a
//! typed, validated model and answers the queries the instrumentation layer
//! needs: the application name, the global tracing flag, and per-integration
//! enabled flags.
//!
//! The host constructs a [`ConfigStore`] during initialization, loads it once,
//! and hands it (by reference or inside an `Arc` of its choosing) to every
//! consumer. Reads are safe from any thread; a reload publishes the new
//! document atomically, so readers see either the old or the fully validated
//! new document, never a partial one.

pub mod constants;
mod loader;
mod store;
pub mod types;

pub use loader::{ConfigError, default_config_path, settings_from_document};
pub use store::ConfigStore;
pub use types::{IntegrationSettings, TracingSettings};
