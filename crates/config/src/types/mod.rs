//! Configuration type definitions for the tracer runtime.
//!
//! Responsibilities:
//! - Define the typed configuration model (`TracingSettings`, `IntegrationSettings`).
//! - Provide infallible convenience queries over a held document.
//!
//! Does NOT handle:
//! - Loading or validating documents from disk (see `loader` module).
//! - Publication and lifecycle of the loaded document (see `store` module).
//!
//! Invariants:
//! - Field names serialize in camelCase to match the on-disk document
//!   (`applicationName`, not `application_name`).
//! - An integration absent from `integrations` is disabled (default-deny).

mod settings;

pub use settings::{IntegrationSettings, TracingSettings};
