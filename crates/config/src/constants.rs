//! Centralized constants for the tracer configuration crate.

/// Default configuration file name under the platform config directory.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "tracing.json";

/// Application directory name used for the platform config directory.
pub const CONFIG_DIR_APP_NAME: &str = "tracer";

/// Environment variable overriding the configuration file path.
pub const CONFIG_PATH_ENV: &str = "TRACER_CONFIG_PATH";
