//! Error types for rule-settings loading.

use thiserror::Error;

/// Failures while loading or parsing the rule-settings document.
///
/// A *missing* settings file is not represented here: absence is a
/// valid state that degrades to built-in defaults (see
/// [`load`](crate::load)). These errors cover a file that exists but
/// can't be read, or content that isn't a valid settings document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file exists but could not be read.
    #[error("failed to read rule settings: {0}")]
    Io(#[from] std::io::Error),

    /// The settings document is not valid JSON for the expected shape.
    #[error("failed to parse rule settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for Results with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
