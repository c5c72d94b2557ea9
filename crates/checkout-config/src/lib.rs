//! # checkout-config: Rule-Settings Loading
//!
//! Loads the external JSON rule-settings document and builds the
//! immutable [`RuleRegistry`] the checkout sessions share.
//!
//! ## Degradation Ladder
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  settings file present, valid   → configured values, per-field      │
//! │                                   defaults for anything unset       │
//! │  settings file missing          → built-in defaults (debug log)     │
//! │  settings file unreadable/bad   → typed error from load();          │
//! │                                   load_or_default() warns and       │
//! │                                   degrades to built-in defaults     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Loading is one-shot: call it once at startup, build the registry,
//! and hand the registry out behind an `Arc`. Changing the file later
//! has no effect on a running process.
//!
//! ## Settings Document Format
//! ```json
//! {
//!     "two_for_one": { "amount": 2 },
//!     "bulk_price":  { "amount": 3, "discount": 4.50, "products": ["SR1"] },
//!     "percent_off": { "amount": 3, "discount": 0.5,  "products": ["CF1", "PC1"] }
//! }
//! ```

use std::path::Path;

use tracing::{debug, info, warn};

use checkout_core::{RuleRegistry, RuleSettings};

pub mod error;

pub use error::{ConfigError, ConfigResult};

// =============================================================================
// Parsing & Loading
// =============================================================================

/// Parses a rule-settings document from a JSON string.
pub fn parse(json: &str) -> ConfigResult<RuleSettings> {
    Ok(serde_json::from_str(json)?)
}

/// Loads rule settings from a file.
///
/// A missing file is not an error: it degrades to the empty mapping,
/// which makes every rule use its built-in defaults. A file that exists
/// but can't be read or parsed is a real failure and surfaces as a
/// typed error.
pub fn load(path: impl AsRef<Path>) -> ConfigResult<RuleSettings> {
    let path = path.as_ref();

    if !path.exists() {
        debug!(?path, "Rule settings file not found, using defaults");
        return Ok(RuleSettings::new());
    }

    info!(?path, "Loading rule settings from file");
    let contents = std::fs::read_to_string(path)?;
    parse(&contents)
}

/// Loads rule settings, degrading to defaults on any failure.
///
/// The degraded path is loggable but non-fatal, matching the contract
/// that configuration problems must never take the checkout down.
pub fn load_or_default(path: impl AsRef<Path>) -> RuleSettings {
    load(path).unwrap_or_else(|e| {
        warn!("Failed to load rule settings: {}. Using defaults.", e);
        RuleSettings::new()
    })
}

/// One-shot convenience: load settings and build the standard registry.
///
/// ## Example
/// ```rust,no_run
/// use std::sync::Arc;
/// use checkout_core::Checkout;
///
/// let registry = Arc::new(checkout_config::standard_registry("rules.json"));
/// let checkout = Checkout::new(registry);
/// ```
pub fn standard_registry(path: impl AsRef<Path>) -> RuleRegistry {
    RuleRegistry::standard(&load_or_default(path))
}

// =============================================================================
// Unit Tests
// =============================================================================
