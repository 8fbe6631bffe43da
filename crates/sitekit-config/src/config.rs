// crates/sitekit-config/src/config.rs
// ============================================================================
// Module: Sitekit Runtime Configuration
// Description: Environment resolution for the site runtime settings.
// Purpose: Provide strict, fail-closed resolution with documented defaults.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Runtime settings are resolved from the process environment once at
//! start-up. Missing values fall back to documented defaults, required keys
//! without a value fail closed, and the resolved record is immutable and
//! handed to consumers by reference.
//! Security posture: environment inputs are untrusted; resolution enforces
//! hard size limits and fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::env;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable naming the runtime mode.
pub const RUNTIME_MODE_VAR: &str = "NODE_ENV";
/// Environment variable naming the public application URL.
pub const APP_URL_VAR: &str = "NEXT_PUBLIC_APP_URL";
/// Environment variable naming the public version string.
pub const VERSION_VAR: &str = "NEXT_PUBLIC_VERSION";
/// Default runtime mode when the environment does not set one.
pub const DEFAULT_RUNTIME_MODE: &str = "development";
/// Default public application URL.
pub const DEFAULT_APP_URL: &str = "http://localhost:3000";
/// Default public version string.
pub const DEFAULT_VERSION: &str = "1.0.0";
/// Keys resolved into the record, in resolution order.
pub(crate) const KNOWN_VARS: [&str; 3] = [RUNTIME_MODE_VAR, APP_URL_VAR, VERSION_VAR];
/// Maximum bytes allowed for a single environment key.
pub(crate) const MAX_KEY_BYTES: usize = 255;
/// Maximum bytes allowed for a single environment value.
pub(crate) const MAX_VALUE_BYTES: usize = 64 * 1024;

// ============================================================================
// SECTION: Runtime Mode
// ============================================================================

/// Runtime modes for the deployed application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeMode {
    /// Local development (default).
    #[default]
    Development,
    /// Production deployment.
    Production,
    /// Test harness runs.
    Test,
}

impl RuntimeMode {
    /// Returns the canonical environment string for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

impl FromStr for RuntimeMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(ConfigError::Invalid(format!("unsupported runtime mode: {other}"))),
        }
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Resolver for environment-backed configuration lookups.
///
/// # Invariants
/// - `overrides` take precedence over process environment reads.
/// - Keys in `required` must resolve to a non-empty value.
/// - `max_key_bytes` and `max_value_bytes` are enforced as hard upper bounds.
#[derive(Debug, Clone)]
pub struct EnvResolver {
    /// Ordered set of keys that must resolve to a non-empty value.
    pub required: BTreeSet<String>,
    /// Optional override map used for deterministic lookups.
    pub overrides: Option<BTreeMap<String, String>>,
    /// Maximum bytes allowed for a single key.
    pub max_key_bytes: usize,
    /// Maximum bytes allowed for a single value.
    pub max_value_bytes: usize,
}

impl Default for EnvResolver {
    fn default() -> Self {
        Self {
            required: BTreeSet::new(),
            overrides: None,
            max_key_bytes: MAX_KEY_BYTES,
            max_value_bytes: MAX_VALUE_BYTES,
        }
    }
}

impl EnvResolver {
    /// Creates a resolver over the process environment with no required keys.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver over a deterministic override map.
    #[must_use]
    pub fn with_overrides(overrides: BTreeMap<String, String>) -> Self {
        Self {
            overrides: Some(overrides),
            ..Self::default()
        }
    }

    /// Resolves `key` against the source, falling back to `default`.
    ///
    /// A key that is neither set, defaulted, nor required resolves to the
    /// empty string. A present-but-empty value is returned as-is unless the
    /// key is required.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a size limit is violated or a required
    /// key stays unresolved.
    pub fn resolve(&self, key: &str, default: Option<&str>) -> Result<String, ConfigError> {
        if key.len() > self.max_key_bytes {
            return Err(ConfigError::Invalid("env key exceeds limit".to_string()));
        }
        let value = match self.lookup(key) {
            Some(value) if value.len() > self.max_value_bytes => {
                return Err(ConfigError::Invalid("env value exceeds limit".to_string()));
            }
            Some(value) if !value.is_empty() => value,
            Some(value) if !self.required.contains(key) => value,
            _ => default.map_or_else(String::new, str::to_string),
        };
        if value.is_empty() && self.required.contains(key) {
            return Err(ConfigError::Missing(key.to_string()));
        }
        Ok(value)
    }

    /// Reads `key` from the override map or the process environment.
    fn lookup(&self, key: &str) -> Option<String> {
        self.overrides
            .as_ref()
            .map_or_else(|| env::var(key).ok(), |overrides| overrides.get(key).cloned())
    }
}

// ============================================================================
// SECTION: Configuration Record
// ============================================================================

/// Resolved runtime configuration record.
///
/// # Invariants
/// - Constructed once at start-up and never mutated afterwards.
/// - Every field holds an environment-supplied value or a documented default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    /// Runtime mode for the deployment.
    pub mode: RuntimeMode,
    /// Public application URL advertised to clients.
    pub app_url: String,
    /// Public version string advertised to clients.
    pub version: String,
}

impl SiteConfig {
    /// Resolves the record from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when resolution or mode parsing fails.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_resolver(&EnvResolver::new())
    }

    /// Resolves the record through the provided resolver.
    ///
    /// Required keys outside the known set are enforced here so that an
    /// unresolved one aborts construction rather than first use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when resolution or mode parsing fails.
    pub fn from_resolver(resolver: &EnvResolver) -> Result<Self, ConfigError> {
        let raw_mode = resolver.resolve(RUNTIME_MODE_VAR, Some(DEFAULT_RUNTIME_MODE))?;
        let mode = RuntimeMode::from_str(&raw_mode)?;
        let app_url = resolver.resolve(APP_URL_VAR, Some(DEFAULT_APP_URL))?;
        let version = resolver.resolve(VERSION_VAR, Some(DEFAULT_VERSION))?;
        for key in &resolver.required {
            if !KNOWN_VARS.contains(&key.as_str()) {
                resolver.resolve(key, None)?;
            }
        }
        Ok(Self {
            mode,
            app_url,
            version,
        })
    }

    /// Returns whether the deployment runs in development mode.
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self.mode, RuntimeMode::Development)
    }

    /// Returns whether the deployment runs in production mode.
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self.mode, RuntimeMode::Production)
    }

    /// Returns whether the deployment runs under a test harness.
    #[must_use]
    pub const fn is_test(&self) -> bool {
        matches!(self.mode, RuntimeMode::Test)
    }

    /// Returns a JSON snapshot of the record for consumers outside the
    /// library boundary.
    #[must_use]
    pub fn as_json(&self) -> Value {
        json!({
            "mode": self.mode.as_str(),
            "app_url": self.app_url,
            "version": self.version,
        })
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while resolving runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required key resolved to no value.
    #[error("missing required configuration: {0}")]
    Missing(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}
