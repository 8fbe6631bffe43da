// crates/sitekit-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for runtime configuration tests.
// Purpose: Reduce duplication across integration tests for sitekit-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use sitekit_config::EnvResolver;

/// Builds an override map from key/value pairs.
pub fn overrides(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(key, value)| ((*key).to_string(), (*value).to_string())).collect()
}

/// Returns a resolver over an empty deterministic environment.
pub fn empty_env_resolver() -> EnvResolver {
    EnvResolver::with_overrides(BTreeMap::new())
}

/// Returns a resolver over the provided deterministic environment.
pub fn resolver_with(pairs: &[(&str, &str)]) -> EnvResolver {
    EnvResolver::with_overrides(overrides(pairs))
}

/// Returns a resolver with the given required keys over the environment pairs.
pub fn resolver_with_required(pairs: &[(&str, &str)], required: &[&str]) -> EnvResolver {
    let required: BTreeSet<String> = required.iter().map(|key| (*key).to_string()).collect();
    EnvResolver {
        required,
        ..resolver_with(pairs)
    }
}

/// Returns a string of exactly `len` bytes for boundary tests.
pub fn oversized_string(len: usize) -> String {
    "x".repeat(len)
}
