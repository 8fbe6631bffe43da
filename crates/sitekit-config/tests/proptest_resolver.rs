// crates/sitekit-config/tests/proptest_resolver.rs
// ============================================================================
// Module: Resolver Property-Based Tests
// Description: Property tests for resolution correctness and stability.
// Purpose: Detect panics and invariants across wide input ranges.
// ============================================================================

//! Property-based tests for resolver invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::collections::BTreeMap;

use proptest::prelude::*;
use sitekit_config::EnvResolver;

/// Strategy for environment keys within the default size limit.
fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{0,40}"
}

/// Strategy for environment values within the default size limit.
fn value_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,200}"
}

proptest! {
    /// An override always wins over any provided default.
    #[test]
    fn override_wins_over_default(key in key_strategy(), value in value_strategy(), default in value_strategy()) {
        let mut overrides = BTreeMap::new();
        overrides.insert(key.clone(), value.clone());
        let resolver = EnvResolver::with_overrides(overrides);
        let resolved = resolver.resolve(&key, Some(&default)).unwrap();
        prop_assert_eq!(resolved, value);
    }

    /// A missing key resolves to the provided default.
    #[test]
    fn missing_key_resolves_to_default(key in key_strategy(), default in value_strategy()) {
        let resolver = EnvResolver::with_overrides(BTreeMap::new());
        let resolved = resolver.resolve(&key, Some(&default)).unwrap();
        prop_assert_eq!(resolved, default);
    }

    /// A missing key without a default resolves to the empty string.
    #[test]
    fn missing_key_without_default_resolves_empty(key in key_strategy()) {
        let resolver = EnvResolver::with_overrides(BTreeMap::new());
        let resolved = resolver.resolve(&key, None).unwrap();
        prop_assert_eq!(resolved, "");
    }

    /// Sequential resolutions over an unchanged source are identical.
    #[test]
    fn resolution_is_idempotent(key in key_strategy(), value in value_strategy()) {
        let mut overrides = BTreeMap::new();
        overrides.insert(key.clone(), value);
        let resolver = EnvResolver::with_overrides(overrides);
        let first = resolver.resolve(&key, None).unwrap();
        let second = resolver.resolve(&key, None).unwrap();
        prop_assert_eq!(first, second);
    }
}
