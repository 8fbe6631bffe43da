// crates/sitekit-config/src/lib.rs
// ============================================================================
// Module: Sitekit Config Library
// Description: Canonical runtime configuration model and resolution.
// Purpose: Single source of truth for the deployment environment contract.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! `sitekit-config` resolves the site's runtime settings from the process
//! environment: documented defaults, an optional required-keys set, and
//! fail-closed handling of anything outside the contract. The resolved
//! record is constructed once at start-up and passed to consumers by
//! reference; there is no ambient global state.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod docs;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use docs::env_docs_markdown;
pub use docs::verify_env_docs;
pub use docs::write_env_docs;
pub use examples::env_file_example;
