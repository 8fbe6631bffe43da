// crates/sitekit-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example environment payload.
// Purpose: Deterministic example for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example for the Sitekit environment contract. The output is
//! deterministic and kept in sync with the docs generator.

/// Returns a canonical example `.env` payload.
#[must_use]
pub fn env_file_example() -> String {
    String::from(
        r"# Runtime mode: development, production, or test.
NODE_ENV=development

# Public application URL advertised to clients.
NEXT_PUBLIC_APP_URL=http://localhost:3000

# Public version string advertised to clients.
NEXT_PUBLIC_VERSION=1.0.0
",
    )
}
