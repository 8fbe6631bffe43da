// crates/sitekit-config/src/docs.rs
// ============================================================================
// Module: Environment Docs Generator
// Description: Markdown generator for the environment variable reference.
// Purpose: Keep the environment contract docs in sync with resolution.
// Dependencies: thiserror, std
// ============================================================================

//! ## Overview
//! Generates `Docs/configuration/environment.md` from the canonical key
//! table. The output is deterministic and used by the website.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::APP_URL_VAR;
use crate::config::DEFAULT_APP_URL;
use crate::config::DEFAULT_RUNTIME_MODE;
use crate::config::DEFAULT_VERSION;
use crate::config::RUNTIME_MODE_VAR;
use crate::config::VERSION_VAR;
use crate::examples::env_file_example;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default output path for generated environment docs.
const DOCS_PATH: &str = "Docs/configuration/environment.md";

/// Documented environment keys in render order.
const KEY_SPECS: [KeySpec; 3] = [
    KeySpec {
        key: RUNTIME_MODE_VAR,
        default: DEFAULT_RUNTIME_MODE,
        required: false,
        description: "Runtime mode: `development`, `production`, or `test`.",
    },
    KeySpec {
        key: APP_URL_VAR,
        default: DEFAULT_APP_URL,
        required: false,
        description: "Public application URL advertised to clients.",
    },
    KeySpec {
        key: VERSION_VAR,
        default: DEFAULT_VERSION,
        required: false,
        description: "Public version string advertised to clients.",
    },
];

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when generating or verifying environment docs.
#[derive(Debug, Error)]
pub enum DocsError {
    /// IO failure while writing docs.
    #[error("docs io error: {0}")]
    Io(String),
    /// Generated docs do not match the committed file.
    #[error("docs drift: {0}")]
    Drift(String),
}

// ============================================================================
// SECTION: Key Specs
// ============================================================================

/// Specification for one documented environment key.
struct KeySpec {
    /// Environment variable name.
    key: &'static str,
    /// Documented default value.
    default: &'static str,
    /// Whether the key must resolve to a non-empty value.
    required: bool,
    /// Reference table description.
    description: &'static str,
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Generates the environment reference markdown documentation.
#[must_use]
pub fn env_docs_markdown() -> String {
    let mut out = String::new();

    out.push_str("<!--\n");
    out.push_str("Docs/configuration/environment.md\n");
    out.push_str("============================================================================\n");
    out.push_str("Document: Sitekit Environment Configuration\n");
    out.push_str("Description: Reference for environment variables consumed at start-up.\n");
    out.push_str("Purpose: Document runtime mode, public URL, and version settings.\n");
    out.push_str("Generated: This file is auto-generated; do not edit manually.\n");
    out.push_str("============================================================================\n");
    out.push_str("-->\n\n");

    out.push_str("# Environment Configuration\n\n");
    out.push_str("## Overview\n\n");
    out.push_str("Runtime settings are resolved from the process environment once at\n");
    out.push_str("start-up. Every variable has a documented default; a required variable\n");
    out.push_str("left unresolved aborts start-up.\n\n");

    out.push_str("## Variables\n\n");
    out.push_str("| Variable | Default | Required | Notes |\n");
    out.push_str("| --- | --- | --- | --- |\n");
    for spec in &KEY_SPECS {
        let required = if spec.required { "yes" } else { "no" };
        let _ = writeln!(
            out,
            "| `{}` | `{}` | {required} | {} |",
            spec.key, spec.default, spec.description
        );
    }
    out.push('\n');

    out.push_str("## Runtime Modes\n\n");
    out.push_str("`NODE_ENV` accepts exactly `development`, `production`, or `test`. Any\n");
    out.push_str("other value fails resolution before the record is constructed.\n\n");

    out.push_str("## Example\n\n");
    out.push_str("```sh\n");
    out.push_str(&env_file_example());
    out.push_str("```\n");

    out
}

/// Writes the generated docs to the standard location.
///
/// # Errors
///
/// Returns [`DocsError`] when file output fails.
pub fn write_env_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let path = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    let content = env_docs_markdown();
    fs::write(path, content.as_bytes()).map_err(|err| DocsError::Io(err.to_string()))
}

/// Verifies the on-disk docs match the generated output.
///
/// # Errors
///
/// Returns [`DocsError`] when the docs drift.
pub fn verify_env_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let path = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    let content = env_docs_markdown();
    let existing = fs::read_to_string(path).map_err(|err| DocsError::Io(err.to_string()))?;
    if existing != content {
        return Err(DocsError::Drift(format!("docs mismatch: {}", path.display())));
    }
    Ok(())
}
