//! # Runtime Configuration Module
//!
//! Environment variable based switches for how routers are built and used.
//!
//! ## Environment Variables
//!
//! ### `MASKR_STRICT_GENERATE`
//!
//! When true, the CLI `generate` command validates parameters against their
//! placeholder kinds (see [`Router::generate_strict`]). Library callers choose
//! per call.
//!
//! Default: `false`
//!
//! ### `MASKR_PRECOMPILE`
//!
//! When true, routers built from a manifest compile every masked template
//! right after loading and fail on the first broken one, instead of reporting
//! unknown placeholder kinds on first lookup.
//!
//! Default: `false`
//!
//! Boolean values accept `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off`.
//! Anything else falls back to the default.
//!
//! [`Router::generate_strict`]: crate::router::Router::generate_strict

use std::env;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouterConfig {
    /// Validate params when generating paths from the CLI.
    pub strict_generation: bool,
    /// Compile masked templates eagerly when loading a manifest.
    pub precompile: bool,
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_flag(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|val| parse_flag(&val))
        .unwrap_or(default)
}

impl RouterConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        RouterConfig {
            strict_generation: env_flag("MASKR_STRICT_GENERATE", false),
            precompile: env_flag("MASKR_PRECOMPILE", false),
        }
    }
}
