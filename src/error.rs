//! Error types for registration, pattern compilation and strict generation.
//!
//! Lookup and generation misses are not errors: [`Router::resolve`] returns
//! `Ok(None)` and [`Router::generate`] returns `None`. Everything in
//! [`RouterError`] is a configuration problem the caller has to fix.
//!
//! [`Router::resolve`]: crate::router::Router::resolve
//! [`Router::generate`]: crate::router::Router::generate

use http::Method;

/// Errors raised by the router.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// A route with this name is already registered. Names are unique across
    /// all methods.
    #[error("duplicate route with name: {name}")]
    DuplicateName {
        /// The name that was reused.
        name: String,
    },

    /// The template is already registered for this method.
    #[error("duplicate route with url: {template} ({method})")]
    DuplicateRoute {
        /// Method on which the conflict was detected.
        method: Method,
        /// The conflicting template.
        template: String,
    },

    /// A token of a method list is not a verb the router accepts.
    #[error("unsupported method token {token:?}")]
    UnsupportedMethod {
        /// The offending token, already trimmed.
        token: String,
    },

    /// A template references a placeholder kind outside the kind table.
    ///
    /// Raised lazily, the first time a lookup (or [`Router::precompile`])
    /// needs the compiled pattern.
    ///
    /// [`Router::precompile`]: crate::router::Router::precompile
    #[error("unknown placeholder kind `{kind}` in template {template}")]
    UnknownPlaceholderKind {
        /// Template containing the placeholder.
        template: String,
        /// The kind name found between `[:` and `]`.
        kind: String,
    },

    /// The assembled pattern was rejected by the regex engine.
    #[error("invalid pattern for template {template}: {source}")]
    InvalidPattern {
        /// Template the pattern was built from.
        template: String,
        /// Underlying regex error.
        source: regex::Error,
    },

    /// A request URI could not be parsed.
    #[error("invalid request uri {uri:?}: {source}")]
    InvalidUri {
        /// The raw URI.
        uri: String,
        /// Underlying parse error.
        source: http::uri::InvalidUri,
    },

    /// Strict generation: a parameter does not fit its placeholder kind.
    #[error("parameter {index} ({value:?}) of route {name} does not match placeholder [:{kind}]")]
    InvalidParam {
        /// Route name.
        name: String,
        /// Zero-based position of the parameter.
        index: usize,
        /// Kind name of the placeholder at that position.
        kind: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Strict generation: the number of parameters differs from the number of
    /// placeholders.
    #[error("route {name} expects {expected} parameters, got {actual}")]
    ParamCountMismatch {
        /// Route name.
        name: String,
        /// Placeholders in the template.
        expected: usize,
        /// Parameters supplied.
        actual: usize,
    },
}

/// Convenience alias used across the crate.
pub type Result<T, E = RouterError> = std::result::Result<T, E>;
