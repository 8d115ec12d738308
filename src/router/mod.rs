//! # Router Module
//!
//! Path matching, route resolution and reverse generation.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Holding method → template → handler mappings and the name → template index
//! - Rejecting duplicate names and duplicate (method, template) pairs
//! - Matching an incoming method + path to a handler and its path parameters
//! - Rebuilding a concrete path from a route name and parameter values
//!
//! ## Templates
//!
//! A template is a literal path (`/ping`) or a masked path containing typed
//! placeholders (`/users/[:i]`). The kinds are:
//!
//! ```text
//!  Syntax   Matches
//!  [:i]     one or more digits
//!  [:s]     one or more letters, digits, '-' or '_'
//!  [:all]   anything, including '/' and the empty string
//! ```
//!
//! ## Architecture
//!
//! Lookup runs in two phases:
//!
//! 1. **Exact**: the path is looked up verbatim among the literal templates of
//!    the method. This is a hash lookup and always wins over pattern matches.
//! 2. **Masked**: the masked templates of the method are tried in
//!    registration order. Each is compiled to an anchored regex on first use
//!    and cached. The first one that matches wins.
//!
//! ```text
//!  /files/[:all]         →  ^/files/(.*)$
//!  /users/[:i]/[:s]      →  ^/users/([0-9]+)/([a-zA-Z0-9\-_]+)$
//! ```
//!
//! Placeholder kinds are checked when a template is compiled, not when it is
//! registered.

mod core;
mod generate;
mod kind;
mod pattern;
mod table;

pub use core::{ParamVec, RouteMatch, Router, MAX_INLINE_PARAMS};
pub use kind::PlaceholderKind;
pub use table::{parse_methods, RouteInfo, RouteTable, METHOD_SEPARATOR, SUPPORTED_METHODS};
