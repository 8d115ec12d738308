//! # maskrouter
//!
//! A small HTTP request router with typed path placeholders and reverse
//! routing.
//!
//! ## Overview
//!
//! Routes are registered with a method list, a template, an opaque handler
//! and a unique name. Given a method and a path the router hands back the
//! handler and the parameters captured by the template; given a name and
//! parameter values it rebuilds the path. Running the handler and answering
//! the request stay with the host.
//!
//! ## Architecture
//!
//! - **[`router`]** - route table, two-phase matcher, pattern compiler and
//!   reverse generation
//! - **[`request`]** - explicit `(method, path)` input built by the host
//! - **[`manifest`]** - route lists loaded from YAML, JSON or TOML
//! - **[`shared`]** - lock-free publication of fully registered routers
//! - **[`hot_reload`]** - rebuild the router when a manifest changes
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`runtime_config`]** - environment-driven switches
//!
//! ## Example
//!
//! ```
//! use http::Method;
//! use maskrouter::Router;
//!
//! let mut router = Router::new();
//! router.register("GET", "/ping", "ping", "ping")?;
//! router.register("GET", "/users/[:i]", "show_user", "user")?;
//! router.register("GET|POST", "/items", "items", "items")?;
//! router.register("GET", "/files/[:all]", "files", "files")?;
//!
//! let matched = router.resolve(&Method::GET, "/files/a/b/c")?.expect("files route");
//! assert_eq!(*matched.handler, "files");
//! assert_eq!(matched.params(), ["a/b/c"]);
//!
//! assert_eq!(router.generate("user", &["42"]).as_deref(), Some("/users/42"));
//! assert!(router.resolve(&Method::GET, "/nope")?.is_none());
//! # Ok::<(), maskrouter::RouterError>(())
//! ```

pub mod cli;
pub mod error;
pub mod hot_reload;
pub mod logging;
pub mod manifest;
pub mod request;
pub mod router;
pub mod runtime_config;
pub mod shared;

pub use error::RouterError;
pub use request::RequestTarget;
pub use router::{PlaceholderKind, RouteMatch, Router};
pub use runtime_config::RouterConfig;
pub use shared::SharedRouter;
