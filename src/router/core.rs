//! Router core - the two-phase lookup.
//!
//! Lookup runs an O(1) exact phase over literal templates, then walks the
//! masked templates of the method in registration order. The first masked
//! template whose compiled pattern matches wins; there is no specificity
//! ranking.

use http::Method;
use smallvec::SmallVec;
use std::time::Instant;
use tracing::debug;

use super::table::{RouteEntry, RouteInfo, RouteTable, SUPPORTED_METHODS};
use crate::error::{Result, RouterError};
use crate::request::RequestTarget;

/// Maximum number of extracted parameters stored inline before spilling to
/// the heap.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Extracted parameter values, in left-to-right placeholder order.
pub type ParamVec = SmallVec<[String; MAX_INLINE_PARAMS]>;

/// Result of successfully resolving a request against the table.
#[derive(Debug)]
pub struct RouteMatch<'r, H> {
    /// The stored handler.
    pub handler: &'r H,
    /// Values captured by the placeholders. Empty for an exact match.
    pub params: ParamVec,
    /// Template that matched.
    pub template: &'r str,
    /// Name of the matched route.
    pub name: &'r str,
}

impl<'r, H> RouteMatch<'r, H> {
    fn from_entry(entry: &'r RouteEntry<H>, params: ParamVec) -> Self {
        Self {
            handler: &entry.handler,
            params,
            template: &entry.template,
            name: &entry.name,
        }
    }

    /// Parameter at `index` (zero-based, left to right).
    #[inline]
    #[must_use]
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    /// Parameters as a plain slice.
    #[inline]
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }
}

/// Request router: the route table plus lookup and reverse generation.
///
/// Register every route first, then share the router immutably; `resolve`
/// and `generate` only need `&self` and the compiled-pattern cache is
/// thread-safe.
#[derive(Debug)]
pub struct Router<H> {
    pub(crate) table: RouteTable<H>,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self {
            table: RouteTable::new(),
        }
    }
}

impl<H> Router<H> {
    /// Create an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route.
    ///
    /// `methods` is a `|`-separated list such as `"GET | POST"`. See
    /// [`RouteTable::register`] for the failure modes.
    ///
    /// # Example
    ///
    /// ```
    /// use maskrouter::Router;
    ///
    /// let mut router = Router::new();
    /// router.register("GET|POST", "/items", "items_handler", "items")?;
    /// # Ok::<(), maskrouter::RouterError>(())
    /// ```
    pub fn register(&mut self, methods: &str, template: &str, handler: H, name: &str) -> Result<()>
    where
        H: Clone,
    {
        self.table.register(methods, template, handler, name)
    }

    /// Underlying route table.
    #[inline]
    #[must_use]
    pub fn table(&self) -> &RouteTable<H> {
        &self.table
    }

    /// Every registered route, grouped by method.
    pub fn routes(&self) -> impl Iterator<Item = RouteInfo<'_, H>> {
        self.table.iter()
    }

    /// Resolve `method` + `path` to a handler and its extracted parameters.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(RouteMatch))` - a literal template equals `path`, or a masked
    ///   template matches it
    /// * `Ok(None)` - nothing matches; what to answer is up to the host
    ///
    /// # Errors
    ///
    /// [`RouterError::UnknownPlaceholderKind`] when the masked phase reaches a
    /// template naming a kind outside the kind table, before any later
    /// template is tried.
    ///
    /// # Example
    ///
    /// ```
    /// use http::Method;
    /// use maskrouter::Router;
    ///
    /// let mut router = Router::new();
    /// router.register("GET", "/users/[:i]", "show_user", "user")?;
    ///
    /// let matched = router.resolve(&Method::GET, "/users/42")?.expect("route");
    /// assert_eq!(*matched.handler, "show_user");
    /// assert_eq!(matched.params(), ["42"]);
    /// assert!(router.resolve(&Method::GET, "/users/abc")?.is_none());
    /// # Ok::<(), maskrouter::RouterError>(())
    /// ```
    pub fn resolve(&self, method: &Method, path: &str) -> Result<Option<RouteMatch<'_, H>>> {
        debug!(method = %method, path = %path, "Route match attempt");
        let match_start = Instant::now();

        let Some(routes) = self.table.method_routes(method) else {
            debug!(method = %method, path = %path, "No routes registered for method");
            return Ok(None);
        };

        if let Some(entry) = routes.exact(path) {
            debug!(
                method = %method,
                path = %path,
                template = %entry.template,
                name = %entry.name,
                phase = "exact",
                duration_us = match_start.elapsed().as_micros(),
                "Route matched"
            );
            return Ok(Some(RouteMatch::from_entry(entry, ParamVec::new())));
        }

        for entry in routes.masked() {
            let pattern = entry.pattern()?;
            let Some(captures) = pattern.captures(path) else {
                continue;
            };
            let params: ParamVec = captures
                .iter()
                .skip(1)
                .map(|group| group.map_or_else(String::new, |m| m.as_str().to_owned()))
                .collect();

            debug!(
                method = %method,
                path = %path,
                template = %entry.template,
                name = %entry.name,
                path_params = ?params,
                phase = "masked",
                duration_us = match_start.elapsed().as_micros(),
                "Route matched"
            );
            return Ok(Some(RouteMatch::from_entry(entry, params)));
        }

        debug!(
            method = %method,
            path = %path,
            duration_us = match_start.elapsed().as_micros(),
            "No route matched"
        );
        Ok(None)
    }

    /// Resolve an explicit request target supplied by the host.
    #[inline]
    pub fn route(&self, target: &RequestTarget) -> Result<Option<RouteMatch<'_, H>>> {
        self.resolve(target.method(), target.path())
    }

    /// Compile every masked template now instead of on first use.
    ///
    /// Returns one error per (method, template) entry that fails to compile,
    /// in listing order. Lookups behave the same whether or not this ran.
    #[must_use]
    pub fn precompile(&self) -> Vec<RouterError> {
        let mut errors = Vec::new();
        for method in SUPPORTED_METHODS.iter() {
            let Some(routes) = self.table.method_routes(method) else {
                continue;
            };
            for entry in routes.entries().iter().filter(|entry| entry.masked) {
                if let Err(err) = entry.pattern() {
                    errors.push(err);
                }
            }
        }
        errors
    }
}
