//! Route table: registration, duplicate detection and read accessors.

use http::Method;
use once_cell::sync::OnceCell;
use regex::Regex;
use smallvec::SmallVec;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::pattern;
use crate::error::{Result, RouterError};

/// Verbs accepted in a method list, in the order routes are listed.
pub static SUPPORTED_METHODS: [Method; 8] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::PATCH,
    Method::OPTIONS,
    Method::HEAD,
    Method::TRACE,
];

/// Separator between verbs in a method list (`"GET|POST"`).
pub const METHOD_SEPARATOR: char = '|';

/// One registered (method, template, handler) triple.
#[derive(Debug)]
pub(crate) struct RouteEntry<H> {
    pub(crate) template: String,
    pub(crate) name: String,
    pub(crate) handler: H,
    pub(crate) masked: bool,
    /// Filled on the first masked-phase lookup that reaches this entry.
    pattern: OnceCell<Regex>,
}

impl<H> RouteEntry<H> {
    fn new(template: &str, name: &str, handler: H) -> Self {
        Self {
            template: template.to_owned(),
            name: name.to_owned(),
            handler,
            masked: pattern::is_masked(template),
            pattern: OnceCell::new(),
        }
    }

    /// Compiled pattern, compiling it on first use.
    ///
    /// Compile errors are not cached: every call reaching a broken template
    /// reports the error again.
    pub(crate) fn pattern(&self) -> Result<&Regex> {
        self.pattern.get_or_try_init(|| {
            let compiled = pattern::compile(&self.template)?;
            debug!(
                template = %self.template,
                regex = %compiled.as_str(),
                "Compiled masked template"
            );
            Ok(compiled)
        })
    }
}

/// Routes bound to a single method.
#[derive(Debug)]
pub(crate) struct MethodRoutes<H> {
    /// Registration order.
    entries: Vec<RouteEntry<H>>,
    /// Template → position in `entries`, for every template of this method.
    by_template: HashMap<String, usize>,
}

impl<H> Default for MethodRoutes<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            by_template: HashMap::new(),
        }
    }
}

impl<H> MethodRoutes<H> {
    fn contains(&self, template: &str) -> bool {
        self.by_template.contains_key(template)
    }

    fn push(&mut self, entry: RouteEntry<H>) {
        self.by_template
            .insert(entry.template.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// Literal template equal to `path`, if any. Masked templates are never
    /// returned here even when `path` spells one out verbatim.
    #[inline]
    pub(crate) fn exact(&self, path: &str) -> Option<&RouteEntry<H>> {
        self.by_template
            .get(path)
            .and_then(|&idx| self.entries.get(idx))
            .filter(|entry| !entry.masked)
    }

    /// Templates with at least one placeholder, in registration order.
    pub(crate) fn masked(&self) -> impl Iterator<Item = &RouteEntry<H>> {
        self.entries.iter().filter(|entry| entry.masked)
    }

    pub(crate) fn entries(&self) -> &[RouteEntry<H>] {
        &self.entries
    }
}

/// A read-only view of one registered route.
#[derive(Debug, Clone, Copy)]
pub struct RouteInfo<'r, H> {
    /// Method the route is bound to.
    pub method: &'r Method,
    /// The registered template.
    pub template: &'r str,
    /// Route name (shared by every method of one registration).
    pub name: &'r str,
    /// The stored handler.
    pub handler: &'r H,
}

/// Method → template → handler mappings plus the name → template index.
#[derive(Debug)]
pub struct RouteTable<H> {
    methods: HashMap<Method, MethodRoutes<H>>,
    names: HashMap<String, String>,
}

impl<H> Default for RouteTable<H> {
    fn default() -> Self {
        Self {
            methods: HashMap::new(),
            names: HashMap::new(),
        }
    }
}

/// Split a `|`-separated method list, trimming each token.
///
/// Fails on the first token that is empty or not in [`SUPPORTED_METHODS`].
pub fn parse_methods(list: &str) -> Result<SmallVec<[Method; 4]>> {
    list.split(METHOD_SEPARATOR)
        .map(str::trim)
        .map(|token| {
            Method::from_bytes(token.as_bytes())
                .ok()
                .filter(|m| SUPPORTED_METHODS.contains(m))
                .ok_or_else(|| RouterError::UnsupportedMethod {
                    token: token.to_owned(),
                })
        })
        .collect()
}

impl<H> RouteTable<H> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `template` for every method of `methods`.
    ///
    /// # Errors
    ///
    /// * [`RouterError::UnsupportedMethod`] - a token of `methods` is not a
    ///   supported verb; nothing is added.
    /// * [`RouterError::DuplicateName`] - `name` is taken; nothing is added.
    /// * [`RouterError::DuplicateRoute`] - `template` already exists for one
    ///   of the methods. Methods listed before the conflicting one stay
    ///   registered, together with the name.
    pub fn register(&mut self, methods: &str, template: &str, handler: H, name: &str) -> Result<()>
    where
        H: Clone,
    {
        let methods = parse_methods(methods)?;

        if self.names.contains_key(name) {
            warn!(name = %name, template = %template, "Rejected duplicate route name");
            return Err(RouterError::DuplicateName {
                name: name.to_owned(),
            });
        }

        for method in methods {
            let routes = self.methods.entry(method.clone()).or_default();
            if routes.contains(template) {
                warn!(
                    method = %method,
                    template = %template,
                    name = %name,
                    "Rejected duplicate route"
                );
                return Err(RouterError::DuplicateRoute {
                    method,
                    template: template.to_owned(),
                });
            }
            routes.push(RouteEntry::new(template, name, handler.clone()));
            self.names
                .entry(name.to_owned())
                .or_insert_with(|| template.to_owned());
            debug!(method = %method, template = %template, name = %name, "Route registered");
        }

        Ok(())
    }

    /// Templates and handlers bound to `method`, in registration order.
    pub fn routes_for<'r>(&'r self, method: &Method) -> impl Iterator<Item = (&'r str, &'r H)> + 'r {
        self.methods
            .get(method)
            .into_iter()
            .flat_map(|routes| routes.entries.iter())
            .map(|entry| (entry.template.as_str(), &entry.handler))
    }

    /// Template registered under `name`.
    #[must_use]
    pub fn template_for(&self, name: &str) -> Option<&str> {
        self.names.get(name).map(String::as_str)
    }

    /// Every registered route name, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    /// Every route, grouped by method in [`SUPPORTED_METHODS`] order, then in
    /// registration order.
    pub fn iter(&self) -> impl Iterator<Item = RouteInfo<'_, H>> {
        SUPPORTED_METHODS.iter().flat_map(move |method| {
            self.methods
                .get_key_value(method)
                .into_iter()
                .flat_map(|(method, routes)| {
                    routes.entries.iter().map(move |entry| RouteInfo {
                        method,
                        template: &entry.template,
                        name: &entry.name,
                        handler: &entry.handler,
                    })
                })
        })
    }

    /// Number of (method, template) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.values().map(|routes| routes.entries.len()).sum()
    }

    /// Whether nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn method_routes(&self, method: &Method) -> Option<&MethodRoutes<H>> {
        self.methods.get(method)
    }
}
