//! Reverse routing: build a concrete path from a route name.

use super::core::Router;
use super::pattern::{self, Segment, MARKER};
use crate::error::{Result, RouterError};

/// Replace placeholder markers left to right with `params`, one per marker.
///
/// Stops when `params` runs out, leaving the remaining markers verbatim.
/// Extra params are ignored. The template is scanned once, so a param that
/// itself looks like a marker is never substituted again.
pub(crate) fn substitute(template: &str, params: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + params.iter().map(|p| p.len()).sum::<usize>());
    let mut params = params.iter();
    let mut last = 0;
    for marker in MARKER.find_iter(template) {
        let Some(param) = params.next() else {
            break;
        };
        out.push_str(&template[last..marker.start()]);
        out.push_str(param);
        last = marker.end();
    }
    out.push_str(&template[last..]);
    out
}

impl<H> Router<H> {
    /// Build the path of the route registered as `name`.
    ///
    /// Parameters are not checked against their placeholder kinds; a path
    /// built from ill-shaped params may not resolve back to the same route.
    /// Use [`Router::generate_strict`] for a checked variant.
    ///
    /// # Returns
    ///
    /// * `Some(path)` - literal templates come back unchanged; masked ones have
    ///   their markers replaced left to right, leftover markers kept as-is
    /// * `None` - no route has this name
    ///
    /// # Example
    ///
    /// ```
    /// use maskrouter::Router;
    ///
    /// let mut router = Router::new();
    /// router.register("GET", "/users/[:i]/posts/[:s]", (), "post")?;
    ///
    /// assert_eq!(router.generate("post", &["7", "hello"]).as_deref(), Some("/users/7/posts/hello"));
    /// assert_eq!(router.generate("post", &["7"]).as_deref(), Some("/users/7/posts/[:s]"));
    /// assert_eq!(router.generate("missing", &[]), None);
    /// # Ok::<(), maskrouter::RouterError>(())
    /// ```
    #[must_use]
    pub fn generate(&self, name: &str, params: &[&str]) -> Option<String> {
        let template = self.table.template_for(name)?;
        if !pattern::is_masked(template) {
            return Some(template.to_owned());
        }
        Some(substitute(template, params))
    }

    /// Like [`Router::generate`], but every param must match its placeholder
    /// kind and the param count must equal the placeholder count.
    ///
    /// # Errors
    ///
    /// * [`RouterError::ParamCountMismatch`] - too few or too many params
    /// * [`RouterError::InvalidParam`] - a param is outside its kind
    /// * [`RouterError::UnknownPlaceholderKind`] - the template names an
    ///   unknown kind
    pub fn generate_strict(&self, name: &str, params: &[&str]) -> Result<Option<String>> {
        let Some(template) = self.table.template_for(name) else {
            return Ok(None);
        };

        let expected = pattern::placeholder_count(template);
        if expected != params.len() {
            return Err(RouterError::ParamCountMismatch {
                name: name.to_owned(),
                expected,
                actual: params.len(),
            });
        }

        let kinds = pattern::segments(template)
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(kind) => Some(kind),
                Segment::Literal(_) => None,
            });
        for (index, (kind, value)) in kinds.zip(params).enumerate() {
            let kind = pattern::kind_of(template, kind)?;
            if !kind.accepts(value) {
                return Err(RouterError::InvalidParam {
                    name: name.to_owned(),
                    index,
                    kind: kind.name(),
                    value: (*value).to_owned(),
                });
            }
        }

        Ok(Some(substitute(template, params)))
    }
}
