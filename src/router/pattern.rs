//! Template parsing and compilation.
//!
//! A template such as `/users/[:i]/posts/[:s]` is split into literal text and
//! placeholder markers. Compilation escapes the literal text, replaces every
//! marker with a capture group holding its kind's pattern and anchors the
//! result at both ends:
//!
//! ```text
//! /users/[:i]/posts/[:s]  →  ^/users/([0-9]+)/posts/([a-zA-Z0-9\-_]+)$
//! ```

#![allow(clippy::expect_used)]

use once_cell::sync::Lazy;
use regex::Regex;

use super::kind::PlaceholderKind;
use crate::error::{Result, RouterError};

/// Matches one placeholder marker and captures the kind name.
pub(crate) static MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[:([^\[\]]*)\]").expect("placeholder marker pattern"));

/// A piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'t> {
    Literal(&'t str),
    /// Raw kind name, not yet checked against the kind table.
    Placeholder(&'t str),
}

/// Whether the template contains at least one placeholder marker.
#[inline]
pub(crate) fn is_masked(template: &str) -> bool {
    MARKER.is_match(template)
}

/// Number of placeholder markers in the template.
pub(crate) fn placeholder_count(template: &str) -> usize {
    MARKER.find_iter(template).count()
}

/// Split a template into literal and placeholder segments, left to right.
pub(crate) fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;
    for caps in MARKER.captures_iter(template) {
        let (Some(whole), Some(kind)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            out.push(Segment::Literal(&template[last..whole.start()]));
        }
        out.push(Segment::Placeholder(kind.as_str()));
        last = whole.end();
    }
    if last < template.len() {
        out.push(Segment::Literal(&template[last..]));
    }
    out
}

/// Resolve a raw kind name against the kind table.
pub(crate) fn kind_of(template: &str, name: &str) -> Result<PlaceholderKind> {
    PlaceholderKind::from_name(name).ok_or_else(|| RouterError::UnknownPlaceholderKind {
        template: template.to_owned(),
        kind: name.to_owned(),
    })
}

/// Compile a masked template into an anchored regex.
///
/// Fails with [`RouterError::UnknownPlaceholderKind`] when a marker names a
/// kind outside the kind table.
pub(crate) fn compile(template: &str) -> Result<Regex> {
    let mut pattern = String::with_capacity(template.len() + 16);
    pattern.push('^');
    for segment in segments(template) {
        match segment {
            Segment::Literal(text) => pattern.push_str(&regex::escape(text)),
            Segment::Placeholder(name) => {
                let kind = kind_of(template, name)?;
                pattern.push('(');
                pattern.push_str(kind.pattern());
                pattern.push(')');
            }
        }
    }
    pattern.push('$');

    Regex::new(&pattern).map_err(|source| RouterError::InvalidPattern {
        template: template.to_owned(),
        source,
    })
}
