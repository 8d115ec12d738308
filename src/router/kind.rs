//! The fixed placeholder kind table.
//!
//! | Syntax    | Kind                | Pattern            |
//! |-----------|---------------------|--------------------|
//! | `[:i]`    | integer             | `[0-9]+`           |
//! | `[:s]`    | slug                | `[a-zA-Z0-9\-_]+`  |
//! | `[:all]`  | catch-all (greedy)  | `.*`               |

#![allow(clippy::expect_used)]

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// A named placeholder kind usable in a template as `[:name]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    /// `i`: one or more ASCII digits.
    Integer,
    /// `s`: one or more letters, digits, hyphens or underscores.
    Slug,
    /// `all`: any sequence, including the empty one.
    All,
}

static INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("integer kind pattern"));
static SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\-_]+$").expect("slug kind pattern"));
static ALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.*$").expect("catch-all kind pattern"));

impl PlaceholderKind {
    /// Every kind, in table order.
    pub const KINDS: [PlaceholderKind; 3] = [Self::Integer, Self::Slug, Self::All];

    /// Look up a kind by the name used between `[:` and `]`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "i" => Some(Self::Integer),
            "s" => Some(Self::Slug),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    /// Name used in templates.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "i",
            Self::Slug => "s",
            Self::All => "all",
        }
    }

    /// Unanchored regex fragment spliced into compiled templates.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Integer => "[0-9]+",
            Self::Slug => r"[a-zA-Z0-9\-_]+",
            Self::All => ".*",
        }
    }

    /// Whether `value` as a whole belongs to this kind.
    #[must_use]
    pub fn accepts(self, value: &str) -> bool {
        let re: &Regex = match self {
            Self::Integer => &*INTEGER,
            Self::Slug => &*SLUG,
            Self::All => &*ALL,
        };
        re.is_match(value)
    }
}

impl fmt::Display for PlaceholderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[:{}]", self.name())
    }
}
