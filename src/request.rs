//! Explicit request input for the router.
//!
//! The host's transport layer hands over the method and the request URI; the
//! router never reads them from ambient state. Only the path of the URI is
//! kept: scheme, authority and query string play no part in matching.

use http::{Method, Uri};

use crate::error::{Result, RouterError};

/// The `(method, path)` pair a lookup is driven by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    method: Method,
    path: String,
}

impl RequestTarget {
    /// Build a target from an already extracted path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    /// Build a target from a raw method token and request URI.
    ///
    /// Accepts origin-form (`/a/b?x=1`) and absolute-form
    /// (`http://host/a/b?x=1`) URIs; only the path is kept.
    ///
    /// # Errors
    ///
    /// * [`RouterError::UnsupportedMethod`] - `method` is not a valid token
    /// * [`RouterError::InvalidUri`] - `uri` does not parse
    ///
    /// # Example
    ///
    /// ```
    /// use maskrouter::RequestTarget;
    ///
    /// let target = RequestTarget::from_uri("GET", "/users/42?tab=posts")?;
    /// assert_eq!(target.path(), "/users/42");
    /// # Ok::<(), maskrouter::RouterError>(())
    /// ```
    pub fn from_uri(method: &str, uri: &str) -> Result<Self> {
        let method = Method::from_bytes(method.trim().as_bytes()).map_err(|_| {
            RouterError::UnsupportedMethod {
                token: method.trim().to_owned(),
            }
        })?;
        let parsed: Uri = uri.parse().map_err(|source| RouterError::InvalidUri {
            uri: uri.to_owned(),
            source,
        })?;
        Ok(Self::new(method, parsed.path()))
    }

    /// Request method.
    #[inline]
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Request path, without query string.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path split on `/`. A rooted path yields an empty first segment.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/')
    }
}
