//! # Route Manifest Module
//!
//! Declarative route lists loaded from YAML, JSON or TOML. Handlers in a
//! manifest are handler names, so a manifest builds a `Router<String>` the
//! host maps to real handlers (or that tooling such as the CLI inspects).
//!
//! ```yaml
//! routes:
//!   - name: user
//!     methods: GET
//!     path: /users/[:i]
//!     handler: show_user
//!   - name: items
//!     methods: GET|POST
//!     path: /items
//!     handler: items
//! ```
//!
//! The same list in TOML uses `[[routes]]` tables. Entries are registered in
//! file order, so file order decides which masked template wins when several
//! match.

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::router::Router;
use crate::runtime_config::RouterConfig;

/// One route declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    /// Unique route name, used for reverse generation.
    pub name: String,
    /// `|`-separated method list.
    #[serde(alias = "method")]
    pub methods: String,
    /// Route template.
    pub path: String,
    /// Handler name stored in the router.
    pub handler: String,
}

/// A parsed manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub routes: Vec<RouteSpec>,
}

/// On-disk manifest format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Json,
    Toml,
}

impl ManifestFormat {
    /// Pick the format from the file extension; anything unknown is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => ManifestFormat::Yaml,
            Some("toml") => ManifestFormat::Toml,
            _ => ManifestFormat::Json,
        }
    }
}

/// Parse manifest text in the given format.
///
/// Blank content is rejected rather than read as an empty route list, so a
/// file caught mid-write never replaces a live router with an empty one.
pub fn parse_manifest(content: &str, format: ManifestFormat) -> Result<Manifest> {
    if content.trim().is_empty() {
        bail!("manifest is empty");
    }
    let manifest = match format {
        ManifestFormat::Yaml => serde_yaml::from_str(content).context("invalid YAML manifest")?,
        ManifestFormat::Json => serde_json::from_str(content).context("invalid JSON manifest")?,
        ManifestFormat::Toml => toml::from_str(content).context("invalid TOML manifest")?,
    };
    Ok(manifest)
}

/// Read and parse a manifest file.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<Manifest> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest {}", path.display()))?;
    parse_manifest(&content, ManifestFormat::from_path(path))
        .with_context(|| format!("failed to parse manifest {}", path.display()))
}

/// Load a manifest file and build a router from it.
pub fn load_router(path: impl AsRef<Path>, config: &RouterConfig) -> Result<Router<String>> {
    let path = path.as_ref();
    let router = load_manifest(path)?.into_router_with(config)?;
    info!(
        manifest = %path.display(),
        routes_count = router.table().len(),
        "Route manifest loaded"
    );
    Ok(router)
}

impl Manifest {
    /// Register every entry in order. Stops at the first failing entry.
    pub fn into_router(self) -> Result<Router<String>> {
        let mut router = Router::new();
        for route in self.routes {
            router
                .register(&route.methods, &route.path, route.handler, &route.name)
                .with_context(|| format!("failed to register route {:?}", route.name))?;
        }
        Ok(router)
    }

    /// Like [`Manifest::into_router`], then compiles every masked template
    /// when `config.precompile` is set.
    pub fn into_router_with(self, config: &RouterConfig) -> Result<Router<String>> {
        let router = self.into_router()?;
        if config.precompile {
            if let Some(err) = router.precompile().into_iter().next() {
                return Err(anyhow!(err).context("manifest contains an invalid template"));
            }
        }
        Ok(router)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;

    const YAML: &str = r#"
routes:
  - name: user
    methods: GET
    path: /users/[:i]
    handler: show_user
  - name: items
    method: GET | POST
    path: /items
    handler: items
"#;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ManifestFormat::from_path(Path::new("r.yml")), ManifestFormat::Yaml);
        assert_eq!(ManifestFormat::from_path(Path::new("r.toml")), ManifestFormat::Toml);
        assert_eq!(ManifestFormat::from_path(Path::new("r")), ManifestFormat::Json);
    }

    #[test]
    fn test_yaml_manifest_builds_router() {
        let router = parse_manifest(YAML, ManifestFormat::Yaml)
            .unwrap()
            .into_router()
            .unwrap();

        let matched = router.resolve(&Method::POST, "/items").unwrap().unwrap();
        assert_eq!(matched.handler, "items");
        assert_eq!(router.generate("user", &["9"]).as_deref(), Some("/users/9"));
    }

    #[test]
    fn test_toml_manifest() {
        let toml = r#"
[[routes]]
name = "ping"
methods = "GET"
path = "/ping"
handler = "ping"
"#;
        let manifest = parse_manifest(toml, ManifestFormat::Toml).unwrap();
        assert_eq!(manifest.routes.len(), 1);
        assert_eq!(manifest.routes[0].path, "/ping");
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = parse_manifest("{}", ManifestFormat::Json).unwrap();
        assert!(manifest.into_router().unwrap().table().is_empty());
    }

    #[test]
    fn test_blank_manifest_is_rejected() {
        assert!(parse_manifest("  \n", ManifestFormat::Yaml).is_err());
    }

    #[test]
    fn test_duplicate_entry_names_the_route() {
        let yaml = r#"
routes:
  - { name: a, methods: GET, path: /a, handler: a }
  - { name: a, methods: GET, path: /b, handler: b }
"#;
        let err = parse_manifest(yaml, ManifestFormat::Yaml)
            .unwrap()
            .into_router()
            .unwrap_err();
        assert!(format!("{err:#}").contains("failed to register route \"a\""));
        assert!(format!("{err:#}").contains("duplicate route with name: a"));
    }

    #[test]
    fn test_precompile_rejects_unknown_kind() {
        let yaml = r#"
routes:
  - { name: a, methods: GET, path: "/a/[:uuid]", handler: a }
"#;
        let manifest = parse_manifest(yaml, ManifestFormat::Yaml).unwrap();
        let lazy = manifest.clone().into_router_with(&RouterConfig::default());
        assert!(lazy.is_ok());

        let eager = manifest.into_router_with(&RouterConfig {
            precompile: true,
            ..RouterConfig::default()
        });
        assert!(eager.is_err());
    }
}
