//! `maskrouter` command line: inspect and exercise a route manifest.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::manifest;
use crate::request::RequestTarget;
use crate::runtime_config::RouterConfig;

#[derive(Debug, Parser)]
#[command(name = "maskrouter")]
#[command(about = "Inspect, resolve and generate routes from a route manifest", long_about = None)]
pub struct Cli {
    /// Route manifest (YAML, JSON or TOML)
    #[arg(short, long, env = "MASKR_MANIFEST")]
    pub manifest: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every registered route
    Routes,
    /// Resolve a request against the manifest
    Resolve {
        /// Request method, e.g. GET
        method: String,
        /// Request URI; the query string is ignored
        uri: String,
    },
    /// Build the path of a named route
    Generate {
        /// Route name
        name: String,
        /// Placeholder values, left to right
        params: Vec<String>,
        /// Reject params that do not fit their placeholder kinds
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Compile every template and report invalid ones
    Check,
}

/// Run a parsed command, writing its output to `out`.
///
/// Returns `Ok(false)` for a negative answer (no match, unknown name, broken
/// templates) so the binary can exit non-zero.
pub fn execute(cli: &Cli, config: &RouterConfig, out: &mut impl Write) -> Result<bool> {
    // `check` reports compile errors itself, so never precompile while loading.
    let load_config = RouterConfig {
        precompile: config.precompile && !matches!(cli.command, Commands::Check),
        ..*config
    };
    let router = manifest::load_router(&cli.manifest, &load_config)?;

    match &cli.command {
        Commands::Routes => {
            for route in router.routes() {
                writeln!(
                    out,
                    "{:<7} {:<40} {:<24} {}",
                    route.method.as_str(),
                    route.template,
                    route.name,
                    route.handler
                )?;
            }
            Ok(true)
        }
        Commands::Resolve { method, uri } => {
            let target = RequestTarget::from_uri(method, uri)?;
            match router.route(&target)? {
                Some(matched) => {
                    writeln!(out, "handler: {}", matched.handler)?;
                    writeln!(out, "route:   {} ({})", matched.name, matched.template)?;
                    writeln!(out, "params:  {:?}", matched.params())?;
                    Ok(true)
                }
                None => {
                    writeln!(out, "no match for {} {}", target.method(), target.path())?;
                    Ok(false)
                }
            }
        }
        Commands::Generate {
            name,
            params,
            strict,
        } => {
            let params: Vec<&str> = params.iter().map(String::as_str).collect();
            let path = if *strict || config.strict_generation {
                router
                    .generate_strict(name, &params)
                    .with_context(|| format!("cannot generate route {name:?}"))?
            } else {
                router.generate(name, &params)
            };
            match path {
                Some(path) => {
                    writeln!(out, "{path}")?;
                    Ok(true)
                }
                None => {
                    writeln!(out, "no route named {name:?}")?;
                    Ok(false)
                }
            }
        }
        Commands::Check => {
            let errors = router.precompile();
            for err in &errors {
                writeln!(out, "error: {err}")?;
            }
            writeln!(
                out,
                "{} routes, {} invalid templates",
                router.table().len(),
                errors.len()
            )?;
            Ok(errors.is_empty())
        }
    }
}
