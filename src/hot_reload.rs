//! # Hot Reload Module
//!
//! Watches a route manifest and rebuilds the router when it changes.
//!
//! ## Reload Process
//!
//! When the manifest file is modified or recreated:
//!
//! 1. **Parse** - the manifest is loaded and every entry registered into a
//!    fresh router (precompiled too when [`RouterConfig::precompile`] is set)
//! 2. **Swap** - the new router replaces the old one in the [`SharedRouter`]
//! 3. **Hook** - the caller's callback sees the new router
//!
//! If the manifest fails to load or register, the error is logged and the
//! previous router stays active.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use maskrouter::hot_reload::watch_manifest;
//! use maskrouter::manifest::load_router;
//! use maskrouter::{RouterConfig, SharedRouter};
//! use std::sync::Arc;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = RouterConfig::from_env();
//! let shared = Arc::new(SharedRouter::new(load_router("routes.yaml", &config)?));
//!
//! let _watcher = watch_manifest("routes.yaml", Arc::clone(&shared), config, |router| {
//!     println!("reloaded {} routes", router.table().len());
//! })?;
//! # Ok(())
//! # }
//! ```

use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::manifest;
use crate::router::Router;
use crate::runtime_config::RouterConfig;
use crate::shared::SharedRouter;

/// Watch a manifest file and swap a rebuilt router into `shared` when it
/// changes.
///
/// The returned watcher stops watching when dropped.
pub fn watch_manifest<P, F>(
    manifest_path: P,
    shared: Arc<SharedRouter<String>>,
    config: RouterConfig,
    mut on_reload: F,
) -> notify::Result<RecommendedWatcher>
where
    P: AsRef<Path>,
    F: FnMut(&Router<String>) + Send + 'static,
{
    let path: PathBuf = manifest_path.as_ref().to_path_buf();
    let watch_path = path.clone();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    return;
                }
                match manifest::load_router(&watch_path, &config) {
                    Ok(router) => {
                        info!(
                            manifest = %watch_path.display(),
                            routes_count = router.table().len(),
                            "hot-reload: applying route updates"
                        );
                        shared.replace(router);
                        on_reload(&shared.load());
                    }
                    Err(err) => warn!(
                        manifest = %watch_path.display(),
                        error = %format!("{err:#}"),
                        "hot-reload: keeping previous routes"
                    ),
                }
            }
            Err(err) => error!(error = %err, "hot-reload: watch error"),
        },
        Config::default(),
    )?;

    watcher.watch(&path, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}
