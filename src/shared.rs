//! Publishing fully registered routers to concurrent readers.
//!
//! A [`Router`] is mutated only while it is being built. Once registered it
//! is wrapped here and handed out as `Arc<Router<H>>`; replacing it swaps in
//! a complete new table without blocking readers, and lookups already in
//! flight finish against the table they started with.

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::router::Router;

/// Atomically swappable, read-mostly router.
#[derive(Debug)]
pub struct SharedRouter<H> {
    current: ArcSwap<Router<H>>,
}

impl<H> SharedRouter<H> {
    /// Publish an already registered router.
    pub fn new(router: Router<H>) -> Self {
        Self {
            current: ArcSwap::from_pointee(router),
        }
    }

    /// Current router.
    #[must_use]
    pub fn load(&self) -> Arc<Router<H>> {
        self.current.load_full()
    }

    /// Swap in `router` and return the one it replaces.
    pub fn replace(&self, router: Router<H>) -> Arc<Router<H>> {
        self.current.swap(Arc::new(router))
    }
}

impl<H> From<Router<H>> for SharedRouter<H> {
    fn from(router: Router<H>) -> Self {
        Self::new(router)
    }
}
