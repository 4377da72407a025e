// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Atomically swappable catalog snapshots.
//!
//! Requests take a snapshot once and use it for their whole lifetime, so a
//! concurrent reload never changes the catalog under an in-flight validation.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::info;

use crate::registry::PluginCatalog;

#[derive(Debug)]
pub struct CatalogHandle {
    current: ArcSwap<PluginCatalog>,
}

impl CatalogHandle {
    pub fn new(catalog: PluginCatalog) -> Self {
        Self {
            current: ArcSwap::from_pointee(catalog),
        }
    }

    /// The catalog as of now. Later reloads do not affect the returned value.
    pub fn snapshot(&self) -> Arc<PluginCatalog> {
        self.current.load_full()
    }

    /// Replace the catalog for all subsequent snapshots.
    pub fn reload(&self, catalog: PluginCatalog) {
        let plugins = catalog.len();
        self.current.store(Arc::new(catalog));
        info!(plugins, "plugin catalog reloaded");
    }
}

impl From<PluginCatalog> for CatalogHandle {
    fn from(catalog: PluginCatalog) -> Self {
        Self::new(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshots_survive_reload() {
        let handle = CatalogHandle::new(PluginCatalog::new());
        let before = handle.snapshot();
        assert!(before.is_empty());

        let mut next = PluginCatalog::new();
        next.register(crate::catalog::file_stream_sink()).unwrap();
        handle.reload(next);

        assert!(before.is_empty());
        assert_eq!(handle.snapshot().len(), 1);
    }
}
