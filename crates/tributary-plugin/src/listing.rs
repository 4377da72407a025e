// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lightweight plugin metadata for catalog listings.
//!
//! Listing bypasses resolution and validation entirely. A plugin whose version
//! accessor fails is left out of the listing; the rest are still returned.

use serde::{Deserialize, Serialize};
use tracing::warn;
use tributary_core::PluginKind;

use crate::registry::PluginCatalog;

/// One row of the plugin listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PluginListingEntry {
    pub class: String,
    #[serde(rename = "type")]
    pub kind: PluginKind,
    pub version: String,
}

/// List every listed plugin, sorted by class name.
pub fn list_plugins(catalog: &PluginCatalog) -> Vec<PluginListingEntry> {
    catalog
        .iter()
        .filter(|entry| entry.listed)
        .filter_map(|entry| {
            let class = &entry.identity.canonical_name;
            match entry.plugin.version() {
                Ok(version) => Some(PluginListingEntry {
                    class: class.clone(),
                    kind: PluginKind::from(entry.plugin.role()),
                    version,
                }),
                Err(fault) => {
                    warn!(plugin = %class, error = %fault, "omitting plugin from listing");
                    None
                }
            }
        })
        .collect()
}
