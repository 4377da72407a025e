// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Connector plugin catalog, identifier resolution and listing.
//!
//! Plugins implement [`ConnectorPlugin`] and are registered into a
//! [`PluginCatalog`] at startup. The catalog resolves user-supplied
//! identifiers (canonical class name, simple name, or alias) to exactly one
//! plugin, and [`list_plugins`] produces listing metadata without running
//! validation. A [`CatalogHandle`] lets the catalog be reloaded while
//! in-flight requests keep the snapshot they started with.

pub mod catalog;
pub mod connector;
pub mod listing;
pub mod manifest;
pub mod registry;
pub mod snapshot;

pub use catalog::builtin_catalog;
pub use connector::ConnectorPlugin;
pub use listing::{list_plugins, PluginListingEntry};
pub use manifest::{load_catalog_manifest, parse_catalog_manifest, CatalogManifest, ManifestPlugin};
pub use registry::{CatalogOptions, PluginCatalog, PluginEntry, PluginIdentity, Resolution};
pub use snapshot::CatalogHandle;
