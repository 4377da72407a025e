// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builds the plugin catalog from operator configuration.

use std::path::Path;

use tracing::{info, warn};
use tributary_config::CatalogConfig;
use tributary_core::TributaryError;
use tributary_plugin::{builtin_catalog, load_catalog_manifest, CatalogOptions, PluginCatalog};

/// Built-in connectors, then the manifest, then the extra unlisted names.
pub fn build_catalog(config: &CatalogConfig) -> Result<PluginCatalog, TributaryError> {
    let mut catalog = builtin_catalog(CatalogOptions {
        derive_aliases: config.derive_aliases,
        alias_suffixes: config.alias_suffixes.clone(),
    })?;

    if let Some(path) = &config.manifest_path {
        let manifest = load_catalog_manifest(Path::new(path))?;
        catalog.apply_manifest(&manifest);
    }

    for name in &config.unlisted {
        if catalog.set_listed(name, false).is_err() {
            warn!(plugin = %name, "unlisted plugin is not registered, ignoring");
        }
    }

    info!(plugins = catalog.len(), "plugin catalog ready");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tributary_plugin::list_plugins;

    use super::*;

    const SINK: &str = "tributary.connect.file.FileStreamSinkConnector";

    #[test]
    fn default_config_lists_file_connectors() {
        let catalog = build_catalog(&CatalogConfig::default()).unwrap();
        assert_eq!(list_plugins(&catalog).len(), 2);
        assert!(catalog.resolve("FileStreamSink").is_ok());
    }

    #[test]
    fn alias_derivation_can_be_disabled() {
        let config = CatalogConfig {
            derive_aliases: false,
            ..CatalogConfig::default()
        };
        let catalog = build_catalog(&config).unwrap();
        assert!(catalog.resolve("FileStreamSink").is_err());
        assert!(catalog.resolve("FileStreamSinkConnector").is_ok());
    }

    #[test]
    fn manifest_and_unlisted_are_applied() {
        let mut manifest = tempfile::NamedTempFile::new().unwrap();
        writeln!(manifest, "[[plugin]]\nclass = \"{SINK}\"\naliases = [\"file-sink\"]").unwrap();

        let config = CatalogConfig {
            manifest_path: Some(manifest.path().display().to_string()),
            unlisted: vec![SINK.to_string(), "not.Registered".to_string()],
            ..CatalogConfig::default()
        };
        let catalog = build_catalog(&config).unwrap();
        assert_eq!(catalog.resolve("file-sink").unwrap().identity.canonical_name, SINK);
        assert!(list_plugins(&catalog).iter().all(|e| e.class != SINK));
    }

    #[test]
    fn missing_manifest_fails() {
        let config = CatalogConfig {
            manifest_path: Some("/nonexistent/catalog.toml".to_string()),
            ..CatalogConfig::default()
        };
        assert!(matches!(build_catalog(&config), Err(TributaryError::Config(_))));
    }
}
