// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog manifest parsing from `catalog.toml` files.
//!
//! A manifest is generated at build time (or written by an operator) and
//! decorates already-registered plugins with extra aliases and listing flags.
//! It never introduces plugins of its own.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tributary_core::TributaryError;

/// Parsed catalog manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogManifest {
    pub plugins: Vec<ManifestPlugin>,
}

/// Decorations for one plugin, keyed by canonical class name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestPlugin {
    pub class: String,
    pub aliases: Vec<String>,
    /// `Some(false)` hides the plugin from listings; `None` leaves it unchanged.
    pub listed: Option<bool>,
}

/// Intermediate TOML deserialization struct for `catalog.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogManifestFile {
    #[serde(default)]
    plugin: Vec<PluginSection>,
}

/// One `[[plugin]]` table of a `catalog.toml` file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PluginSection {
    class: String,
    #[serde(default)]
    aliases: Vec<String>,
    listed: Option<bool>,
}

/// Parse a catalog manifest from TOML content.
///
/// Validates that every class name and alias is non-empty.
pub fn parse_catalog_manifest(toml_content: &str) -> Result<CatalogManifest, TributaryError> {
    let file: CatalogManifestFile = toml::from_str(toml_content)
        .map_err(|e| TributaryError::Config(format!("invalid catalog manifest: {e}")))?;

    let mut plugins = Vec::with_capacity(file.plugin.len());
    for (i, section) in file.plugin.into_iter().enumerate() {
        if section.class.trim().is_empty() {
            return Err(TributaryError::Config(format!(
                "catalog manifest: plugin[{i}].class must not be empty"
            )));
        }
        if section.aliases.iter().any(|a| a.trim().is_empty()) {
            return Err(TributaryError::Config(format!(
                "catalog manifest: plugin `{}` declares an empty alias",
                section.class
            )));
        }
        plugins.push(ManifestPlugin {
            class: section.class,
            aliases: section.aliases,
            listed: section.listed,
        });
    }

    Ok(CatalogManifest { plugins })
}

/// Read and parse a catalog manifest file.
pub fn load_catalog_manifest(path: &Path) -> Result<CatalogManifest, TributaryError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        TributaryError::Config(format!(
            "cannot read catalog manifest {}: {e}",
            path.display()
        ))
    })?;
    parse_catalog_manifest(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_manifest() {
        let toml = r#"
[[plugin]]
class = "tributary.connect.file.FileStreamSourceConnector"
aliases = ["file-source", "fs-in"]

[[plugin]]
class = "tributary.connect.tools.MockSourceConnector"
listed = false
"#;
        let manifest = parse_catalog_manifest(toml).unwrap();
        assert_eq!(manifest.plugins.len(), 2);
        assert_eq!(manifest.plugins[0].aliases, vec!["file-source", "fs-in"]);
        assert_eq!(manifest.plugins[0].listed, None);
        assert_eq!(manifest.plugins[1].listed, Some(false));
        assert!(manifest.plugins[1].aliases.is_empty());
    }

    #[test]
    fn parse_empty_manifest() {
        let manifest = parse_catalog_manifest("").unwrap();
        assert!(manifest.plugins.is_empty());
    }

    #[test]
    fn parse_empty_class() {
        let toml = r#"
[[plugin]]
class = ""
"#;
        let err = parse_catalog_manifest(toml).unwrap_err().to_string();
        assert!(err.contains("plugin[0].class must not be empty"));
    }

    #[test]
    fn parse_empty_alias() {
        let toml = r#"
[[plugin]]
class = "a.B"
aliases = ["ok", " "]
"#;
        let err = parse_catalog_manifest(toml).unwrap_err().to_string();
        assert!(err.contains("empty alias"));
    }

    #[test]
    fn parse_unknown_field() {
        let toml = r#"
[[plugin]]
class = "a.B"
alias = ["typo"]
"#;
        let err = parse_catalog_manifest(toml).unwrap_err().to_string();
        assert!(err.contains("invalid catalog manifest"));
    }
}
