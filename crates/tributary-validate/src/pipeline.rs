// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolve, merge and validate in one call against a single catalog snapshot.

use std::sync::Arc;

use tracing::info;
use tributary_core::{RawConfig, ResolutionError, TributaryError};
use tributary_plugin::{list_plugins, CatalogHandle, PluginCatalog, PluginEntry, PluginListingEntry};
use tributary_schema::base::CONNECTOR_CLASS_CONFIG;
use tributary_schema::{base_config_def, merge, ConfigDef};

use crate::engine::validate_config;
use crate::report::ValidationReport;

/// Entry point transports call for validation and listing.
///
/// Holds the swappable catalog and the framework base schema. Each call takes
/// one snapshot and uses it throughout, so reloads never split a request.
#[derive(Debug, Clone)]
pub struct ConnectorValidator {
    catalog: Arc<CatalogHandle>,
    base: Arc<ConfigDef>,
}

impl ConnectorValidator {
    /// Validator using the framework base schema.
    pub fn new(catalog: Arc<CatalogHandle>) -> Self {
        Self::with_base_schema(catalog, base_config_def())
    }

    pub fn with_base_schema(catalog: Arc<CatalogHandle>, base: ConfigDef) -> Self {
        Self {
            catalog,
            base: Arc::new(base),
        }
    }

    pub fn catalog(&self) -> &CatalogHandle {
        &self.catalog
    }

    /// Resolve `identifier` and validate `raw` against the plugin's merged schema.
    ///
    /// Only resolution failures are returned as errors. Bad values come back
    /// inside the report.
    pub fn validate(
        &self,
        identifier: &str,
        raw: &RawConfig,
    ) -> Result<ValidationReport, TributaryError> {
        let snapshot = self.catalog.snapshot();
        let entry = snapshot.resolve(identifier)?;
        check_declared_class(&snapshot, entry, identifier, raw)?;

        let merged = merge(&self.base, &entry.schema);
        let report = validate_config(
            &entry.identity.canonical_name,
            &merged,
            raw,
            entry.plugin.semantic_validator(),
        );

        info!(
            identifier,
            plugin = %report.name,
            error_count = report.error_count,
            "connector configuration validated"
        );
        Ok(report)
    }

    /// Listing metadata for every listed plugin in the current snapshot.
    pub fn list(&self) -> Vec<PluginListingEntry> {
        list_plugins(&self.catalog.snapshot())
    }
}

/// A submitted `connector.class` must name the same plugin as the request.
///
/// Any name of the resolved plugin is accepted as is, even when that name is
/// ambiguous across the catalog. Other values are resolved on their own.
fn check_declared_class(
    catalog: &PluginCatalog,
    entry: &PluginEntry,
    identifier: &str,
    raw: &RawConfig,
) -> Result<(), ResolutionError> {
    let Some(declared) = raw.get(CONNECTOR_CLASS_CONFIG).map(|v| v.trim()) else {
        return Ok(());
    };
    if declared.is_empty() || names_entry(entry, declared) {
        return Ok(());
    }

    match catalog.resolve(declared) {
        Ok(other) if other.identity.canonical_name == entry.identity.canonical_name => Ok(()),
        _ => Err(ResolutionError::Mismatch {
            requested: identifier.to_string(),
            declared: declared.to_string(),
        }),
    }
}

fn names_entry(entry: &PluginEntry, name: &str) -> bool {
    let identity = &entry.identity;
    identity.canonical_name == name
        || identity.simple_name == name
        || identity.aliases.contains(name)
}

#[cfg(test)]
mod tests {
    use tributary_plugin::{builtin_catalog, CatalogOptions};

    use super::*;

    fn validator() -> ConnectorValidator {
        let catalog = builtin_catalog(CatalogOptions::default()).unwrap();
        ConnectorValidator::new(Arc::new(CatalogHandle::new(catalog)))
    }

    fn raw(pairs: &[(&str, &str)]) -> RawConfig {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn base_keys_precede_plugin_keys() {
        let report = validator()
            .validate("FileStreamSource", &raw(&[("name", "src"), ("topic", "t")]))
            .unwrap();
        let names: Vec<&str> = report.configs.iter().map(|c| c.value.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "name",
                "connector.class",
                "tasks.max",
                "key.converter",
                "value.converter",
                "transforms",
                "file",
                "topic",
                "batch.size",
            ]
        );
        assert_eq!(report.groups, vec!["Common", "Transforms"]);
        // only connector.class is missing
        assert_eq!(report.error_count, 1);
    }

    #[test]
    fn declared_class_alias_of_same_plugin_is_accepted() {
        let report = validator()
            .validate(
                "tributary.connect.file.FileStreamSinkConnector",
                &raw(&[("connector.class", "FileStreamSink"), ("name", "n"), ("topics", "a")]),
            )
            .unwrap();
        assert_eq!(report.error_count, 0);
    }

    #[test]
    fn declared_class_naming_another_plugin_is_a_client_error() {
        let err = validator()
            .validate(
                "FileStreamSink",
                &raw(&[("connector.class", "FileStreamSource")]),
            )
            .unwrap_err();
        assert_eq!(err.category(), tributary_core::ErrorCategory::Client);
        assert!(matches!(
            err,
            TributaryError::Resolution(ResolutionError::Mismatch { .. })
        ));

        let err = validator()
            .validate("FileStreamSink", &raw(&[("connector.class", "Nope")]))
            .unwrap_err();
        assert!(matches!(
            err,
            TributaryError::Resolution(ResolutionError::Mismatch { .. })
        ));
    }

    #[test]
    fn sink_semantic_hook_runs_through_pipeline() {
        let report = validator()
            .validate(
                "FileStreamSink",
                &raw(&[("name", "n"), ("connector.class", "FileStreamSink")]),
            )
            .unwrap();
        let topics = report.config("topics").unwrap();
        assert_eq!(topics.value.errors.len(), 1);
        assert_eq!(report.error_count, 1);
    }

    #[test]
    fn listing_skips_unlisted_builtins() {
        let listing = validator().list();
        assert_eq!(listing.len(), 2);
    }
}
