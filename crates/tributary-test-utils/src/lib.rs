// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Tributary integration tests.
//!
//! Provides fixture connectors with known schemas and behaviors, plus helpers
//! for building raw configurations and a catalog holding every fixture.
//!
//! # Components
//!
//! - [`ConfigValidationTestConnector`] - string/int/list keys with recommenders
//! - [`VersionedConnector`] - fixed role and version, empty schema
//! - [`ModalConnector`] - recommender depending on another key
//! - [`FaultyConnector`] - failing version accessor and semantic validator
//! - [`HookConnector`] - semantic validator adding messages

use std::sync::Arc;

use tributary_core::RawConfig;
use tributary_plugin::PluginCatalog;

pub mod fixtures;

pub use fixtures::*;

/// Build a raw configuration from string pairs.
pub fn raw_config(pairs: &[(&str, &str)]) -> RawConfig {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A catalog holding every fixture connector, all listed.
pub fn fixture_catalog() -> PluginCatalog {
    let mut catalog = PluginCatalog::new();
    let plugins: Vec<Arc<dyn tributary_plugin::ConnectorPlugin>> = vec![
        Arc::new(ConfigValidationTestConnector),
        Arc::new(VersionedConnector::sink()),
        Arc::new(VersionedConnector::source()),
        Arc::new(ModalConnector),
        Arc::new(FaultyConnector::default()),
        Arc::new(HookConnector::default()),
    ];
    for plugin in plugins {
        if let Err(err) = catalog.register(plugin) {
            panic!("fixture registration failed: {err}");
        }
    }
    catalog
}
