// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model for the Tributary engine.
//!
//! Every struct rejects unknown keys so typos surface at startup with a
//! suggestion instead of being silently ignored.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Top-level Tributary configuration. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TributaryConfig {
    #[serde(default)]
    pub engine: EngineConfig,

    /// Plugin catalog construction.
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Logging level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Catalog manifest adding aliases and listing flags to built-in plugins.
    #[serde(default)]
    pub manifest_path: Option<String>,

    /// Register suffix-stripped simple names as aliases.
    #[serde(default = "default_derive_aliases")]
    pub derive_aliases: bool,

    /// Suffixes stripped from simple names when deriving aliases.
    #[serde(default = "default_alias_suffixes")]
    pub alias_suffixes: Vec<String>,

    /// Canonical names hidden from listings in addition to the built-in ones.
    #[serde(default)]
    pub unlisted: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            manifest_path: None,
            derive_aliases: default_derive_aliases(),
            alias_suffixes: default_alias_suffixes(),
            unlisted: Vec::new(),
        }
    }
}

fn default_derive_aliases() -> bool {
    true
}

fn default_alias_suffixes() -> Vec<String> {
    vec!["Connector".to_string()]
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How reports and listings are printed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, colorized when attached to a terminal.
    #[default]
    Text,
    Json,
}
