// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dynamic per-key recommendations and plugin-specific semantic checks.

use std::collections::BTreeMap;

use tributary_core::{PluginFault, RawConfig};

use crate::value::ConfigValue;

/// Values parsed so far during a validation pass, keyed by config name.
pub type ParsedValues = BTreeMap<String, ConfigValue>;

/// Computes the valid values and visibility of a key from already-parsed state.
///
/// Attached to a key definition. Called once per validation pass for that key,
/// after the key's own value has been parsed.
pub trait Recommender: Send + Sync {
    /// Values the key may take. An empty list means "no restriction".
    fn valid_values(&self, key: &str, parsed: &ParsedValues) -> Vec<ConfigValue>;

    /// Whether the key is relevant given the other values.
    fn visible(&self, _key: &str, _parsed: &ParsedValues) -> bool {
        true
    }
}

/// A recommender with a fixed set of valid values that is always visible.
#[derive(Debug, Clone)]
pub struct StaticRecommender {
    values: Vec<ConfigValue>,
}

impl StaticRecommender {
    pub fn new(values: Vec<ConfigValue>) -> Self {
        Self { values }
    }
}

impl Recommender for StaticRecommender {
    fn valid_values(&self, _key: &str, _parsed: &ParsedValues) -> Vec<ConfigValue> {
        self.values.clone()
    }
}

/// Error messages returned by a semantic validator, in the validator's order.
pub type KeyMessages = Vec<(String, Vec<String>)>;

/// Plugin-specific validation that a static schema cannot express,
/// for example mutually exclusive keys.
///
/// Receives the raw submitted map, including keys unknown to the schema.
pub trait SemanticValidator: Send + Sync {
    fn validate(&self, raw: &RawConfig) -> Result<KeyMessages, PluginFault>;
}
