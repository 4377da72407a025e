// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered configuration schemas and the base/plugin schema merge.
//!
//! A [`ConfigDef`] keeps keys in declaration order. [`merge`] combines the
//! framework base schema with a plugin's schema into a [`MergedSchema`]:
//! base keys first, then plugin-only keys, with the plugin's definition
//! taking precedence on a name collision.

use std::collections::HashSet;

use tracing::debug;

use crate::key::ConfigKeyDefinition;

/// A plugin's (or the framework's) declared configuration keys.
#[derive(Debug, Clone, Default)]
pub struct ConfigDef {
    keys: Vec<ConfigKeyDefinition>,
}

impl ConfigDef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key. Redefining an existing name replaces it in place.
    pub fn define(mut self, key: ConfigKeyDefinition) -> Self {
        match self.keys.iter_mut().find(|k| k.name == key.name) {
            Some(existing) => *existing = key,
            None => self.keys.push(key),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ConfigKeyDefinition> {
        self.keys.iter().find(|k| k.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Keys in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigKeyDefinition> {
        self.keys.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Result of [`merge`]. Every key name appears exactly once.
#[derive(Debug, Clone, Default)]
pub struct MergedSchema {
    keys: Vec<ConfigKeyDefinition>,
}

impl MergedSchema {
    /// Keys in validation order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigKeyDefinition> {
        self.keys.iter()
    }

    pub fn get(&self, name: &str) -> Option<&ConfigKeyDefinition> {
        self.keys.iter().find(|k| k.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Merge the framework `base` schema with a plugin's `specific` schema.
///
/// Order: base keys in base declaration order, then keys only `specific`
/// declares, in its declaration order. A key in both keeps its base position
/// but takes the `specific` definition.
pub fn merge(base: &ConfigDef, specific: &ConfigDef) -> MergedSchema {
    let mut keys = Vec::with_capacity(base.len() + specific.len());
    let mut seen = HashSet::new();
    let mut overridden = 0usize;

    for key in base.iter() {
        let chosen = match specific.get(&key.name) {
            Some(refined) => {
                overridden += 1;
                refined
            }
            None => key,
        };
        seen.insert(key.name.as_str());
        keys.push(chosen.clone());
    }

    for key in specific.iter() {
        if seen.insert(key.name.as_str()) {
            keys.push(key.clone());
        }
    }

    debug!(
        base = base.len(),
        specific = specific.len(),
        merged = keys.len(),
        overridden,
        "merged configuration schemas"
    );

    MergedSchema { keys }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;
    use tributary_core::{ConfigType, Importance};

    use super::*;
    use crate::recommender::StaticRecommender;

    fn key(name: &str) -> ConfigKeyDefinition {
        ConfigKeyDefinition::new(name, ConfigType::String, Importance::Low, format!("doc {name}"))
    }

    #[test]
    fn define_replaces_same_name_in_place() {
        let def = ConfigDef::new()
            .define(key("a"))
            .define(key("b"))
            .define(key("a").with_default("x"));
        assert_eq!(def.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(!def.get("a").unwrap().is_required());
    }

    #[test]
    fn merge_orders_base_then_specific() {
        let base = ConfigDef::new().define(key("name")).define(key("connector.class"));
        let specific = ConfigDef::new().define(key("topic")).define(key("file"));
        let merged = merge(&base, &specific);
        let names: Vec<&str> = merged.iter().map(|k| k.name.as_str()).collect();
        assert_eq!(names, vec!["name", "connector.class", "topic", "file"]);
    }

    #[test]
    fn specific_definition_wins_on_collision() {
        let base = ConfigDef::new().define(key("x")).define(key("y"));
        let specific = ConfigDef::new()
            .define(key("z"))
            .define(key("x").with_recommender(Arc::new(StaticRecommender::new(vec!["a".into()]))));
        let merged = merge(&base, &specific);

        assert_eq!(merged.len(), 3);
        let x = merged.get("x").unwrap();
        assert!(x.recommender.is_some());
        let names: Vec<&str> = merged.iter().map(|k| k.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
    }

    #[test]
    fn merge_with_empty_sides() {
        let base = ConfigDef::new().define(key("a"));
        assert_eq!(merge(&base, &ConfigDef::new()).len(), 1);
        assert_eq!(merge(&ConfigDef::new(), &base).len(), 1);
        assert!(merge(&ConfigDef::new(), &ConfigDef::new()).is_empty());
    }

    proptest! {
        #[test]
        fn merged_size_is_union_size(
            base_names in proptest::collection::hash_set("[a-e]{1,2}", 0..8),
            specific_names in proptest::collection::hash_set("[a-e]{1,2}", 0..8),
        ) {
            let base = base_names.iter().fold(ConfigDef::new(), |d, n| d.define(key(n)));
            let specific = specific_names
                .iter()
                .fold(ConfigDef::new(), |d, n| d.define(key(n).with_default("specific")));
            let merged = merge(&base, &specific);

            let union: HashSet<&String> = base_names.iter().chain(specific_names.iter()).collect();
            prop_assert_eq!(merged.len(), union.len());
            for name in &specific_names {
                prop_assert!(!merged.get(name).unwrap().is_required());
            }
        }
    }
}
