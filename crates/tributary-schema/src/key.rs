// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key definitions.

use std::sync::Arc;

use tributary_core::{ConfigType, Importance, Width};

use crate::constraint::Constraint;
use crate::recommender::Recommender;
use crate::value::ConfigValue;

/// What a key falls back to when the caller does not supply it.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigDefault {
    /// No fallback: omitting the key is an error.
    Required,
    /// Optional, and absent means no value at all.
    Null,
    /// Optional, with a concrete fallback value.
    Value(ConfigValue),
}

/// Declaration of a single configuration key.
#[derive(Clone)]
pub struct ConfigKeyDefinition {
    pub name: String,
    pub config_type: ConfigType,
    pub default: ConfigDefault,
    pub importance: Importance,
    pub documentation: String,
    /// Group the key is displayed under, if any.
    pub group: Option<String>,
    /// Position within `group`. `-1` when the key has no group.
    pub order_in_group: i32,
    pub width: Width,
    pub display_name: String,
    /// Keys whose recommendations depend on this key's value.
    pub dependents: Vec<String>,
    pub constraints: Vec<Constraint>,
    pub recommender: Option<Arc<dyn Recommender>>,
}

impl std::fmt::Debug for ConfigKeyDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigKeyDefinition")
            .field("name", &self.name)
            .field("config_type", &self.config_type)
            .field("default", &self.default)
            .field("importance", &self.importance)
            .field("group", &self.group)
            .field("order_in_group", &self.order_in_group)
            .field("width", &self.width)
            .field("dependents", &self.dependents)
            .field("constraints", &self.constraints)
            .field("recommender", &self.recommender.is_some())
            .finish()
    }
}

impl ConfigKeyDefinition {
    /// A required, ungrouped key displayed under its own name.
    pub fn new(
        name: impl Into<String>,
        config_type: ConfigType,
        importance: Importance,
        documentation: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            config_type,
            default: ConfigDefault::Required,
            importance,
            documentation: documentation.into(),
            group: None,
            order_in_group: -1,
            width: Width::None,
            dependents: Vec::new(),
            constraints: Vec::new(),
            recommender: None,
        }
    }

    pub fn with_default(mut self, value: impl Into<ConfigValue>) -> Self {
        self.default = ConfigDefault::Value(value.into());
        self
    }

    /// Make the key optional with no fallback value.
    pub fn with_null_default(mut self) -> Self {
        self.default = ConfigDefault::Null;
        self
    }

    pub fn in_group(mut self, group: impl Into<String>, order: i32) -> Self {
        self.group = Some(group.into());
        self.order_in_group = order;
        self
    }

    pub fn with_width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_dependents(mut self, dependents: Vec<String>) -> Self {
        self.dependents = dependents;
        self
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_recommender(mut self, recommender: Arc<dyn Recommender>) -> Self {
        self.recommender = Some(recommender);
        self
    }

    /// True iff the key has no default of any kind.
    pub fn is_required(&self) -> bool {
        matches!(self.default, ConfigDefault::Required)
    }

    /// The default rendered for display, `None` when required or null.
    pub fn rendered_default(&self) -> Option<String> {
        match &self.default {
            ConfigDefault::Value(v) => Some(v.render()),
            ConfigDefault::Required | ConfigDefault::Null => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommender::StaticRecommender;

    #[test]
    fn new_key_is_required_and_ungrouped() {
        let key = ConfigKeyDefinition::new("k", ConfigType::String, Importance::High, "doc");
        assert!(key.is_required());
        assert_eq!(key.display_name, "k");
        assert_eq!(key.order_in_group, -1);
        assert_eq!(key.width, Width::None);
        assert!(key.rendered_default().is_none());
    }

    #[test]
    fn defaults_make_keys_optional() {
        let key = ConfigKeyDefinition::new("k", ConfigType::String, Importance::Low, "doc")
            .with_default("");
        assert!(!key.is_required());
        assert_eq!(key.rendered_default().as_deref(), Some(""));

        let key = ConfigKeyDefinition::new("c", ConfigType::Class, Importance::Low, "doc")
            .with_null_default();
        assert!(!key.is_required());
        assert!(key.rendered_default().is_none());
    }

    #[test]
    fn debug_elides_recommender_body() {
        let key = ConfigKeyDefinition::new("k", ConfigType::Int, Importance::Medium, "doc")
            .in_group("Test", 1)
            .with_recommender(Arc::new(StaticRecommender::new(vec![1.into()])));
        let rendered = format!("{key:?}");
        assert!(rendered.contains("recommender: true"));
        assert!(rendered.contains("Test"));
    }
}
