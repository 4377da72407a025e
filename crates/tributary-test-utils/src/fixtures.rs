// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixture connectors with known schemas, recommenders, versions and faults.

use std::sync::Arc;

use tributary_core::{ConfigType, ConnectorRole, Importance, PluginFault, RawConfig, Width};
use tributary_plugin::ConnectorPlugin;
use tributary_schema::{
    ConfigDef, ConfigKeyDefinition, ConfigValue, KeyMessages, ParsedValues, Recommender,
    SemanticValidator,
};

pub const TEST_CONNECTOR_CLASS: &str = "tributary.test.fixtures.ConfigValidationTestConnector";
pub const TEST_STRING_CONFIG: &str = "test.string.config";
pub const TEST_INT_CONFIG: &str = "test.int.config";
pub const TEST_STRING_CONFIG_DEFAULT: &str = "test.string.config.default";
pub const TEST_LIST_CONFIG: &str = "test.list.config";
pub const TEST_GROUP: &str = "Test";

pub const TEST_SINK_CLASS: &str = "tributary.test.fixtures.TestSinkConnector";
pub const TEST_SINK_VERSION: &str = "some great version";
pub const TEST_SOURCE_CLASS: &str = "tributary.test.fixtures.TestSourceConnector";
pub const TEST_SOURCE_VERSION: &str = "an entirely different version";

pub const MODAL_CONNECTOR_CLASS: &str = "tributary.test.fixtures.ModalConnector";
pub const MODE_CONFIG: &str = "mode";
pub const MODE_DETAIL_CONFIG: &str = "mode.detail";

pub const FAULTY_CONNECTOR_CLASS: &str = "tributary.test.fixtures.FaultyConnector";

pub const HOOK_CONNECTOR_CLASS: &str = "tributary.test.fixtures.HookConnector";
pub const HOOK_ONLY_KEY: &str = "hook.only.key";

/// Recommends the integers 1, 2 and 3.
struct IntegerRecommender;

impl Recommender for IntegerRecommender {
    fn valid_values(&self, _key: &str, _parsed: &ParsedValues) -> Vec<ConfigValue> {
        vec![1.into(), 2.into(), 3.into()]
    }
}

/// Recommends the strings "a", "b" and "c".
struct ListRecommender;

impl Recommender for ListRecommender {
    fn valid_values(&self, _key: &str, _parsed: &ParsedValues) -> Vec<ConfigValue> {
        vec!["a".into(), "b".into(), "c".into()]
    }
}

/// Connector with one key of each common shape: required string, recommended
/// int, defaulted string, recommended list.
#[derive(Debug, Default)]
pub struct ConfigValidationTestConnector;

impl ConnectorPlugin for ConfigValidationTestConnector {
    fn class_name(&self) -> &str {
        TEST_CONNECTOR_CLASS
    }

    fn role(&self) -> Option<ConnectorRole> {
        None
    }

    fn version(&self) -> Result<String, PluginFault> {
        Ok("1.0".to_string())
    }

    fn config_def(&self) -> ConfigDef {
        ConfigDef::new()
            .define(ConfigKeyDefinition::new(
                TEST_STRING_CONFIG,
                ConfigType::String,
                Importance::High,
                "Test configuration for string type.",
            ))
            .define(
                ConfigKeyDefinition::new(
                    TEST_INT_CONFIG,
                    ConfigType::Int,
                    Importance::Medium,
                    "Test configuration for integer type.",
                )
                .in_group(TEST_GROUP, 1)
                .with_width(Width::Medium)
                .with_recommender(Arc::new(IntegerRecommender)),
            )
            .define(
                ConfigKeyDefinition::new(
                    TEST_STRING_CONFIG_DEFAULT,
                    ConfigType::String,
                    Importance::Low,
                    "Test configuration with default value.",
                )
                .with_default(""),
            )
            .define(
                ConfigKeyDefinition::new(
                    TEST_LIST_CONFIG,
                    ConfigType::List,
                    Importance::High,
                    "Test configuration for list type.",
                )
                .in_group(TEST_GROUP, 2)
                .with_width(Width::Long)
                .with_recommender(Arc::new(ListRecommender)),
            )
    }
}

/// Connector with a fixed role and version and an empty schema.
#[derive(Debug, Clone)]
pub struct VersionedConnector {
    pub class: &'static str,
    pub role: Option<ConnectorRole>,
    pub version: &'static str,
}

impl VersionedConnector {
    pub fn sink() -> Self {
        Self {
            class: TEST_SINK_CLASS,
            role: Some(ConnectorRole::Sink),
            version: TEST_SINK_VERSION,
        }
    }

    pub fn source() -> Self {
        Self {
            class: TEST_SOURCE_CLASS,
            role: Some(ConnectorRole::Source),
            version: TEST_SOURCE_VERSION,
        }
    }
}

impl ConnectorPlugin for VersionedConnector {
    fn class_name(&self) -> &str {
        self.class
    }

    fn role(&self) -> Option<ConnectorRole> {
        self.role
    }

    fn version(&self) -> Result<String, PluginFault> {
        Ok(self.version.to_string())
    }

    fn config_def(&self) -> ConfigDef {
        ConfigDef::new()
    }
}

/// `mode.detail` is only visible in `advanced` mode, and its valid values
/// depend on the parsed `mode`.
struct ModeDetailRecommender;

impl Recommender for ModeDetailRecommender {
    fn valid_values(&self, _key: &str, parsed: &ParsedValues) -> Vec<ConfigValue> {
        match parsed.get(MODE_CONFIG) {
            Some(ConfigValue::String(mode)) if mode == "advanced" => {
                vec!["fast".into(), "safe".into()]
            }
            _ => Vec::new(),
        }
    }

    fn visible(&self, _key: &str, parsed: &ParsedValues) -> bool {
        matches!(parsed.get(MODE_CONFIG), Some(ConfigValue::String(mode)) if mode == "advanced")
    }
}

/// Connector whose recommendations depend on another key's parsed value.
#[derive(Debug, Default)]
pub struct ModalConnector;

impl ConnectorPlugin for ModalConnector {
    fn class_name(&self) -> &str {
        MODAL_CONNECTOR_CLASS
    }

    fn role(&self) -> Option<ConnectorRole> {
        Some(ConnectorRole::Source)
    }

    fn version(&self) -> Result<String, PluginFault> {
        Ok("2.1".to_string())
    }

    fn config_def(&self) -> ConfigDef {
        ConfigDef::new()
            .define(
                ConfigKeyDefinition::new(
                    MODE_CONFIG,
                    ConfigType::String,
                    Importance::High,
                    "Operating mode.",
                )
                .with_default("basic")
                .with_dependents(vec![MODE_DETAIL_CONFIG.to_string()]),
            )
            .define(
                ConfigKeyDefinition::new(
                    MODE_DETAIL_CONFIG,
                    ConfigType::String,
                    Importance::Low,
                    "Tuning for advanced mode.",
                )
                .with_null_default()
                .with_recommender(Arc::new(ModeDetailRecommender)),
            )
    }
}

/// Semantic validator that always fails.
#[derive(Default)]
struct FailingValidator;

impl SemanticValidator for FailingValidator {
    fn validate(&self, _raw: &RawConfig) -> Result<KeyMessages, PluginFault> {
        Err(PluginFault::new("validator crashed"))
    }
}

/// Connector whose version accessor and semantic validator both fail.
#[derive(Default)]
pub struct FaultyConnector {
    validator: FailingValidator,
}

impl ConnectorPlugin for FaultyConnector {
    fn class_name(&self) -> &str {
        FAULTY_CONNECTOR_CLASS
    }

    fn role(&self) -> Option<ConnectorRole> {
        Some(ConnectorRole::Sink)
    }

    fn version(&self) -> Result<String, PluginFault> {
        Err(PluginFault::new("version metadata missing"))
    }

    fn config_def(&self) -> ConfigDef {
        ConfigDef::new()
    }

    fn semantic_validator(&self) -> Option<&dyn SemanticValidator> {
        Some(&self.validator)
    }
}

/// Adds a message to `test.int.config` when it equals 2, and always reports
/// on a key the schema does not declare.
#[derive(Default)]
struct EchoValidator;

impl SemanticValidator for EchoValidator {
    fn validate(&self, raw: &RawConfig) -> Result<KeyMessages, PluginFault> {
        let mut messages = vec![(
            HOOK_ONLY_KEY.to_string(),
            vec!["hook.only.key is reserved".to_string()],
        )];
        if raw.get(TEST_INT_CONFIG).map(|v| v.trim()) == Some("2") {
            messages.push((
                TEST_INT_CONFIG.to_string(),
                vec!["2 is reserved by the hook".to_string()],
            ));
        }
        Ok(messages)
    }
}

/// The validation test connector's schema plus a semantic validator.
#[derive(Default)]
pub struct HookConnector {
    validator: EchoValidator,
}

impl ConnectorPlugin for HookConnector {
    fn class_name(&self) -> &str {
        HOOK_CONNECTOR_CLASS
    }

    fn role(&self) -> Option<ConnectorRole> {
        None
    }

    fn version(&self) -> Result<String, PluginFault> {
        Ok("0.9".to_string())
    }

    fn config_def(&self) -> ConfigDef {
        ConfigValidationTestConnector.config_def()
    }

    fn semantic_validator(&self) -> Option<&dyn SemanticValidator> {
        Some(&self.validator)
    }
}
