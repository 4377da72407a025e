// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Two-phase configuration validation.
//!
//! Phase one walks the merged schema in order: coerce the raw string (or fall
//! back to the default), apply static constraints, then consult the key's
//! recommender with everything parsed so far. Phase two hands the raw map to
//! the plugin's semantic validator and folds its messages into the entries.
//!
//! Every failure becomes a message on some key. Nothing here aborts.

use tracing::{debug, warn};
use tributary_core::RawConfig;
use tributary_schema::base::CONNECTOR_CLASS_CONFIG;
use tributary_schema::{
    ConfigDefault, ConfigKeyDefinition, ConfigValue, MergedSchema, ParsedValues, SchemaError,
    SemanticValidator,
};

use crate::report::{ConfigInfo, ConfigKeyInfo, ConfigValueInfo, ValidationReport};

/// Validate `raw` against `merged` for the plugin named `plugin_name`.
pub fn validate_config(
    plugin_name: &str,
    merged: &MergedSchema,
    raw: &RawConfig,
    semantic: Option<&dyn SemanticValidator>,
) -> ValidationReport {
    let mut configs = schema_pass(merged, raw);
    if let Some(validator) = semantic {
        semantic_pass(plugin_name, validator, raw, &mut configs);
    }

    let report = ValidationReport::new(plugin_name, configs);
    debug!(
        plugin = plugin_name,
        keys = report.configs.len(),
        error_count = report.error_count,
        "validated connector configuration"
    );
    report
}

fn schema_pass(merged: &MergedSchema, raw: &RawConfig) -> Vec<ConfigInfo> {
    let mut parsed = ParsedValues::new();
    merged
        .iter()
        .map(|key| validate_key(key, raw, &mut parsed))
        .collect()
}

fn validate_key(key: &ConfigKeyDefinition, raw: &RawConfig, parsed: &mut ParsedValues) -> ConfigInfo {
    let mut errors = Vec::new();

    let value = match raw.get(&key.name) {
        Some(raw_value) => match ConfigValue::parse(key.config_type, &key.name, raw_value) {
            Ok(value) => Some(value),
            Err(err) => {
                errors.push(err.to_string());
                None
            }
        },
        None => match &key.default {
            ConfigDefault::Required => {
                errors.push(
                    SchemaError::MissingRequired {
                        key: key.name.clone(),
                    }
                    .to_string(),
                );
                None
            }
            ConfigDefault::Null => None,
            ConfigDefault::Value(default) => Some(default.clone()),
        },
    };

    if let Some(value) = &value {
        errors.extend(
            key.constraints
                .iter()
                .filter_map(|c| c.check(&key.name, value).err())
                .map(|e| e.to_string()),
        );
        parsed.insert(key.name.clone(), value.clone());
    }

    let (recommended, visible) = match &key.recommender {
        Some(recommender) => (
            recommender.valid_values(&key.name, parsed),
            recommender.visible(&key.name, parsed),
        ),
        None => (Vec::new(), true),
    };

    if let Some(value) = &value {
        if !value.is_recommended(&recommended) {
            errors.push(
                SchemaError::InvalidValue {
                    key: key.name.clone(),
                    value: value.render(),
                    reason: format!(
                        "Value must be one of {}",
                        recommended.iter().map(ConfigValue::render).collect::<Vec<_>>().join(", ")
                    ),
                }
                .to_string(),
            );
        }
    }

    ConfigInfo {
        definition: Some(ConfigKeyInfo::from(key)),
        value: ConfigValueInfo {
            name: key.name.clone(),
            value: value.as_ref().map(ConfigValue::render),
            recommended_values: recommended.iter().map(ConfigValue::render).collect(),
            errors,
            visible,
        },
    }
}

fn semantic_pass(
    plugin_name: &str,
    validator: &dyn SemanticValidator,
    raw: &RawConfig,
    configs: &mut Vec<ConfigInfo>,
) {
    match validator.validate(raw) {
        Ok(messages) => {
            for (key, key_messages) in messages {
                let entry = entry_for(configs, &key, raw);
                entry.value.errors.extend(key_messages);
            }
        }
        Err(fault) => {
            warn!(plugin = plugin_name, error = %fault, "semantic validation hook failed");
            let entry = entry_for(configs, CONNECTOR_CLASS_CONFIG, raw);
            entry.value.errors.push(format!(
                "Connector configuration validation failed: {}",
                fault.message
            ));
        }
    }
}

/// The existing entry for `key`, or a new definition-less entry appended last.
fn entry_for<'a>(configs: &'a mut Vec<ConfigInfo>, key: &str, raw: &RawConfig) -> &'a mut ConfigInfo {
    let index = match configs.iter().position(|c| c.value.name == key) {
        Some(index) => index,
        None => {
            let mut value = ConfigValueInfo::empty(key);
            value.value = raw.get(key).cloned();
            configs.push(ConfigInfo {
                definition: None,
                value,
            });
            configs.len() - 1
        }
    };
    &mut configs[index]
}
