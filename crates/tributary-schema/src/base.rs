// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Framework base schema inherited by every connector.

use tributary_core::{ConfigType, Importance, Width};

use crate::constraint::Constraint;
use crate::key::ConfigKeyDefinition;
use crate::schema::ConfigDef;

pub const NAME_CONFIG: &str = "name";
pub const CONNECTOR_CLASS_CONFIG: &str = "connector.class";
pub const TASKS_MAX_CONFIG: &str = "tasks.max";
pub const KEY_CONVERTER_CLASS_CONFIG: &str = "key.converter";
pub const VALUE_CONVERTER_CLASS_CONFIG: &str = "value.converter";
pub const TRANSFORMS_CONFIG: &str = "transforms";

pub const COMMON_GROUP: &str = "Common";
pub const TRANSFORMS_GROUP: &str = "Transforms";

/// Keys every connector configuration carries regardless of plugin.
pub fn base_config_def() -> ConfigDef {
    ConfigDef::new()
        .define(
            ConfigKeyDefinition::new(
                NAME_CONFIG,
                ConfigType::String,
                Importance::High,
                "Globally unique name to use for this connector.",
            )
            .with_constraint(Constraint::NonEmptyString)
            .in_group(COMMON_GROUP, 1)
            .with_width(Width::Medium)
            .with_display_name("Connector name"),
        )
        .define(
            ConfigKeyDefinition::new(
                CONNECTOR_CLASS_CONFIG,
                ConfigType::String,
                Importance::High,
                "Name or alias of the class for this connector.",
            )
            .in_group(COMMON_GROUP, 2)
            .with_width(Width::Long)
            .with_display_name("Connector class"),
        )
        .define(
            ConfigKeyDefinition::new(
                TASKS_MAX_CONFIG,
                ConfigType::Int,
                Importance::High,
                "Maximum number of tasks to use for this connector.",
            )
            .with_default(1)
            .with_constraint(Constraint::AtLeast(1))
            .in_group(COMMON_GROUP, 3)
            .with_width(Width::Short)
            .with_display_name("Tasks max"),
        )
        .define(
            ConfigKeyDefinition::new(
                KEY_CONVERTER_CLASS_CONFIG,
                ConfigType::Class,
                Importance::Low,
                "Converter class for record keys. Falls back to the worker default when unset.",
            )
            .with_null_default()
            .in_group(COMMON_GROUP, 4)
            .with_width(Width::Short)
            .with_display_name("Key converter class"),
        )
        .define(
            ConfigKeyDefinition::new(
                VALUE_CONVERTER_CLASS_CONFIG,
                ConfigType::Class,
                Importance::Low,
                "Converter class for record values. Falls back to the worker default when unset.",
            )
            .with_null_default()
            .in_group(COMMON_GROUP, 5)
            .with_width(Width::Short)
            .with_display_name("Value converter class"),
        )
        .define(
            ConfigKeyDefinition::new(
                TRANSFORMS_CONFIG,
                ConfigType::List,
                Importance::Low,
                "Aliases for the transformations to be applied to records.",
            )
            .with_default(Vec::<String>::new())
            .in_group(TRANSFORMS_GROUP, 1)
            .with_width(Width::Long)
            .with_display_name("Transforms"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_schema_declares_common_keys_in_order() {
        let def = base_config_def();
        let names: Vec<&str> = def.names().collect();
        assert_eq!(
            names,
            vec![
                NAME_CONFIG,
                CONNECTOR_CLASS_CONFIG,
                TASKS_MAX_CONFIG,
                KEY_CONVERTER_CLASS_CONFIG,
                VALUE_CONVERTER_CLASS_CONFIG,
                TRANSFORMS_CONFIG,
            ]
        );
    }

    #[test]
    fn only_name_and_class_are_required() {
        let def = base_config_def();
        let required: Vec<&str> = def
            .iter()
            .filter(|k| k.is_required())
            .map(|k| k.name.as_str())
            .collect();
        assert_eq!(required, vec![NAME_CONFIG, CONNECTOR_CLASS_CONFIG]);
        assert_eq!(def.get(TASKS_MAX_CONFIG).unwrap().rendered_default().as_deref(), Some("1"));
    }
}
