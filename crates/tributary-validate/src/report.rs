// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured validation reports.
//!
//! The serialized shape is stable and is what transports return to clients:
//!
//! ```json
//! { "name": "...", "error_count": 1, "groups": ["Common"],
//!   "configs": [ { "definition": { ... }, "value": { ... } } ] }
//! ```

use serde::{Deserialize, Serialize};
use tributary_core::{ConfigType, Importance, Width};
use tributary_schema::ConfigKeyDefinition;

/// Outcome of validating one connector configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Canonical name of the resolved plugin.
    pub name: String,
    /// Number of keys carrying at least one error.
    pub error_count: usize,
    /// Distinct non-empty groups, first-seen order over `configs`.
    pub groups: Vec<String>,
    pub configs: Vec<ConfigInfo>,
}

impl ValidationReport {
    /// Assemble a report, deriving the error count and group list from `configs`.
    pub fn new(name: impl Into<String>, configs: Vec<ConfigInfo>) -> Self {
        let error_count = configs.iter().filter(|c| !c.value.errors.is_empty()).count();

        let mut groups: Vec<String> = Vec::new();
        for group in configs
            .iter()
            .filter_map(|c| c.definition.as_ref())
            .filter_map(|d| d.group.as_deref())
            .filter(|g| !g.is_empty())
        {
            if !groups.iter().any(|seen| seen == group) {
                groups.push(group.to_string());
            }
        }

        Self {
            name: name.into(),
            error_count,
            groups,
            configs,
        }
    }

    /// The entry for `key`, if the report has one.
    pub fn config(&self, key: &str) -> Option<&ConfigInfo> {
        self.configs.iter().find(|c| c.value.name == key)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

/// Definition and outcome for a single key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigInfo {
    /// `None` for keys only the plugin's semantic validator reported on.
    pub definition: Option<ConfigKeyInfo>,
    pub value: ConfigValueInfo,
}

/// Display metadata of a key definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigKeyInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub config_type: ConfigType,
    pub required: bool,
    pub default_value: Option<String>,
    pub importance: Importance,
    pub documentation: String,
    pub group: Option<String>,
    pub order: i32,
    pub width: Width,
    pub display_name: String,
    pub dependents: Vec<String>,
}

impl From<&ConfigKeyDefinition> for ConfigKeyInfo {
    fn from(key: &ConfigKeyDefinition) -> Self {
        Self {
            name: key.name.clone(),
            config_type: key.config_type,
            required: key.is_required(),
            default_value: key.rendered_default(),
            importance: key.importance,
            documentation: key.documentation.clone(),
            group: key.group.clone(),
            order: key.order_in_group,
            width: key.width,
            display_name: key.display_name.clone(),
            dependents: key.dependents.clone(),
        }
    }
}

/// Validation outcome of a single key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValueInfo {
    pub name: String,
    /// Canonical rendering of the effective value. `None` when absent or unparsable.
    pub value: Option<String>,
    pub recommended_values: Vec<String>,
    pub errors: Vec<String>,
    pub visible: bool,
}

impl ConfigValueInfo {
    /// A visible entry with no value, recommendations or errors.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            recommended_values: Vec::new(),
            errors: Vec::new(),
            visible: true,
        }
    }
}
