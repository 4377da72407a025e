// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in connector catalog.
//!
//! Registers the connectors compiled into the Tributary binary:
//! - `FileStreamSourceConnector` (source, listed)
//! - `FileStreamSinkConnector` (sink, listed)
//! - `MockSourceConnector` / `MockSinkConnector` (test tooling, unlisted)

use std::sync::Arc;

use tributary_core::{ConfigType, ConnectorRole, Importance, PluginFault, RawConfig, TributaryError, Width};
use tributary_schema::{
    ConfigDef, ConfigKeyDefinition, Constraint, KeyMessages, SemanticValidator,
};

use crate::connector::ConnectorPlugin;
use crate::registry::{CatalogOptions, PluginCatalog};

pub const FILE_STREAM_SOURCE_CLASS: &str = "tributary.connect.file.FileStreamSourceConnector";
pub const FILE_STREAM_SINK_CLASS: &str = "tributary.connect.file.FileStreamSinkConnector";
pub const MOCK_SOURCE_CLASS: &str = "tributary.connect.tools.MockSourceConnector";
pub const MOCK_SINK_CLASS: &str = "tributary.connect.tools.MockSinkConnector";

const FILE_CONFIG: &str = "file";
const TOPIC_CONFIG: &str = "topic";
const TOPICS_CONFIG: &str = "topics";
const TOPICS_REGEX_CONFIG: &str = "topics.regex";
const BATCH_SIZE_CONFIG: &str = "batch.size";
const MOCK_MODE_CONFIG: &str = "mock.mode";

const CONNECTOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reads lines from a file (or stdin) and publishes them to a topic.
#[derive(Debug, Default)]
pub struct FileStreamSourceConnector;

impl ConnectorPlugin for FileStreamSourceConnector {
    fn class_name(&self) -> &str {
        FILE_STREAM_SOURCE_CLASS
    }

    fn role(&self) -> Option<ConnectorRole> {
        Some(ConnectorRole::Source)
    }

    fn version(&self) -> Result<String, PluginFault> {
        Ok(CONNECTOR_VERSION.to_string())
    }

    fn config_def(&self) -> ConfigDef {
        ConfigDef::new()
            .define(
                ConfigKeyDefinition::new(
                    FILE_CONFIG,
                    ConfigType::String,
                    Importance::High,
                    "Source filename. If not specified, the standard input will be used.",
                )
                .with_null_default(),
            )
            .define(ConfigKeyDefinition::new(
                TOPIC_CONFIG,
                ConfigType::String,
                Importance::High,
                "The topic to publish data to.",
            ))
            .define(
                ConfigKeyDefinition::new(
                    BATCH_SIZE_CONFIG,
                    ConfigType::Int,
                    Importance::Low,
                    "The maximum number of records the source task can read from the file at once.",
                )
                .with_default(2000)
                .with_constraint(Constraint::AtLeast(1)),
            )
    }
}

/// Appends records from one or more topics to a file (or stdout).
#[derive(Debug, Default)]
pub struct FileStreamSinkConnector {
    topic_selection: TopicSelectionValidator,
}

impl ConnectorPlugin for FileStreamSinkConnector {
    fn class_name(&self) -> &str {
        FILE_STREAM_SINK_CLASS
    }

    fn role(&self) -> Option<ConnectorRole> {
        Some(ConnectorRole::Sink)
    }

    fn version(&self) -> Result<String, PluginFault> {
        Ok(CONNECTOR_VERSION.to_string())
    }

    fn config_def(&self) -> ConfigDef {
        ConfigDef::new()
            .define(
                ConfigKeyDefinition::new(
                    FILE_CONFIG,
                    ConfigType::String,
                    Importance::High,
                    "Destination filename. If not specified, the standard output will be used.",
                )
                .with_null_default(),
            )
            .define(
                ConfigKeyDefinition::new(
                    TOPICS_CONFIG,
                    ConfigType::List,
                    Importance::High,
                    "List of topics to consume, separated by commas.",
                )
                .with_default(Vec::<String>::new())
                .with_width(Width::Long)
                .with_display_name("Topics"),
            )
            .define(
                ConfigKeyDefinition::new(
                    TOPICS_REGEX_CONFIG,
                    ConfigType::String,
                    Importance::High,
                    "Regular expression giving topics to consume.",
                )
                .with_default("")
                .with_width(Width::Long)
                .with_display_name("Topics regex"),
            )
    }

    fn semantic_validator(&self) -> Option<&dyn SemanticValidator> {
        Some(&self.topic_selection)
    }
}

/// A sink consumes either an explicit topic list or a topic pattern, never both.
#[derive(Debug, Default)]
struct TopicSelectionValidator;

impl SemanticValidator for TopicSelectionValidator {
    fn validate(&self, raw: &RawConfig) -> Result<KeyMessages, PluginFault> {
        let is_set = |key: &str| raw.get(key).is_some_and(|v| !v.trim().is_empty());

        let messages = match (is_set(TOPICS_CONFIG), is_set(TOPICS_REGEX_CONFIG)) {
            (true, true) => {
                let msg = format!(
                    "{TOPICS_CONFIG} and {TOPICS_REGEX_CONFIG} are mutually exclusive options, but both are set."
                );
                vec![
                    (TOPICS_CONFIG.to_string(), vec![msg.clone()]),
                    (TOPICS_REGEX_CONFIG.to_string(), vec![msg]),
                ]
            }
            (false, false) => vec![(
                TOPICS_CONFIG.to_string(),
                vec![format!(
                    "Must configure one of {TOPICS_CONFIG} or {TOPICS_REGEX_CONFIG}"
                )],
            )],
            _ => Vec::new(),
        };
        Ok(messages)
    }
}

/// Connector used by framework tests. Never listed.
#[derive(Debug)]
pub struct MockConnector {
    role: ConnectorRole,
}

impl MockConnector {
    pub fn source() -> Self {
        Self {
            role: ConnectorRole::Source,
        }
    }

    pub fn sink() -> Self {
        Self {
            role: ConnectorRole::Sink,
        }
    }
}

impl ConnectorPlugin for MockConnector {
    fn class_name(&self) -> &str {
        match self.role {
            ConnectorRole::Source => MOCK_SOURCE_CLASS,
            ConnectorRole::Sink => MOCK_SINK_CLASS,
        }
    }

    fn role(&self) -> Option<ConnectorRole> {
        Some(self.role)
    }

    fn version(&self) -> Result<String, PluginFault> {
        Ok(CONNECTOR_VERSION.to_string())
    }

    fn config_def(&self) -> ConfigDef {
        ConfigDef::new().define(
            ConfigKeyDefinition::new(
                MOCK_MODE_CONFIG,
                ConfigType::String,
                Importance::High,
                "How the mock connector misbehaves.",
            )
            .with_default("none")
            .with_constraint(Constraint::OneOf(vec![
                "none".to_string(),
                "task-failure".to_string(),
                "connector-failure".to_string(),
            ])),
        )
    }
}

pub fn file_stream_source() -> Arc<dyn ConnectorPlugin> {
    Arc::new(FileStreamSourceConnector)
}

pub fn file_stream_sink() -> Arc<dyn ConnectorPlugin> {
    Arc::new(FileStreamSinkConnector::default())
}

/// Returns a catalog holding every built-in connector.
pub fn builtin_catalog(options: CatalogOptions) -> Result<PluginCatalog, TributaryError> {
    let mut catalog = PluginCatalog::with_options(options);
    catalog.register(file_stream_source())?;
    catalog.register(file_stream_sink())?;
    catalog.register_unlisted(Arc::new(MockConnector::source()))?;
    catalog.register_unlisted(Arc::new(MockConnector::sink()))?;
    Ok(catalog)
}
