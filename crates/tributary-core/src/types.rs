// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the schema, plugin and validation crates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Configuration as submitted by a caller: flat string keys to string values.
///
/// Ordered so that anything derived from it (hook input, reports) is
/// deterministic across calls.
pub type RawConfig = BTreeMap<String, String>;

/// Data-flow role a connector plugin declares for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorRole {
    /// Pulls records from an external system into the cluster.
    Source,
    /// Pushes records from the cluster into an external system.
    Sink,
}

/// Kind reported for a plugin in catalog listings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PluginKind {
    Source,
    Sink,
    Unknown,
}

impl From<Option<ConnectorRole>> for PluginKind {
    fn from(role: Option<ConnectorRole>) -> Self {
        match role {
            Some(ConnectorRole::Source) => PluginKind::Source,
            Some(ConnectorRole::Sink) => PluginKind::Sink,
            None => PluginKind::Unknown,
        }
    }
}

/// Closed set of value types a configuration key may declare.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum ConfigType {
    Boolean,
    String,
    Int,
    Long,
    Double,
    List,
    Class,
    Password,
}

/// How much an operator should care about a key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Importance {
    High,
    Medium,
    Low,
}

/// Display width hint for UIs rendering a key's value.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Width {
    #[default]
    None,
    Short,
    Medium,
    Long,
}
