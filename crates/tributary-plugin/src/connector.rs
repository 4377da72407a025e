// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The trait every connector plugin implements.

use tributary_core::{ConnectorRole, PluginFault};
use tributary_schema::{ConfigDef, SemanticValidator};

/// A loaded connector implementation as seen by the catalog.
///
/// The catalog loader supplies these at startup; the engine never discovers
/// plugins itself.
pub trait ConnectorPlugin: Send + Sync + 'static {
    /// Fully-qualified, globally unique class name.
    fn class_name(&self) -> &str;

    /// Declared data-flow role, `None` for plugins that are neither source nor sink.
    fn role(&self) -> Option<ConnectorRole>;

    /// The plugin's own version string.
    fn version(&self) -> Result<String, PluginFault>;

    /// The plugin's configuration schema. Read once at registration.
    fn config_def(&self) -> ConfigDef;

    /// Optional plugin-specific checks run after schema validation.
    fn semantic_validator(&self) -> Option<&dyn SemanticValidator> {
        None
    }
}
