// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Tributary connector validation engine.
//!
//! This crate provides the error taxonomy and the small closed enums shared by
//! every other crate in the workspace: plugin kinds and roles, configuration
//! value types, importance tiers and display widths.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{ErrorCategory, PluginFault, ResolutionError, TributaryError};
pub use types::{ConfigType, ConnectorRole, Importance, PluginKind, RawConfig, Width};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_type_has_eight_variants() {
        use std::str::FromStr;

        let variants = [
            ConfigType::Boolean,
            ConfigType::String,
            ConfigType::Int,
            ConfigType::Long,
            ConfigType::Double,
            ConfigType::List,
            ConfigType::Class,
            ConfigType::Password,
        ];

        assert_eq!(variants.len(), 8, "ConfigType must have exactly 8 variants");

        for variant in &variants {
            let s = variant.to_string();
            let parsed = ConfigType::from_str(&s).expect("should parse back");
            assert_eq!(*variant, parsed);
        }
        assert_eq!(ConfigType::Int.to_string(), "INT");
        assert_eq!(ConfigType::List.to_string(), "LIST");
    }

    #[test]
    fn plugin_kind_serializes_lowercase() {
        let sink = serde_json::to_string(&PluginKind::Sink).expect("should serialize");
        let source = serde_json::to_string(&PluginKind::Source).expect("should serialize");
        let unknown = serde_json::to_string(&PluginKind::Unknown).expect("should serialize");
        assert_eq!(sink, "\"sink\"");
        assert_eq!(source, "\"source\"");
        assert_eq!(unknown, "\"unknown\"");

        let parsed: PluginKind = serde_json::from_str(&sink).expect("should deserialize");
        assert_eq!(parsed, PluginKind::Sink);
    }

    #[test]
    fn plugin_kind_from_role() {
        assert_eq!(PluginKind::from(Some(ConnectorRole::Source)), PluginKind::Source);
        assert_eq!(PluginKind::from(Some(ConnectorRole::Sink)), PluginKind::Sink);
        assert_eq!(PluginKind::from(None), PluginKind::Unknown);
    }

    #[test]
    fn importance_and_width_render_uppercase() {
        assert_eq!(Importance::Medium.to_string(), "MEDIUM");
        assert_eq!(Width::default().to_string(), "NONE");
        assert_eq!(Width::Long.to_string(), "LONG");
    }
}
