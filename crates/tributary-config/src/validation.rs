// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Checks serde cannot express. All problems are collected before returning.

use crate::diagnostic::ConfigError;
use crate::model::TributaryConfig;

pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

pub fn validate_config(config: &TributaryConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.engine.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::validation(format!(
            "engine.log_level `{}` is not one of {}",
            config.engine.log_level,
            LOG_LEVELS.join(", ")
        )));
    }

    if let Some(path) = &config.catalog.manifest_path {
        if path.trim().is_empty() {
            errors.push(ConfigError::validation(
                "catalog.manifest_path must not be empty when set",
            ));
        }
    }

    for (i, suffix) in config.catalog.alias_suffixes.iter().enumerate() {
        if suffix.trim().is_empty() {
            errors.push(ConfigError::validation(format!(
                "catalog.alias_suffixes[{i}] must not be empty"
            )));
        }
    }

    for (i, name) in config.catalog.unlisted.iter().enumerate() {
        if name.trim().is_empty() {
            errors.push(ConfigError::validation(format!(
                "catalog.unlisted[{i}] must not be empty"
            )));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
