// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Operator configuration for the Tributary engine.
//!
//! TOML files from the standard hierarchy plus `TRIBUTARY_*` environment
//! overrides, strict key checking, and miette diagnostics with typo
//! suggestions when something is wrong.
//!
//! ```no_run
//! let config = tributary_config::load_and_validate().expect("config errors");
//! println!("log level: {}", config.engine.log_level);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

use tracing::debug;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{CatalogConfig, EngineConfig, OutputConfig, OutputFormat, TributaryConfig};

/// Load the standard hierarchy and validate the result.
pub fn load_and_validate() -> Result<TributaryConfig, Vec<ConfigError>> {
    let sources: Vec<diagnostic::SourceFile> = loader::config_file_paths()
        .iter()
        .filter_map(|path| read_source(path))
        .collect();
    finish(loader::load_config(), &sources)
}

/// Load one explicit file (plus environment) and validate the result.
pub fn load_and_validate_path(path: &Path) -> Result<TributaryConfig, Vec<ConfigError>> {
    if !path.exists() {
        return Err(vec![ConfigError::Other(format!(
            "config file {} does not exist",
            path.display()
        ))]);
    }
    let sources: Vec<_> = read_source(path).into_iter().collect();
    finish(loader::load_config_from_path(path), &sources)
}

pub fn load_and_validate_str(toml_content: &str) -> Result<TributaryConfig, Vec<ConfigError>> {
    let sources = [("<inline>".to_string(), toml_content.to_string())];
    finish(loader::load_config_from_str(toml_content), &sources)
}

fn finish(
    loaded: Result<TributaryConfig, figment::Error>,
    sources: &[diagnostic::SourceFile],
) -> Result<TributaryConfig, Vec<ConfigError>> {
    let config = loaded.map_err(|err| diagnostic::figment_to_config_errors(err, sources))?;
    validation::validate_config(&config)?;
    debug!(files = sources.len(), "configuration loaded");
    Ok(config)
}

/// Contents of a config file keyed by the path figment reports for it.
fn read_source(path: &Path) -> Option<diagnostic::SourceFile> {
    let content = std::fs::read_to_string(path).ok()?;
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    Some((absolute.display().to_string(), content))
}
