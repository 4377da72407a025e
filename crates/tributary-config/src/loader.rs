// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading with figment.
//!
//! Later layers override earlier ones:
//! 1. compiled defaults
//! 2. `/etc/tributary/tributary.toml`
//! 3. `$XDG_CONFIG_HOME/tributary/tributary.toml`
//! 4. `./tributary.toml`
//! 5. `TRIBUTARY_*` environment variables

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::TributaryConfig;

pub const SYSTEM_CONFIG_PATH: &str = "/etc/tributary/tributary.toml";
pub const LOCAL_CONFIG_PATH: &str = "tributary.toml";

/// `tributary/tributary.toml` under the user config directory, if there is one.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tributary").join("tributary.toml"))
}

/// Every file the standard hierarchy reads, lowest precedence first.
pub fn config_file_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SYSTEM_CONFIG_PATH)];
    paths.extend(user_config_path());
    paths.push(PathBuf::from(LOCAL_CONFIG_PATH));
    paths
}

/// The full figment for the standard hierarchy, before extraction.
pub fn build_figment() -> Figment {
    config_file_paths()
        .into_iter()
        .fold(defaults(), |figment, path| figment.merge(Toml::file(path)))
        .merge(env_provider())
}

pub fn load_config() -> Result<TributaryConfig, figment::Error> {
    build_figment().extract()
}

/// Defaults plus one explicit file plus environment overrides.
pub fn load_config_from_path(path: &Path) -> Result<TributaryConfig, figment::Error> {
    defaults()
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Defaults plus inline TOML. No files, no environment.
pub fn load_config_from_str(toml_content: &str) -> Result<TributaryConfig, figment::Error> {
    defaults().merge(Toml::string(toml_content)).extract()
}

fn defaults() -> Figment {
    Figment::new().merge(Serialized::defaults(TributaryConfig::default()))
}

/// `TRIBUTARY_<SECTION>_<KEY>` maps to `<section>.<key>`.
///
/// Only the first underscore after a known section becomes a dot, so
/// `TRIBUTARY_CATALOG_ALIAS_SUFFIXES` is `catalog.alias_suffixes`.
pub(crate) fn env_provider() -> Env {
    Env::prefixed("TRIBUTARY_").map(|key| map_env_key(key.as_str()).into())
}

/// Figment passes the key with the prefix stripped but its case intact.
pub(crate) fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in ["engine", "catalog", "output"] {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key
}
