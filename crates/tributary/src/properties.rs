// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Connector configurations from `.properties` files and `KEY=VALUE` overrides.

use std::path::Path;

use tributary_core::{RawConfig, TributaryError};

/// Parse `key=value` (or `key: value`) lines. Blank lines and lines starting
/// with `#` or `!` are skipped. A line with no separator is a key with an
/// empty value. Later duplicates win.
pub fn parse_properties(content: &str) -> RawConfig {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(['#', '!']))
        .map(|line| match line.find(['=', ':']) {
            Some(at) => (line[..at].trim_end().to_string(), line[at + 1..].trim_start().to_string()),
            None => (line.to_string(), String::new()),
        })
        .collect()
}

pub fn load_properties(path: &Path) -> Result<RawConfig, TributaryError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        TributaryError::Config(format!("cannot read properties file {}: {e}", path.display()))
    })?;
    Ok(parse_properties(&content))
}

/// Split a `--set KEY=VALUE` argument.
pub fn parse_assignment(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, _)) if key.trim().is_empty() => Err(format!("`{arg}` has an empty key")),
        Some((key, value)) => Ok((key.trim().to_string(), value.to_string())),
        None => Err(format!("`{arg}` is not of the form KEY=VALUE")),
    }
}
