// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static value constraints attached to key definitions.

use crate::error::SchemaError;
use crate::value::ConfigValue;

/// A check applied to every successfully parsed value of a key,
/// whether supplied by the caller or taken from the default.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Numeric value must be `>= min`.
    AtLeast(i64),
    /// Numeric value must lie in `min..=max`.
    Between(i64, i64),
    /// String value (or every list element) must be one of the given strings.
    OneOf(Vec<String>),
    /// String value must not be empty or whitespace.
    NonEmptyString,
}

impl Constraint {
    pub fn check(&self, key: &str, value: &ConfigValue) -> Result<(), SchemaError> {
        let invalid = |reason: String| SchemaError::InvalidValue {
            key: key.to_string(),
            value: value.render(),
            reason,
        };

        match self {
            Constraint::AtLeast(min) => match value.as_f64() {
                Some(n) if n < *min as f64 => Err(invalid(format!("Value must be at least {min}"))),
                _ => Ok(()),
            },
            Constraint::Between(min, max) => match value.as_f64() {
                Some(n) if n < *min as f64 => Err(invalid(format!("Value must be at least {min}"))),
                Some(n) if n > *max as f64 => {
                    Err(invalid(format!("Value must be no more than {max}")))
                }
                _ => Ok(()),
            },
            Constraint::OneOf(allowed) => {
                let ok = match value {
                    ConfigValue::String(s) => allowed.contains(s),
                    ConfigValue::List(items) => items.iter().all(|item| allowed.contains(item)),
                    _ => true,
                };
                if ok {
                    Ok(())
                } else {
                    Err(invalid(format!("String must be one of: {}", allowed.join(", "))))
                }
            }
            Constraint::NonEmptyString => match value {
                ConfigValue::String(s) if s.trim().is_empty() => {
                    Err(invalid("String must be non-empty".to_string()))
                }
                _ => Ok(()),
            },
        }
    }
}
