// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-key validation failures.
//!
//! These never abort a validation run. The engine renders them with
//! `Display` into the `errors` list of the offending key's report entry.

use thiserror::Error;
use tributary_core::ConfigType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The raw string could not be coerced to the declared type.
    #[error("Invalid value {value} for configuration {key}: {detail}")]
    TypeMismatch {
        key: String,
        value: String,
        expected: ConfigType,
        detail: String,
    },

    /// The key has no default and the caller supplied no value.
    #[error("Missing required configuration \"{key}\" which has no default value.")]
    MissingRequired { key: String },

    /// The value parsed but violates a constraint or recommendation.
    #[error("Invalid value {value} for configuration {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}
