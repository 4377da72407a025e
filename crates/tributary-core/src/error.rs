// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Tributary connector validation engine.

use thiserror::Error;

/// The primary error type returned by catalog, resolution and pipeline operations.
///
/// Per-key schema failures are not represented here; they are data carried in
/// the validation report.
#[derive(Debug, Error)]
pub enum TributaryError {
    /// Engine configuration or catalog manifest errors.
    #[error("configuration error: {0}")]
    Config(String),

    /// The requested connector identifier could not be resolved.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// A plugin hook failed outside the isolation boundary of a single call.
    #[error(transparent)]
    PluginFault(#[from] PluginFault),

    /// Two plugins were registered under the same canonical name.
    #[error("duplicate connector plugin `{name}`")]
    DuplicatePlugin { name: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TributaryError {
    /// Classifies the error for the transport layer.
    ///
    /// Resolution failures are the caller's fault; everything else is ours.
    pub fn category(&self) -> ErrorCategory {
        match self {
            TributaryError::Resolution(_) => ErrorCategory::Client,
            _ => ErrorCategory::Server,
        }
    }
}

/// Coarse response category a transport maps an error onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The request named something that does not exist or is ambiguous.
    Client,
    /// The engine or a plugin failed.
    Server,
}

/// Failure to map a user-supplied identifier onto exactly one loaded plugin.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// No canonical name, simple name or alias equals the identifier.
    #[error("{}", format_not_found(.identifier, .suggestion.as_deref()))]
    NotFound {
        identifier: String,
        /// Closest known name, if any is similar enough to be worth showing.
        suggestion: Option<String>,
    },

    /// More than one plugin shares the identifier as simple name or alias.
    #[error(
        "connector plugin identifier `{identifier}` is ambiguous, it matches: {}",
        .candidates.join(", ")
    )]
    Ambiguous {
        identifier: String,
        /// Canonical names of every matching plugin, sorted.
        candidates: Vec<String>,
    },

    /// The submitted `connector.class` names a different plugin than the request.
    #[error("included connector class `{declared}` does not match requested connector `{requested}`")]
    Mismatch { requested: String, declared: String },
}

fn format_not_found(identifier: &str, suggestion: Option<&str>) -> String {
    match suggestion {
        Some(s) => format!("no connector plugin matches `{identifier}`, did you mean `{s}`?"),
        None => format!("no connector plugin matches `{identifier}`"),
    }
}

/// A plugin's own hook (version accessor or semantic validator) failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("plugin fault: {message}")]
pub struct PluginFault {
    pub message: String,
}

impl PluginFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
