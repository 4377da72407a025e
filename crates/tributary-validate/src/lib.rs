// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Connector configuration validation for Tributary.
//!
//! [`ConnectorValidator`] is the pipeline a transport drives: resolve the
//! identifier against a catalog snapshot, merge the framework base schema with
//! the plugin's schema, and run [`validate_config`] to build a
//! [`ValidationReport`]. Bad values never fail the call; they are collected
//! per key in the report.

pub mod engine;
pub mod pipeline;
pub mod report;

pub use engine::validate_config;
pub use pipeline::ConnectorValidator;
pub use report::{ConfigInfo, ConfigKeyInfo, ConfigValueInfo, ValidationReport};
