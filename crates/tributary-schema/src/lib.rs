// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration schema model for Tributary connectors.
//!
//! A connector plugin declares its keys as a [`ConfigDef`]. Each
//! [`ConfigKeyDefinition`] carries a type, default, display metadata, optional
//! [`Constraint`]s and an optional [`Recommender`]. The framework's own keys
//! live in [`base::base_config_def`], and [`merge`] combines the two into the
//! [`MergedSchema`] that validation walks.

pub mod base;
pub mod constraint;
pub mod error;
pub mod key;
pub mod recommender;
pub mod schema;
pub mod value;

pub use base::base_config_def;
pub use constraint::Constraint;
pub use error::SchemaError;
pub use key::{ConfigDefault, ConfigKeyDefinition};
pub use recommender::{KeyMessages, ParsedValues, Recommender, SemanticValidator, StaticRecommender};
pub use schema::{merge, ConfigDef, MergedSchema};
pub use value::{ConfigValue, HIDDEN_VALUE};
