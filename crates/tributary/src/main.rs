// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tributary - connector plugin resolution and configuration validation.
//!
//! Exit codes: 0 when the command succeeded and the report is clean, 1 when
//! the report carries errors or the engine failed, 2 when the request named
//! an unknown or ambiguous connector.

mod catalog;
mod properties;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tributary_config::{OutputFormat, TributaryConfig};
use tributary_core::{ErrorCategory, TributaryError};
use tributary_plugin::CatalogHandle;
use tributary_validate::ConnectorValidator;

/// Tributary - resolve connector plugins and validate their configuration.
#[derive(Parser, Debug)]
#[command(name = "tributary", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the available connector plugins.
    Plugins {
        /// Output format. Defaults to `output.format` from the configuration.
        #[arg(long)]
        format: Option<OutputFormat>,
    },
    /// Validate a connector configuration.
    Validate {
        /// Canonical class name, simple name or alias of the connector.
        identifier: String,
        /// `.properties` file holding the connector configuration.
        #[arg(long)]
        file: Option<PathBuf>,
        /// Set or override a single key.
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = properties::parse_assignment)]
        set: Vec<(String, String)>,
        #[arg(long)]
        format: Option<OutputFormat>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => tributary_config::load_and_validate_path(path),
        None => tributary_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            tributary_config::render_errors(&errors);
            return ExitCode::from(1);
        }
    };

    init_tracing(&config.engine.log_level);

    match run(cli.command, &config) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}: {err}", "error".red());
            match err.category() {
                ErrorCategory::Client => ExitCode::from(2),
                ErrorCategory::Server => ExitCode::from(1),
            }
        }
    }
}

fn run(command: Commands, config: &TributaryConfig) -> Result<ExitCode, TributaryError> {
    let catalog = catalog::build_catalog(&config.catalog)?;
    let validator = ConnectorValidator::new(Arc::new(CatalogHandle::new(catalog)));

    match command {
        Commands::Plugins { format } => {
            let listing = validator.list();
            match format.unwrap_or(config.output.format) {
                OutputFormat::Json => println!("{}", to_json(&listing)?),
                OutputFormat::Text => print!("{}", render::listing_text(&listing)),
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate {
            identifier,
            file,
            set,
            format,
        } => {
            let mut raw = match file {
                Some(path) => properties::load_properties(&path)?,
                None => Default::default(),
            };
            raw.extend(set);

            let report = validator.validate(&identifier, &raw)?;
            match format.unwrap_or(config.output.format) {
                OutputFormat::Json => println!("{}", to_json(&report)?),
                OutputFormat::Text => {
                    let use_color = std::io::stdout().is_terminal();
                    print!("{}", render::report_text(&report, use_color));
                }
            }

            Ok(if report.has_errors() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, TributaryError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| TributaryError::Internal(format!("failed to serialize output: {e}")))
}

/// Logs go to stderr so JSON on stdout stays parseable. `RUST_LOG` overrides
/// the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tributary={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn validate_collects_repeated_overrides() {
        let cli = Cli::try_parse_from([
            "tributary",
            "validate",
            "FileStreamSink",
            "--set",
            "name=sink",
            "--set",
            "topics=a,b",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Validate {
                identifier,
                set,
                format,
                ..
            } => {
                assert_eq!(identifier, "FileStreamSink");
                assert_eq!(set.len(), 2);
                assert_eq!(set[1], ("topics".to_string(), "a,b".to_string()));
                assert_eq!(format, Some(OutputFormat::Json));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn malformed_override_is_rejected() {
        assert!(Cli::try_parse_from(["tributary", "validate", "X", "--set", "novalue"]).is_err());
    }

    #[test]
    fn unresolvable_identifier_is_a_client_error() {
        let err = run(
            Commands::Validate {
                identifier: "NoSuchConnector".into(),
                file: None,
                set: Vec::new(),
                format: Some(OutputFormat::Json),
            },
            &TributaryConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Client);
    }
}
