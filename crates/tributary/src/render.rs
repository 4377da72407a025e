// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Human-readable output for listings and validation reports.

use std::fmt::Write;

use colored::Colorize;
use tributary_plugin::PluginListingEntry;
use tributary_validate::ValidationReport;

pub fn listing_text(entries: &[PluginListingEntry]) -> String {
    let width = entries
        .iter()
        .map(|e| e.class.len())
        .max()
        .unwrap_or(0)
        .max("CLASS".len());

    let mut out = format!("{:<width$}  {:<7}  VERSION\n", "CLASS", "TYPE");
    for entry in entries {
        let _ = writeln!(
            out,
            "{:<width$}  {:<7}  {}",
            entry.class,
            entry.kind.to_string(),
            entry.version
        );
    }
    out
}

/// One line per key, errors indented beneath it, summary last.
pub fn report_text(report: &ValidationReport, use_color: bool) -> String {
    let paint = |text: &str, ok: bool| -> String {
        match (use_color, ok) {
            (false, _) => text.to_string(),
            (true, true) => text.green().to_string(),
            (true, false) => text.red().to_string(),
        }
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", report.name);

    for config in &report.configs {
        let ok = config.value.errors.is_empty();
        let symbol = paint(if ok { "✓" } else { "✗" }, ok);
        let value = config.value.value.as_deref().unwrap_or("(none)");
        let mut line = format!("  {symbol} {} = {value}", config.value.name);
        if !config.value.visible {
            line.push_str(" [hidden]");
        }
        if !config.value.recommended_values.is_empty() {
            let _ = write!(line, " (one of: {})", config.value.recommended_values.join(", "));
        }
        let _ = writeln!(out, "{line}");
        for error in &config.value.errors {
            let _ = writeln!(out, "      {}", paint(error, false));
        }
    }

    let summary = match report.error_count {
        0 => "configuration is valid".to_string(),
        1 => "1 configuration key has errors".to_string(),
        n => format!("{n} configuration keys have errors"),
    };
    let _ = writeln!(out, "{}", paint(&summary, report.error_count == 0));
    out
}

#[cfg(test)]
mod tests {
    use tributary_core::PluginKind;
    use tributary_validate::{ConfigInfo, ConfigValueInfo};

    use super::*;

    #[test]
    fn listing_columns_align() {
        let text = listing_text(&[
            PluginListingEntry {
                class: "a.LongerClassName".into(),
                kind: PluginKind::Sink,
                version: "1".into(),
            },
            PluginListingEntry {
                class: "b.X".into(),
                kind: PluginKind::Unknown,
                version: "2".into(),
            },
        ]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "a.LongerClassName  sink     1");
        assert_eq!(lines[2], "b.X                unknown  2");
    }

    #[test]
    fn report_lists_errors_under_their_key() {
        let mut bad = ConfigValueInfo::empty("tasks.max");
        bad.value = Some("0".into());
        bad.errors = vec!["too small".into()];
        let mut hidden = ConfigValueInfo::empty("mode.detail");
        hidden.visible = false;

        let report = ValidationReport::new(
            "x.Y",
            vec![
                ConfigInfo {
                    definition: None,
                    value: bad,
                },
                ConfigInfo {
                    definition: None,
                    value: hidden,
                },
            ],
        );
        let text = report_text(&report, false);
        assert!(text.contains("  ✗ tasks.max = 0\n      too small\n"));
        assert!(text.contains("  ✓ mode.detail = (none) [hidden]\n"));
        assert!(text.ends_with("1 configuration key has errors\n"));
    }
}
