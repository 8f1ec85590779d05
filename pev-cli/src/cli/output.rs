// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Report formatting for CLI output

use super::commands::OutputFormat;
use pev::{Explain, Visualizer};

/// Report formatter for the supported output formats
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format derived reports in the requested format
    pub fn format(
        visualizer: &Visualizer,
        explains: &[Explain],
        format: OutputFormat,
    ) -> pev::Result<String> {
        match format {
            OutputFormat::Tree => Ok(visualizer.render_tree(explains)),
            OutputFormat::Table => Ok(visualizer.render_table(explains)),
            OutputFormat::Json => {
                let mut json = visualizer.render_json(explains)?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}
