// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Decode, derive and render pipeline

use crate::analyze::derive_metrics;
use crate::error::{PevError, Result};
use crate::options::RenderOptions;
use crate::plan::Explain;
use crate::render::{format_json, format_table, write_explain, TreeRenderer};
use rayon::prelude::*;
use std::io::Write;

/// Decode a JSON array of explain reports
///
/// Fails as a whole when the buffer is not an array of report objects; no
/// report of a malformed batch is returned.
pub fn decode(buffer: &[u8]) -> Result<Vec<Explain>> {
    let explains: Vec<Explain> =
        serde_json::from_slice(buffer).map_err(PevError::MalformedInput)?;
    log::debug!("Decoded {} explain report(s)", explains.len());
    Ok(explains)
}

/// Runs reports through derivation and one of the output formats
#[derive(Debug, Clone, Default)]
pub struct Visualizer {
    options: RenderOptions,
}

impl Visualizer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Derive metrics for every report
    ///
    /// Reports share no state, so with `parallel` each one is derived as a
    /// separate rayon task. Within a report the walks stay sequential.
    pub fn process(&self, explains: &mut [Explain]) {
        if self.options.parallel {
            explains.par_iter_mut().for_each(derive_metrics);
        } else {
            explains.iter_mut().for_each(derive_metrics);
        }
    }

    /// Render derived reports as annotated trees, in input order
    pub fn render_tree(&self, explains: &[Explain]) -> String {
        let renderer = TreeRenderer::new(&self.options);
        let mut out = String::new();
        for explain in explains {
            write_explain(&mut out, &renderer, explain);
        }
        out
    }

    /// Render derived reports as flat tables
    pub fn render_table(&self, explains: &[Explain]) -> String {
        explains
            .iter()
            .map(|explain| format_table(explain, &self.options))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render derived reports as JSON
    pub fn render_json(&self, explains: &[Explain]) -> Result<String> {
        format_json(explains)
    }

    /// Decode `buffer`, derive every report and write the trees to `writer`
    pub fn visualize<W: Write>(&self, writer: &mut W, buffer: &[u8]) -> Result<()> {
        let mut explains = decode(buffer)?;
        self.process(&mut explains);
        writer.write_all(self.render_tree(&explains).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
