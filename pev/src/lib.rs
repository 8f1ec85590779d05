// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! pev - PostgreSQL EXPLAIN visualizer
//!
//! pev reads the JSON output of `EXPLAIN (ANALYZE, FORMAT JSON)`, derives the
//! metrics PostgreSQL does not report directly and renders the plan as an
//! annotated tree for the terminal.
//!
//! # Features
//!
//! - **Exclusive metrics**: per-node cost and duration with the children's
//!   share removed, durations scaled by loop count
//! - **Estimate accuracy**: how far, and in which direction, the planner's
//!   row estimate missed
//! - **Outliers**: the slowest, costliest and largest nodes of each plan
//! - **Output formats**: box-drawn tree, flat table, derived JSON
//!
//! # Usage
//!
//! ```ignore
//! let buffer = std::fs::read("plan.json")?;
//! pev::visualize(&mut std::io::stdout(), &buffer)?;
//! ```

pub mod analyze;
pub mod error;
pub mod options;
pub mod plan;
pub mod render;
pub mod visualizer;

pub use analyze::derive_metrics;
pub use error::{PevError, Result};
pub use options::{RenderOptions, SecondsScale};
pub use plan::{EstimateDirection, Explain, NodeType, Plan};
pub use render::{Palette, TreeRenderer};
pub use visualizer::{decode, Visualizer};

/// pev version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decode, derive and render a batch of reports with default options
pub fn visualize<W: std::io::Write>(writer: &mut W, buffer: &[u8]) -> Result<()> {
    Visualizer::default().visualize(writer, buffer)
}
