// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Output formats for derived reports
//!
//! The annotated tree ([`tree`] and [`report`]) is the primary output; the
//! flat [`table`] and [`json`] formats present the same derived metrics.

pub mod format;
pub mod json;
pub mod report;
pub mod style;
pub mod table;
pub mod tree;

pub use format::{DurationTier, FormattedDuration};
pub use json::format_json;
pub use report::write_explain;
pub use style::{Palette, Style};
pub use table::format_table;
pub use tree::TreeRenderer;
