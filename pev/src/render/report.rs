// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Per-report header plus tree body

use super::format::{commaf, format_duration};
use super::tree::TreeRenderer;
use crate::plan::Explain;

/// Write the summary header of a derived report followed by its plan tree
pub fn write_explain(out: &mut String, renderer: &TreeRenderer, explain: &Explain) {
    let palette = renderer.palette();
    let scale = renderer.seconds_scale();

    out.push_str(&format!("○ Total Cost: {}\n", commaf(explain.total_cost)));
    out.push_str(&format!(
        "○ Planning Time: {}\n",
        palette.duration(&format_duration(explain.planning_time, scale))
    ));
    out.push_str(&format!(
        "○ Execution Time: {}\n",
        palette.duration(&format_duration(explain.execution_time, scale))
    ));
    out.push_str(&palette.prefix("┬"));
    out.push('\n');

    // The root closes its joint only when it has exactly one child.
    let last_child = explain.plan.plans.len() == 1;
    renderer.render_plan(out, explain, &explain.plan, "", 0, last_child);
}
