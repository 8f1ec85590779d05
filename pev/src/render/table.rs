// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Flat per-node table of derived metrics

use super::format::{comma, commaf, format_duration, percent_of};
use super::style::{Palette, Style};
use super::tree::tag_names;
use crate::options::RenderOptions;
use crate::plan::Explain;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};

/// Format a derived report as a table, one row per node in pre-order
pub fn format_table(explain: &Explain, options: &RenderOptions) -> String {
    let mut output = String::new();

    let palette = Palette::new(options.color);
    output.push_str(&palette.paint(Style::Title, "Query Plan"));
    output.push('\n');
    output.push_str(&format!(
        "Total cost: {} | Planning time: {} | Execution time: {}\n",
        commaf(explain.total_cost),
        format_duration(explain.planning_time, options.seconds_scale).text,
        format_duration(explain.execution_time, options.seconds_scale).text
    ));
    output.push_str(&format!("Nodes: {}\n\n", explain.node_count()));

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    if options.color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }

    let header: Vec<Cell> = ["Node", "Duration", "Cost", "Rows", "Estimate", "Tags"]
        .into_iter()
        .map(|name| Cell::new(name).fg(Color::Green))
        .collect();
    table.set_header(header);

    for (plan, depth) in explain.plan.iter() {
        let estimate = if plan.estimate_factor != 0.0 {
            format!("{} {:.2}x", plan.estimate_direction, plan.estimate_factor)
        } else {
            String::new()
        };

        table.add_row(vec![
            format!("{}{}", "  ".repeat(depth), plan.node_type),
            format!(
                "{} ({:.0}%)",
                format_duration(plan.actual_duration, options.seconds_scale).text,
                percent_of(plan.actual_duration, explain.execution_time)
            ),
            format!(
                "{} ({:.0}%)",
                commaf(plan.actual_cost),
                percent_of(plan.actual_cost, explain.total_cost)
            ),
            comma(plan.actual_rows as i64),
            estimate,
            tag_names(plan).join(", "),
        ]);
    }

    output.push_str(&table.to_string());
    output.push('\n');
    output
}
