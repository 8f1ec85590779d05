// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Box-drawn tree rendering of a derived plan
//!
//! Every node becomes a block of lines hanging off a rail of box-drawing
//! glyphs. The rail is threaded through the recursion as a prefix string;
//! nodes never know their parent.

use super::format::{comma, commaf, format_duration, percent_of, word_wrap};
use super::style::Palette;
use crate::options::{RenderOptions, SecondsScale};
use crate::plan::{Explain, Plan};

/// Renders one node block and, recursively, its children
#[derive(Debug, Clone)]
pub struct TreeRenderer {
    palette: Palette,
    wrap_width: usize,
    seconds_scale: SecondsScale,
}

impl TreeRenderer {
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            palette: Palette::new(options.color),
            wrap_width: options.wrap_width,
            seconds_scale: options.seconds_scale,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn seconds_scale(&self) -> SecondsScale {
        self.seconds_scale
    }

    /// Write the block for `plan` and all of its descendants
    ///
    /// `prefix` is the rail drawn by the ancestors. A node that branches, or
    /// is the last of its siblings, closes its joint and indents its children
    /// with blanks; otherwise the rail continues below it.
    pub fn render_plan(
        &self,
        out: &mut String,
        explain: &Explain,
        plan: &Plan,
        prefix: &str,
        depth: usize,
        last_child: bool,
    ) {
        log::trace!("Rendering {} at depth {}", plan.node_type, depth);

        let closes = plan.plans.len() > 1 || last_child;

        self.line(out, prefix, &self.palette.prefix("│"));

        let joint = if closes { "└" } else { "├" };
        self.line(
            out,
            prefix,
            &format!(
                "{} {}{} {}",
                self.palette.prefix(&format!("{}─⌠", joint)),
                self.palette.bold(plan.node_type.as_str()),
                self.format_details(plan),
                self.format_tags(plan)
            ),
        );

        let prefix = format!("{}{}", prefix, if closes { "  " } else { "│ " });
        let body = format!("{}│ ", prefix);

        for line in word_wrap(plan.node_type.description(), self.wrap_width).split('\n') {
            self.line(out, &body, &self.palette.muted(line));
        }

        self.measurements(out, &body, explain, plan);
        self.detail_lines(out, &format!("{}  ", body), plan);
        self.output_lines(out, &prefix, plan);

        for (index, child) in plan.plans.iter().enumerate() {
            self.render_plan(
                out,
                explain,
                child,
                &prefix,
                depth + 1,
                index == plan.plans.len() - 1,
            );
        }
    }

    fn line(&self, out: &mut String, prefix: &str, content: &str) {
        out.push_str(&self.palette.prefix(prefix));
        out.push_str(content);
        out.push('\n');
    }

    fn measurements(&self, out: &mut String, prefix: &str, explain: &Explain, plan: &Plan) {
        let duration = format_duration(plan.actual_duration, self.seconds_scale);
        self.line(
            out,
            prefix,
            &format!(
                "○ Duration: {} ({:.0}%)",
                self.palette.duration(&duration),
                percent_of(plan.actual_duration, explain.execution_time)
            ),
        );
        self.line(
            out,
            prefix,
            &format!(
                "○ Cost: {} ({:.0}%)",
                commaf(plan.actual_cost),
                percent_of(plan.actual_cost, explain.total_cost)
            ),
        );
        self.line(
            out,
            prefix,
            &format!("○ Rows: {}", comma(plan.actual_rows as i64)),
        );
    }

    fn detail_lines(&self, out: &mut String, prefix: &str, plan: &Plan) {
        let muted = |text: &str| self.palette.muted(text);

        if !plan.join_type.is_empty() {
            self.line(out, prefix, &format!("{} {}", plan.join_type, muted("join")));
        }

        if !plan.relation_name.is_empty() {
            self.line(
                out,
                prefix,
                &format!("{} {}.{}", muted("on"), plan.schema, plan.relation_name),
            );
        }

        if !plan.index_name.is_empty() {
            self.line(out, prefix, &format!("{} {}", muted("using"), plan.index_name));
        }

        if !plan.index_condition.is_empty() {
            self.line(
                out,
                prefix,
                &format!("{} {}", muted("condition"), plan.index_condition),
            );
        }

        if !plan.filter.is_empty() {
            let removed = format!("[-{} rows]", comma(plan.rows_removed_by_filter as i64));
            self.line(
                out,
                prefix,
                &format!("{} {} {}", muted("filter"), plan.filter, muted(&removed)),
            );
        }

        if !plan.hash_condition.is_empty() {
            self.line(out, prefix, &format!("{} {}", muted("on"), plan.hash_condition));
        }

        if !plan.cte_name.is_empty() {
            self.line(out, prefix, &format!("CTE {}", plan.cte_name));
        }

        if plan.estimate_factor != 0.0 {
            self.line(
                out,
                prefix,
                &format!(
                    "{} {}estimated {} {:.2}x",
                    muted("rows"),
                    plan.estimate_direction,
                    muted("by"),
                    plan.estimate_factor
                ),
            );
        }
    }

    fn output_lines(&self, out: &mut String, prefix: &str, plan: &Plan) {
        if plan.output.is_empty() {
            return;
        }

        let columns = word_wrap(&plan.output.join(" + "), self.wrap_width);
        for (index, line) in columns.split('\n').enumerate() {
            self.line(
                out,
                prefix,
                &format!(
                    "{}{}",
                    self.palette.prefix(terminator(index, plan)),
                    self.palette.output(line)
                ),
            );
        }
    }

    /// Bracketed scan direction and strategy, if any
    fn format_details(&self, plan: &Plan) -> String {
        let details: Vec<&str> = [plan.scan_direction.as_str(), plan.strategy.as_str()]
            .into_iter()
            .filter(|detail| !detail.is_empty())
            .collect();

        if details.is_empty() {
            return String::new();
        }
        self.palette.muted(&format!(" [{}]", details.join(", ")))
    }

    fn format_tags(&self, plan: &Plan) -> String {
        let tags: Vec<String> = tag_names(plan)
            .into_iter()
            .map(|tag| self.palette.tag(&format!(" {} ", tag)))
            .collect();
        tags.join(" ")
    }
}

/// Badges earned by a node, in display order
pub fn tag_names(plan: &Plan) -> Vec<&'static str> {
    let mut tags = Vec::new();
    if plan.slowest {
        tags.push("slowest");
    }
    if plan.costliest {
        tags.push("costliest");
    }
    if plan.largest {
        tags.push("largest");
    }
    if plan.has_bad_estimate() {
        tags.push("bad estimate");
    }
    tags
}

/// Glyph leading an output line: the first line points at the node, later
/// lines continue the rail only when children follow
fn terminator(index: usize, plan: &Plan) -> &'static str {
    match (index, plan.is_leaf()) {
        (0, true) => "⌡► ",
        (0, false) => "├►  ",
        (_, true) => "   ",
        (_, false) => "│  ",
    }
}
