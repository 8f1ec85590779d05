// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Metric derivation over a decoded plan tree
//!
//! PostgreSQL reports cost and time inclusively: a node's figures cover its
//! whole subtree. This module turns them into exclusive figures, rates the
//! planner's row estimate and tags the nodes that dominate the tree.
//!
//! Derivation runs as two walks per report:
//!
//! 1. A pre-order walk computing, for every node, the estimate accuracy, the
//!    exclusive cost and duration, and folding them into the report's running
//!    total and maxima. Each node only reads its children's *raw* inclusive
//!    figures, so visiting the parent first is safe.
//! 2. An outlier walk comparing every node against the maxima gathered by the
//!    first walk. It must not start before the first walk has finished.

use crate::plan::{EstimateDirection, Explain, NodeType, Plan};

/// Running aggregates collected while walking one tree
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Aggregates {
    total_cost: f64,
    max_rows: u64,
    max_cost: f64,
    max_duration: f64,
}

/// Derive exclusive metrics, estimate accuracy and outlier flags in place
///
/// Aggregates on the report are reset first, so running this twice on the
/// same report leaves it unchanged.
pub fn derive_metrics(explain: &mut Explain) {
    let mut aggregates = Aggregates::default();
    derive_plan(&mut aggregates, &mut explain.plan);

    explain.total_cost = aggregates.total_cost;
    explain.max_rows = aggregates.max_rows;
    explain.max_cost = aggregates.max_cost;
    explain.max_duration = aggregates.max_duration;

    tag_outliers(&aggregates, &mut explain.plan);

    log::debug!(
        "Derived {} plan nodes: total cost {}, max rows {}, max cost {}, max duration {} ms",
        explain.node_count(),
        explain.total_cost,
        explain.max_rows,
        explain.max_cost,
        explain.max_duration
    );
}

fn derive_plan(aggregates: &mut Aggregates, plan: &mut Plan) {
    estimate_accuracy(plan);
    exclusive_actuals(aggregates, plan);
    track_maximums(aggregates, plan);

    log::trace!(
        "{}: exclusive cost {}, exclusive duration {} ms, estimate {} {}x",
        plan.node_type,
        plan.actual_cost,
        plan.actual_duration,
        plan.estimate_direction,
        plan.estimate_factor
    );

    for child in plan.plans.iter_mut() {
        derive_plan(aggregates, child);
    }
}

/// Rate the planner's row estimate as a factor >= 1 plus a direction
///
/// A factor of 0 means there is no usable estimate (no planned rows, or no
/// actual rows to compare an overestimate against).
fn estimate_accuracy(plan: &mut Plan) {
    plan.estimate_factor = 0.0;
    plan.estimate_direction = EstimateDirection::Under;

    if plan.plan_rows != 0 {
        plan.estimate_factor = plan.actual_rows as f64 / plan.plan_rows as f64;
    }

    if plan.estimate_factor < 1.0 {
        plan.estimate_factor = 0.0;
        plan.estimate_direction = EstimateDirection::Over;
        if plan.actual_rows != 0 {
            plan.estimate_factor = plan.plan_rows as f64 / plan.actual_rows as f64;
        }
    }
}

/// Subtract the children's inclusive figures to get the node's own share
///
/// CTE scans are skipped: the CTE body is materialized elsewhere in the
/// tree and already accounted for there.
fn exclusive_actuals(aggregates: &mut Aggregates, plan: &mut Plan) {
    plan.actual_duration = plan.actual_total_time;
    plan.actual_cost = plan.total_cost;

    for child in plan.plans.iter().filter(|c| c.node_type != NodeType::CteScan) {
        plan.actual_duration -= child.actual_total_time;
        plan.actual_cost -= child.total_cost;
    }

    // Timing of looped children can exceed the parent's own total.
    if plan.actual_cost < 0.0 {
        plan.actual_cost = 0.0;
    }
    if plan.actual_duration < 0.0 {
        plan.actual_duration = 0.0;
    }

    aggregates.total_cost += plan.actual_cost;

    plan.actual_duration *= plan.actual_loops as f64;
}

fn track_maximums(aggregates: &mut Aggregates, plan: &Plan) {
    if aggregates.max_rows < plan.actual_rows {
        aggregates.max_rows = plan.actual_rows;
    }
    if aggregates.max_cost < plan.actual_cost {
        aggregates.max_cost = plan.actual_cost;
    }
    if aggregates.max_duration < plan.actual_duration {
        aggregates.max_duration = plan.actual_duration;
    }
}

/// Flag every node tied with a tree-wide maximum
///
/// Exact float comparison: each maximum is one of the nodes' own values.
fn tag_outliers(aggregates: &Aggregates, plan: &mut Plan) {
    plan.costliest = plan.actual_cost == aggregates.max_cost;
    plan.largest = plan.actual_rows == aggregates.max_rows;
    plan.slowest = plan.actual_duration == aggregates.max_duration;

    for child in plan.plans.iter_mut() {
        tag_outliers(aggregates, child);
    }
}
