// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Explain report and plan node types

use super::node_type::NodeType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction in which the planner missed the actual row count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EstimateDirection {
    /// Planner expected more rows than were produced
    Over,
    /// Planner expected fewer rows than were produced
    #[default]
    Under,
}

impl fmt::Display for EstimateDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateDirection::Over => f.write_str("Over"),
            EstimateDirection::Under => f.write_str("Under"),
        }
    }
}

/// One query-plan report
///
/// The aggregate fields are only meaningful after
/// [`derive_metrics`](crate::analyze::derive_metrics) has run over the tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Explain {
    #[serde(rename = "Plan", default)]
    pub plan: Plan,
    #[serde(rename = "Planning Time", default)]
    pub planning_time: f64,
    #[serde(rename = "Triggers", default)]
    pub triggers: Vec<serde_json::Value>,
    #[serde(rename = "Execution Time", default)]
    pub execution_time: f64,

    /// Sum of every node's exclusive cost
    #[serde(skip_deserializing)]
    pub total_cost: f64,
    #[serde(skip_deserializing)]
    pub max_rows: u64,
    #[serde(skip_deserializing)]
    pub max_cost: f64,
    #[serde(skip_deserializing)]
    pub max_duration: f64,
}

impl Explain {
    /// Wrap a root node with the reported planning and execution times
    pub fn new(plan: Plan, planning_time: f64, execution_time: f64) -> Self {
        Self {
            plan,
            planning_time,
            execution_time,
            ..Default::default()
        }
    }

    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        self.plan.node_count()
    }
}

/// One operator node
///
/// Cost and time fields as decoded are inclusive of the node's children.
/// The `actual_cost`/`actual_duration` pair holds the exclusive figures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    #[serde(rename = "Node Type")]
    pub node_type: NodeType,
    #[serde(rename = "Parent Relationship", skip_serializing_if = "String::is_empty")]
    pub parent_relationship: String,

    #[serde(rename = "Actual Loops")]
    pub actual_loops: u64,
    #[serde(rename = "Actual Rows")]
    pub actual_rows: u64,
    #[serde(rename = "Actual Startup Time")]
    pub actual_startup_time: f64,
    #[serde(rename = "Actual Total Time")]
    pub actual_total_time: f64,
    #[serde(rename = "Startup Cost")]
    pub startup_cost: f64,
    #[serde(rename = "Total Cost")]
    pub total_cost: f64,
    #[serde(rename = "Plan Rows")]
    pub plan_rows: u64,
    #[serde(rename = "Plan Width")]
    pub plan_width: u64,

    #[serde(rename = "Join Type", skip_serializing_if = "String::is_empty")]
    pub join_type: String,
    #[serde(rename = "Relation Name", skip_serializing_if = "String::is_empty")]
    pub relation_name: String,
    #[serde(rename = "Schema", skip_serializing_if = "String::is_empty")]
    pub schema: String,
    #[serde(rename = "Alias", skip_serializing_if = "String::is_empty")]
    pub alias: String,
    #[serde(rename = "Index Name", skip_serializing_if = "String::is_empty")]
    pub index_name: String,
    #[serde(rename = "Index Cond", skip_serializing_if = "String::is_empty")]
    pub index_condition: String,
    #[serde(rename = "Hash Cond", skip_serializing_if = "String::is_empty")]
    pub hash_condition: String,
    #[serde(rename = "Filter", skip_serializing_if = "String::is_empty")]
    pub filter: String,
    #[serde(rename = "Rows Removed by Filter")]
    pub rows_removed_by_filter: u64,
    #[serde(rename = "Rows Removed by Index Recheck")]
    pub rows_removed_by_index_recheck: u64,
    #[serde(rename = "CTE Name", skip_serializing_if = "String::is_empty")]
    pub cte_name: String,
    #[serde(rename = "Scan Direction", skip_serializing_if = "String::is_empty")]
    pub scan_direction: String,
    #[serde(rename = "Strategy", skip_serializing_if = "String::is_empty")]
    pub strategy: String,
    #[serde(rename = "Group Key", skip_serializing_if = "Vec::is_empty")]
    pub group_key: Vec<String>,
    #[serde(rename = "Output", skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<String>,
    #[serde(rename = "Heap Fetches")]
    pub heap_fetches: u64,

    #[serde(rename = "I/O Read Time")]
    pub io_read_time: f64,
    #[serde(rename = "I/O Write Time")]
    pub io_write_time: f64,
    #[serde(rename = "Shared Hit Blocks")]
    pub shared_hit_blocks: u64,
    #[serde(rename = "Shared Read Blocks")]
    pub shared_read_blocks: u64,
    #[serde(rename = "Shared Dirtied Blocks")]
    pub shared_dirtied_blocks: u64,
    #[serde(rename = "Shared Written Blocks")]
    pub shared_written_blocks: u64,
    #[serde(rename = "Local Hit Blocks")]
    pub local_hit_blocks: u64,
    #[serde(rename = "Local Read Blocks")]
    pub local_read_blocks: u64,
    #[serde(rename = "Local Dirtied Blocks")]
    pub local_dirtied_blocks: u64,
    #[serde(rename = "Local Written Blocks")]
    pub local_written_blocks: u64,
    #[serde(rename = "Temp Read Blocks")]
    pub temp_read_blocks: u64,
    #[serde(rename = "Temp Written Blocks")]
    pub temp_written_blocks: u64,

    #[serde(rename = "Plans", skip_serializing_if = "Vec::is_empty")]
    pub plans: Vec<Plan>,

    // Derived by crate::analyze
    #[serde(skip_deserializing)]
    pub actual_cost: f64,
    #[serde(skip_deserializing)]
    pub actual_duration: f64,
    #[serde(skip_deserializing)]
    pub estimate_factor: f64,
    #[serde(skip_deserializing)]
    pub estimate_direction: EstimateDirection,
    #[serde(skip_deserializing)]
    pub costliest: bool,
    #[serde(skip_deserializing)]
    pub slowest: bool,
    #[serde(skip_deserializing)]
    pub largest: bool,
}

impl Plan {
    /// Create a node with the given operator kind and zeroed counters
    pub fn new(node_type: impl Into<NodeType>) -> Self {
        Self {
            node_type: node_type.into(),
            ..Default::default()
        }
    }

    /// Set the inclusive runtime measurements
    pub fn with_actuals(mut self, rows: u64, total_time: f64, loops: u64) -> Self {
        self.actual_rows = rows;
        self.actual_total_time = total_time;
        self.actual_loops = loops;
        self
    }

    /// Set the planner estimates
    pub fn with_estimates(mut self, plan_rows: u64, startup_cost: f64, total_cost: f64) -> Self {
        self.plan_rows = plan_rows;
        self.startup_cost = startup_cost;
        self.total_cost = total_cost;
        self
    }

    pub fn with_child(mut self, child: Plan) -> Self {
        self.plans.push(child);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.plans.is_empty()
    }

    /// Number of nodes in this subtree, including the node itself
    pub fn node_count(&self) -> usize {
        1 + self.plans.iter().map(Plan::node_count).sum::<usize>()
    }

    /// Whether the planner row estimate is off by two orders of magnitude
    pub fn has_bad_estimate(&self) -> bool {
        self.estimate_factor >= 100.0
    }

    /// Pre-order iterator over this subtree
    pub fn iter(&self) -> PlanIter<'_> {
        PlanIter { stack: vec![(self, 0)] }
    }
}

/// Pre-order traversal yielding each node with its depth
pub struct PlanIter<'a> {
    stack: Vec<(&'a Plan, usize)>,
}

impl<'a> Iterator for PlanIter<'a> {
    type Item = (&'a Plan, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (plan, depth) = self.stack.pop()?;
        for child in plan.plans.iter().rev() {
            self.stack.push((child, depth + 1));
        }
        Some((plan, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Plan": {
            "Node Type": "Hash Join",
            "Join Type": "Inner",
            "Startup Cost": 1.5,
            "Total Cost": 20.0,
            "Plan Rows": 10,
            "Actual Rows": 12,
            "Actual Loops": 1,
            "Actual Total Time": 4.25,
            "Hash Cond": "(a.id = b.a_id)",
            "Plans": [
                {"Node Type": "Seq Scan", "Relation Name": "a", "Schema": "public", "Total Cost": 5.0},
                {"Node Type": "Materialize", "Total Cost": 7.0}
            ]
        },
        "Planning Time": 0.12,
        "Triggers": [],
        "Execution Time": 4.5
    }"#;

    #[test]
    fn test_decode_postgres_report() {
        let explain: Explain = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(explain.plan.node_type, NodeType::HashJoin);
        assert_eq!(explain.plan.join_type, "Inner");
        assert_eq!(explain.plan.hash_condition, "(a.id = b.a_id)");
        assert_eq!(explain.plan.plans.len(), 2);
        assert_eq!(explain.plan.plans[0].schema, "public");
        assert_eq!(
            explain.plan.plans[1].node_type,
            NodeType::Other("Materialize".to_string())
        );
        assert_eq!(explain.execution_time, 4.5);
    }

    #[test]
    fn test_absent_fields_default_to_zero() {
        let explain: Explain = serde_json::from_str(SAMPLE).unwrap();
        let leaf = &explain.plan.plans[0];
        assert_eq!(leaf.actual_rows, 0);
        assert_eq!(leaf.actual_loops, 0);
        assert!(leaf.filter.is_empty());
        assert!(leaf.output.is_empty());
        assert!(leaf.is_leaf());
        assert_eq!(leaf.actual_cost, 0.0);
        assert!(!leaf.costliest);
    }

    #[test]
    fn test_derived_fields_are_not_decoded() {
        let json = r#"{"Plan": {"Node Type": "Limit", "actual_cost": 99.0, "costliest": true}}"#;
        let explain: Explain = serde_json::from_str(json).unwrap();
        assert_eq!(explain.plan.actual_cost, 0.0);
        assert!(!explain.plan.costliest);
    }

    #[test]
    fn test_pre_order_iteration() {
        let plan = Plan::new("Limit").with_child(
            Plan::new("Hash Join")
                .with_child(Plan::new("Seq Scan"))
                .with_child(Plan::new("Hash").with_child(Plan::new("Index Scan"))),
        );

        let visited: Vec<(String, usize)> = plan
            .iter()
            .map(|(node, depth)| (node.node_type.to_string(), depth))
            .collect();

        assert_eq!(plan.node_count(), 5);
        assert_eq!(
            visited,
            vec![
                ("Limit".to_string(), 0),
                ("Hash Join".to_string(), 1),
                ("Seq Scan".to_string(), 2),
                ("Hash".to_string(), 2),
                ("Index Scan".to_string(), 3),
            ]
        );
    }
}
