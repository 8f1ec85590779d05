//! Shared helpers for pev integration tests
//!
//! - fixtures: EXPLAIN JSON documents as PostgreSQL emits them
//! - random_tree: seeded plan trees for property checks

#![allow(dead_code)]

pub mod fixtures;

use pev::{Explain, NodeType, Plan};

const OPERATORS: [NodeType; 8] = [
    NodeType::SeqScan,
    NodeType::IndexScan,
    NodeType::HashJoin,
    NodeType::NestedLoop,
    NodeType::Sort,
    NodeType::Hash,
    NodeType::Aggregate,
    NodeType::CteScan,
];

/// Build a random plan tree, at most `max_depth` levels below the root
pub fn random_tree(rng: &mut fastrand::Rng, max_depth: usize) -> Plan {
    let mut plan = Plan::new(OPERATORS[rng.usize(..OPERATORS.len())].clone())
        .with_actuals(rng.u64(0..5000), rng.f64() * 500.0, rng.u64(0..4))
        .with_estimates(rng.u64(0..5000), rng.f64() * 10.0, rng.f64() * 1000.0);

    if max_depth > 0 {
        for _ in 0..rng.usize(0..4) {
            plan.plans.push(random_tree(rng, max_depth - 1));
        }
    }
    plan
}

/// A random report wrapped around [`random_tree`]
pub fn random_explain(seed: u64) -> Explain {
    let mut rng = fastrand::Rng::with_seed(seed);
    let plan = random_tree(&mut rng, 4);
    let execution_time = plan.actual_total_time;
    Explain::new(plan, rng.f64(), execution_time)
}

/// Chain of `length` nodes, each the only child of the previous one
pub fn chain(length: usize, rng: &mut fastrand::Rng) -> Plan {
    let mut plan = Plan::new(NodeType::SeqScan)
        .with_actuals(rng.u64(1..100), rng.f64() * 10.0, 1)
        .with_estimates(rng.u64(1..100), 0.0, rng.f64() * 10.0);

    for _ in 1..length {
        plan = Plan::new(NodeType::Sort)
            .with_actuals(rng.u64(1..100), rng.f64() * 20.0, 1)
            .with_estimates(rng.u64(1..100), 0.0, rng.f64() * 20.0)
            .with_child(plan);
    }
    plan
}

/// Decode a fixture and derive its metrics
pub fn derived(fixture: &str) -> Vec<Explain> {
    let mut explains = pev::decode(fixture.as_bytes()).expect("Fixture should decode");
    pev::Visualizer::default().process(&mut explains);
    explains
}
