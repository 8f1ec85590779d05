// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Plan data model
//!
//! In-memory representation of one decoded `EXPLAIN (FORMAT JSON)` report:
//! an [`Explain`] owning a tree of [`Plan`] nodes. Raw fields are filled by
//! decoding, derived fields by [`crate::analyze`].

pub mod node;
pub mod node_type;

pub use node::{EstimateDirection, Explain, Plan};
pub use node_type::NodeType;
