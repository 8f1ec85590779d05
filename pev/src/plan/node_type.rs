// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Operator kinds and their human-readable descriptions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operator kind of a plan node
///
/// Operators without a description keep their raw name in [`NodeType::Other`]
/// so that decoding never fails on an operator PostgreSQL adds later.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeType {
    Limit,
    Append,
    Sort,
    NestedLoop,
    MergeJoin,
    Hash,
    HashJoin,
    Aggregate,
    HashAggregate,
    SeqScan,
    IndexScan,
    IndexOnlyScan,
    BitmapHeapScan,
    BitmapIndexScan,
    CteScan,
    Other(String),
    #[default]
    Unknown,
}

impl NodeType {
    /// Name as it appears in the `Node Type` field
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Limit => "Limit",
            NodeType::Append => "Append",
            NodeType::Sort => "Sort",
            NodeType::NestedLoop => "Nested Loop",
            NodeType::MergeJoin => "Merge Join",
            NodeType::Hash => "Hash",
            NodeType::HashJoin => "Hash Join",
            NodeType::Aggregate => "Aggregate",
            NodeType::HashAggregate => "Hashaggregate",
            NodeType::SeqScan => "Seq Scan",
            NodeType::IndexScan => "Index Scan",
            NodeType::IndexOnlyScan => "Index Only Scan",
            NodeType::BitmapHeapScan => "Bitmap Heap Scan",
            NodeType::BitmapIndexScan => "Bitmap Index Scan",
            NodeType::CteScan => "CTE Scan",
            NodeType::Other(name) => name,
            NodeType::Unknown => "",
        }
    }

    /// What the operator does, empty for operators outside the table
    pub fn description(&self) -> &'static str {
        match self {
            NodeType::Append => {
                "Used in a UNION to merge multiple record sets by appending them together."
            }
            NodeType::Limit => "Returns a specified number of rows from a record set.",
            NodeType::Sort => "Sorts a record set based on the specified sort key.",
            NodeType::NestedLoop => {
                "Merges two record sets by looping through every record in the first set and \
                 trying to find a match in the second set. All matching records are returned."
            }
            NodeType::MergeJoin => "Merges two record sets by first sorting them on a join key.",
            NodeType::Hash => {
                "Generates a hash table from the records in the input recordset. Hash is used by \
                 Hash Join."
            }
            NodeType::HashJoin => {
                "Joins to record sets by hashing one of them (using a Hash Scan)."
            }
            NodeType::Aggregate => {
                "Groups records together based on a GROUP BY or aggregate function (e.g. sum())."
            }
            NodeType::HashAggregate => {
                "Groups records together based on a GROUP BY or aggregate function (e.g. sum()). \
                 Hash Aggregate uses a hash to first organize the records by a key."
            }
            NodeType::SeqScan => {
                "Finds relevant records by sequentially scanning the input record set. When \
                 reading from a table, Seq Scans (unlike Index Scans) perform a single read \
                 operation (only the table is read)."
            }
            NodeType::IndexScan => {
                "Finds relevant records based on an Index. Index Scans perform 2 read operations: \
                 one to read the index and another to read the actual value from the table."
            }
            NodeType::IndexOnlyScan => {
                "Finds relevant records based on an Index. Index Only Scans perform a single read \
                 operation from the index and do not read from the corresponding table."
            }
            NodeType::BitmapHeapScan => {
                "Searches through the pages returned by the Bitmap Index Scan for relevant rows."
            }
            NodeType::BitmapIndexScan => {
                "Uses a Bitmap Index (index which uses 1 bit per page) to find all relevant pages. \
                 Results of this node are fed to the Bitmap Heap Scan."
            }
            NodeType::CteScan => {
                "Performs a sequential scan of Common Table Expression (CTE) query results. Note \
                 that results of a CTE are materialized (calculated and temporarily stored)."
            }
            NodeType::Other(_) | NodeType::Unknown => "",
        }
    }
}

impl From<String> for NodeType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Limit" => NodeType::Limit,
            "Append" => NodeType::Append,
            "Sort" => NodeType::Sort,
            "Nested Loop" => NodeType::NestedLoop,
            "Merge Join" => NodeType::MergeJoin,
            "Hash" => NodeType::Hash,
            "Hash Join" => NodeType::HashJoin,
            "Aggregate" => NodeType::Aggregate,
            "Hashaggregate" => NodeType::HashAggregate,
            "Seq Scan" => NodeType::SeqScan,
            "Index Scan" => NodeType::IndexScan,
            "Index Only Scan" => NodeType::IndexOnlyScan,
            "Bitmap Heap Scan" => NodeType::BitmapHeapScan,
            "Bitmap Index Scan" => NodeType::BitmapIndexScan,
            "CTE Scan" => NodeType::CteScan,
            "" => NodeType::Unknown,
            _ => NodeType::Other(name),
        }
    }
}

impl From<&str> for NodeType {
    fn from(name: &str) -> Self {
        NodeType::from(name.to_string())
    }
}

impl From<NodeType> for String {
    fn from(node_type: NodeType) -> Self {
        node_type.as_str().to_string()
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
