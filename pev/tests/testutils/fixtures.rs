//! EXPLAIN (ANALYZE, VERBOSE, FORMAT JSON) documents

/// Limit over a filtered sequential scan
pub const LIMIT_SEQ_SCAN: &str = r#"[
  {
    "Plan": {
      "Node Type": "Limit",
      "Startup Cost": 0.0,
      "Total Cost": 20.0,
      "Plan Rows": 10,
      "Plan Width": 36,
      "Actual Startup Time": 0.01,
      "Actual Total Time": 5.0,
      "Actual Rows": 10,
      "Actual Loops": 1,
      "Plans": [
        {
          "Node Type": "Seq Scan",
          "Parent Relationship": "Outer",
          "Relation Name": "users",
          "Schema": "public",
          "Alias": "users",
          "Startup Cost": 0.0,
          "Total Cost": 15.0,
          "Plan Rows": 10,
          "Plan Width": 36,
          "Actual Startup Time": 0.01,
          "Actual Total Time": 4.0,
          "Actual Rows": 10,
          "Actual Loops": 1,
          "Output": ["id", "name"],
          "Filter": "(id > 5)",
          "Rows Removed by Filter": 3
        }
      ]
    },
    "Planning Time": 0.5,
    "Triggers": [],
    "Execution Time": 5.0
  }
]"#;

/// Hash join over two scans, child costs 5 and 7
pub const HASH_JOIN: &str = r#"[
  {
    "Plan": {
      "Node Type": "Hash Join",
      "Join Type": "Inner",
      "Total Cost": 20.0,
      "Plan Rows": 4,
      "Actual Total Time": 3.0,
      "Actual Rows": 400,
      "Actual Loops": 1,
      "Hash Cond": "(orders.user_id = users.id)",
      "Plans": [
        {
          "Node Type": "Seq Scan",
          "Relation Name": "orders",
          "Schema": "public",
          "Total Cost": 5.0,
          "Plan Rows": 100,
          "Actual Total Time": 1.0,
          "Actual Rows": 100,
          "Actual Loops": 1
        },
        {
          "Node Type": "Seq Scan",
          "Relation Name": "users",
          "Schema": "public",
          "Total Cost": 7.0,
          "Plan Rows": 10,
          "Actual Total Time": 0.5,
          "Actual Rows": 10,
          "Actual Loops": 1
        }
      ]
    },
    "Planning Time": 0.2,
    "Execution Time": 3.2
  }
]"#;

/// Nested loop consuming a CTE scan
pub const CTE_SCAN: &str = r#"[
  {
    "Plan": {
      "Node Type": "Nested Loop",
      "Join Type": "Inner",
      "Total Cost": 30.0,
      "Actual Total Time": 6.0,
      "Actual Rows": 5,
      "Actual Loops": 1,
      "Plans": [
        {
          "Node Type": "CTE Scan",
          "CTE Name": "recent",
          "Total Cost": 12.0,
          "Actual Total Time": 2.0,
          "Actual Rows": 5,
          "Actual Loops": 1
        },
        {
          "Node Type": "Index Scan",
          "Index Name": "users_pkey",
          "Index Cond": "(id = recent.user_id)",
          "Scan Direction": "Forward",
          "Relation Name": "users",
          "Schema": "public",
          "Total Cost": 8.0,
          "Actual Total Time": 0.1,
          "Actual Rows": 1,
          "Actual Loops": 5
        }
      ]
    },
    "Planning Time": 0.3,
    "Execution Time": 6.1
  }
]"#;

/// Two reports in one batch, the second using an operator outside the table
pub const TWO_REPORTS: &str = r#"[
  {
    "Plan": {"Node Type": "Seq Scan", "Total Cost": 1.0, "Actual Loops": 1},
    "Planning Time": 0.1,
    "Execution Time": 0.2
  },
  {
    "Plan": {"Node Type": "Gather", "Total Cost": 2.0, "Actual Loops": 1},
    "Planning Time": 0.1,
    "Execution Time": 0.2
  }
]"#;
