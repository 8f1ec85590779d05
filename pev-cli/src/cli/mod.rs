// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for pev
//!
//! Reads EXPLAIN JSON from a file or stdin and prints the analyzed plans.

pub mod commands;
pub mod output;
pub mod pevcli;

pub use commands::{Cli, Commands};
pub use pevcli::handle_render;
