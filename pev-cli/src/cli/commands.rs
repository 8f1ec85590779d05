// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command-line arguments

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Analyze PostgreSQL EXPLAIN (ANALYZE, FORMAT JSON) output
#[derive(Parser, Debug)]
#[command(name = "pev", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<log::Level>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print version information
    Version,

    /// Analyze a batch of plans and print them
    Render {
        /// JSON file produced by EXPLAIN; reads stdin when omitted or "-"
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Tree)]
        format: OutputFormat,

        /// Column at which descriptions and output lists wrap
        #[arg(short, long, default_value_t = 60)]
        width: usize,

        /// When to decorate output with colors
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,

        /// Show durations between 1 s and 1 min in real seconds
        #[arg(long)]
        fix_seconds: bool,

        /// Derive independent plans in parallel
        #[arg(long)]
        parallel: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Annotated box-drawn tree
    Tree,
    /// One table row per node
    Table,
    /// Plans with derived metrics as JSON
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}
