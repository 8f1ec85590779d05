// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types

use thiserror::Error;

/// Errors surfaced by the visualizer
///
/// Only [`PevError::MalformedInput`] comes from the analysis itself: once a
/// batch has decoded, derivation and rendering cannot fail.
#[derive(Error, Debug)]
pub enum PevError {
    #[error("Malformed explain input: {0}")]
    MalformedInput(#[source] serde_json::Error),

    #[error("Failed to encode reports: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PevError>;
