// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Derived reports re-emitted as JSON

use crate::error::{PevError, Result};
use crate::plan::Explain;

/// Serialize derived reports, raw and derived fields alike
pub fn format_json(explains: &[Explain]) -> Result<String> {
    serde_json::to_string_pretty(explains).map_err(PevError::Encode)
}
