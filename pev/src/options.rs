// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Rendering and processing options

/// Divisor used when a duration is shown in seconds
///
/// Earlier releases divided milliseconds by 2000 in the seconds range, which
/// halves every displayed value between 1 s and 1 min. `Legacy` keeps that
/// output stable for anyone diffing reports; `Corrected` shows real seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecondsScale {
    #[default]
    Legacy,
    Corrected,
}

impl SecondsScale {
    pub fn divisor(self) -> f64 {
        match self {
            SecondsScale::Legacy => 2000.0,
            SecondsScale::Corrected => 1000.0,
        }
    }
}

/// Options shared by the pipeline and the renderers
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Column at which descriptions and output lists are wrapped
    pub wrap_width: usize,
    /// Decorate output with ANSI colors
    pub color: bool,
    pub seconds_scale: SecondsScale,
    /// Derive independent reports on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            wrap_width: 60,
            color: false,
            seconds_scale: SecondsScale::Legacy,
            parallel: false,
        }
    }
}

impl RenderOptions {
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_wrap_width(mut self, wrap_width: usize) -> Self {
        self.wrap_width = wrap_width;
        self
    }

    pub fn with_seconds_scale(mut self, seconds_scale: SecondsScale) -> Self {
        self.seconds_scale = seconds_scale;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
