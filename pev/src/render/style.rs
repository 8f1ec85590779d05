// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Text decoration strategy
//!
//! The renderers never decide on colors themselves: they pass fully
//! formatted substrings through a [`Palette`], which either leaves them
//! untouched or wraps them in ANSI styles.
//!
//! An enabled palette always emits escape codes. Terminal detection and
//! `NO_COLOR` are left to the caller choosing between [`Palette::plain`] and
//! [`Palette::colored`].

use super::format::{DurationTier, FormattedDuration};
use colored::Color;

/// Style applied to one rendered fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Tree rails and joints
    Prefix,
    /// Outlier badges
    Tag,
    /// Secondary text: descriptions, keywords
    Muted,
    /// Operator names
    Bold,
    Good,
    Warning,
    Critical,
    /// Projected output columns
    Output,
    /// Headings of the table format
    Title,
}

impl Style {
    /// Foreground and optional background color
    fn colors(self) -> (Color, Option<Color>) {
        match self {
            Style::Prefix | Style::Muted => (Color::BrightBlack, None),
            Style::Tag => (Color::White, Some(Color::Red)),
            Style::Bold => (Color::BrightWhite, None),
            Style::Good | Style::Title => (Color::Green, None),
            Style::Warning => (Color::BrightYellow, None),
            Style::Critical => (Color::BrightRed, None),
            Style::Output => (Color::Cyan, None),
        }
    }
}

/// Decoration strategy injected into the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Leave all text undecorated
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    /// Decorate with ANSI colors
    pub fn colored() -> Self {
        Self { enabled: true }
    }

    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, style: Style, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }

        let (fg, bg) = style.colors();
        let mut codes = fg.to_fg_str().into_owned();
        if let Some(bg) = bg {
            codes.push(';');
            codes.push_str(&bg.to_bg_str());
        }
        if style == Style::Title {
            codes.insert_str(0, "1;");
        }
        format!("\x1b[{}m{}\x1b[0m", codes, text)
    }

    pub fn prefix(&self, text: &str) -> String {
        self.paint(Style::Prefix, text)
    }

    pub fn tag(&self, text: &str) -> String {
        self.paint(Style::Tag, text)
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(Style::Muted, text)
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(Style::Bold, text)
    }

    pub fn output(&self, text: &str) -> String {
        self.paint(Style::Output, text)
    }

    /// Color a duration by its severity
    pub fn duration(&self, duration: &FormattedDuration) -> String {
        let style = match duration.tier {
            DurationTier::Good => Style::Good,
            DurationTier::Warning => Style::Warning,
            DurationTier::Critical => Style::Critical,
        };
        self.paint(style, &duration.text)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::plain()
    }
}
