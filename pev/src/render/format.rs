// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Number, duration and text formatting helpers

use crate::options::SecondsScale;

/// Severity bucket of a duration, used to pick its color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationTier {
    Good,
    Warning,
    Critical,
}

/// A duration rendered for display together with its severity
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedDuration {
    pub tier: DurationTier,
    pub text: String,
}

/// Categorize a duration given in milliseconds
///
/// Below 1 s durations stay in milliseconds; up to a minute they are shown in
/// seconds using `scale`, beyond that in minutes.
pub fn format_duration(millis: f64, scale: SecondsScale) -> FormattedDuration {
    let (tier, text) = if millis < 1.0 {
        (DurationTier::Good, "<1 ms".to_string())
    } else if millis < 100.0 {
        (DurationTier::Good, format!("{:.2} ms", millis))
    } else if millis < 1000.0 {
        (DurationTier::Warning, format!("{:.2} ms", millis))
    } else if millis < 60000.0 {
        (
            DurationTier::Critical,
            format!("{:.2} s", millis / scale.divisor()),
        )
    } else {
        (
            DurationTier::Critical,
            format!("{:.2} m", millis / 60000.0),
        )
    };

    FormattedDuration { tier, text }
}

/// Format a float with thousands separators and its shortest exact digits
pub fn commaf(value: f64) -> String {
    let mut out = String::new();
    let mut value = value;
    if value < 0.0 {
        out.push('-');
        value = -value;
    }

    let digits = value.to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Format an integer with thousands separators
pub fn comma(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    if value < 0 {
        format!("-{}", group_thousands(&digits))
    } else {
        group_thousands(&digits)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Share of `part` in `whole` as a percentage, 0 when `whole` is not usable
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 || !whole.is_finite() {
        return 0.0;
    }
    part / whole * 100.0
}

/// Greedy word wrap at `width` characters
///
/// Spacing inside a line is kept as written; the run of spaces at which a
/// line breaks is replaced by the line break. Existing line breaks are kept.
/// Words of `width` characters or more are never split.
pub fn word_wrap(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut current = 0;
    let mut word = String::new();
    let mut word_len = 0;
    let mut spaces = String::new();
    let mut spaces_len = 0;

    for ch in text.chars() {
        if ch == '\n' {
            if word.is_empty() && current + spaces_len > width {
                spaces.clear();
            }
            out.push_str(&spaces);
            out.push_str(&word);
            out.push('\n');
            spaces.clear();
            word.clear();
            spaces_len = 0;
            word_len = 0;
            current = 0;
        } else if ch.is_whitespace() && ch != '\u{a0}' {
            if spaces.is_empty() || !word.is_empty() {
                current += spaces_len + word_len;
                out.push_str(&spaces);
                out.push_str(&word);
                spaces.clear();
                word.clear();
                spaces_len = 0;
                word_len = 0;
            }
            spaces.push(ch);
            spaces_len += 1;
        } else {
            word.push(ch);
            word_len += 1;
            if current + spaces_len + word_len > width && word_len < width {
                out.push('\n');
                current = 0;
                spaces.clear();
                spaces_len = 0;
            }
        }
    }

    if !word.is_empty() || current + spaces_len <= width {
        out.push_str(&spaces);
    }
    out.push_str(&word);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy(millis: f64) -> FormattedDuration {
        format_duration(millis, SecondsScale::Legacy)
    }

    #[test]
    fn test_duration_boundaries() {
        assert_eq!(legacy(0.999).text, "<1 ms");
        assert_eq!(legacy(0.999).tier, DurationTier::Good);
        assert_eq!(legacy(1.0).text, "1.00 ms");
        assert_eq!(legacy(99.999).tier, DurationTier::Good);
        assert_eq!(legacy(100.0).tier, DurationTier::Warning);
        assert_eq!(legacy(100.0).text, "100.00 ms");
        assert_eq!(legacy(999.999).tier, DurationTier::Warning);
        assert_eq!(legacy(1000.0).tier, DurationTier::Critical);
        assert!(legacy(1000.0).text.ends_with(" s"));
        assert_eq!(legacy(60000.0).text, "1.00 m");
    }

    #[test]
    fn test_seconds_scale() {
        assert_eq!(format_duration(3000.0, SecondsScale::Legacy).text, "1.50 s");
        assert_eq!(format_duration(3000.0, SecondsScale::Corrected).text, "3.00 s");
    }

    #[test]
    fn test_commaf() {
        assert_eq!(commaf(0.0), "0");
        assert_eq!(commaf(20.0), "20");
        assert_eq!(commaf(8.25), "8.25");
        assert_eq!(commaf(1234.5), "1,234.5");
        assert_eq!(commaf(123456.0), "123,456");
        assert_eq!(commaf(1234567.89), "1,234,567.89");
        assert_eq!(commaf(-9876.5), "-9,876.5");
    }

    #[test]
    fn test_comma() {
        assert_eq!(comma(0), "0");
        assert_eq!(comma(999), "999");
        assert_eq!(comma(1000), "1,000");
        assert_eq!(comma(12345678), "12,345,678");
        assert_eq!(comma(-1000), "-1,000");
    }

    #[test]
    fn test_percent_of_zero_whole() {
        assert_eq!(percent_of(5.0, 0.0), 0.0);
        assert_eq!(percent_of(5.0, 10.0), 50.0);
    }

    #[test]
    fn test_word_wrap() {
        let text = "Returns a specified number of rows from a record set.";
        assert_eq!(word_wrap(text, 60), text);
        assert_eq!(
            word_wrap(text, 20),
            "Returns a specified\nnumber of rows from\na record set."
        );
    }

    #[test]
    fn test_word_wrap_long_word_and_empty() {
        assert_eq!(word_wrap("", 60), "");
        assert_eq!(word_wrap("a verylongword b", 5), "a\nverylongword\nb");
    }

    #[test]
    fn test_word_wrap_keeps_spacing() {
        assert_eq!(word_wrap("a  +  b", 60), "a  +  b");
        assert_eq!(word_wrap(" (x)", 60), " (x)");
        assert_eq!(word_wrap("sum(x)  +  count(y)", 10), "sum(x)  +\ncount(y)");
        assert_eq!(word_wrap("one\ntwo", 60), "one\ntwo");
    }

    #[test]
    fn test_word_wrap_lines_fit_width() {
        let text = crate::plan::NodeType::NestedLoop.description();
        for line in word_wrap(text, 60).lines() {
            assert!(line.chars().count() <= 60, "{:?}", line);
        }
    }
}
