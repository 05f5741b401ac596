//! Style policy for generated import text

use serde::{Deserialize, Serialize};

/// Quote character around module specifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

impl QuoteStyle {
    pub fn quote_char(&self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

/// When a comma follows the last named binding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingCommaPolicy {
    #[default]
    None,
    Always,
    /// Only in the wrapped layout
    MultiLine,
}

impl TrailingCommaPolicy {
    pub fn in_single_line(&self) -> bool {
        matches!(self, TrailingCommaPolicy::Always)
    }

    pub fn in_wrapped(&self) -> bool {
        matches!(self, TrailingCommaPolicy::Always | TrailingCommaPolicy::MultiLine)
    }
}

/// What the wrap threshold counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    /// Characters of the single-line statement, terminator excluded
    #[default]
    LineLength,
    /// Named bindings; wrapped bindings share one indented line
    Words,
    /// Named bindings; wrapped bindings get a line each
    NewLineEachExpressionAfterCountLimit,
    /// As above, but a lone binding never wraps
    NewLineEachExpressionAfterCountLimitExceptIfOnlyOne,
}

/// Single-line vs wrapped decision: single line iff measure < threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapPolicy {
    pub threshold: usize,
    #[serde(default)]
    pub mode: WrapMode,
}

impl Default for WrapPolicy {
    fn default() -> Self {
        Self {
            threshold: 100,
            mode: WrapMode::LineLength,
        }
    }
}

/// Space counts around braces and commas in named-binding lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    pub after_open_brace: usize,
    pub before_close_brace: usize,
    pub before_comma: usize,
    pub after_comma: usize,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            after_open_brace: 1,
            before_close_brace: 1,
            before_comma: 0,
            after_comma: 1,
        }
    }
}

/// Complete rendering policy.
///
/// Counts are unsigned so negative values cannot reach the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleConfiguration {
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
    #[serde(default)]
    pub blank_lines_after_all_groups: usize,
    #[serde(default)]
    pub quote_style: QuoteStyle,
    #[serde(default)]
    pub trailing_comma_policy: TrailingCommaPolicy,
    #[serde(default)]
    pub wrap_policy: WrapPolicy,
    #[serde(default)]
    pub spacing: Spacing,
}

fn default_indent_width() -> usize {
    4
}

impl Default for StyleConfiguration {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            blank_lines_after_all_groups: 0,
            quote_style: QuoteStyle::default(),
            trailing_comma_policy: TrailingCommaPolicy::default(),
            wrap_policy: WrapPolicy::default(),
            spacing: Spacing::default(),
        }
    }
}
