//! Type definitions for number pattern parsing
//!
//! This module defines the offset-based representation produced by the parser
//! and the small enums shared by the mapper, generator and affix selector.

use serde::{Deserialize, Serialize};

use crate::rounding::RoundingAccumulator;

/// Half-open byte range `[start, end)` into the pattern text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Endpoints {
    pub start: usize,
    pub end: usize,
}

impl Endpoints {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice `text` without copying
    pub fn slice<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }
}

/// Widths of the primary, secondary and tertiary digit groups of an integer run
///
/// The primary slot starts at zero and counts digits as they are read; each
/// `,` pushes the slots outward and opens a new empty primary group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingSizes([Option<u16>; 3]);

impl Default for GroupingSizes {
    fn default() -> Self {
        Self([Some(0), None, None])
    }
}

impl GroupingSizes {
    pub fn primary(&self) -> Option<u16> {
        self.0[0]
    }

    pub fn secondary(&self) -> Option<u16> {
        self.0[1]
    }

    pub fn tertiary(&self) -> Option<u16> {
        self.0[2]
    }

    /// A grouping separator was read
    pub(crate) fn open_group(&mut self) {
        self.0 = [Some(0), self.0[0], self.0[1]];
    }

    /// A digit placeholder was read
    pub(crate) fn widen(&mut self) {
        let width = self.0[0].unwrap_or(0);
        self.0[0] = Some(width.saturating_add(1));
    }
}

/// Where padding characters are inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PadPosition {
    BeforePrefix,
    AfterPrefix,
    BeforeSuffix,
    AfterSuffix,
}

/// Everything collected while consuming one subpattern
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubpatternInfo {
    pub prefix: Endpoints,
    pub suffix: Endpoints,
    pub padding: Endpoints,
    pub padding_location: Option<PadPosition>,

    pub has_percent_sign: bool,
    pub has_per_mille_sign: bool,
    pub has_currency_sign: bool,
    pub has_minus_sign: bool,
    pub has_plus_sign: bool,
    pub has_decimal: bool,
    pub exponent_has_plus_sign: bool,

    pub integer_numerals: u32,
    pub integer_leading_hash_signs: u32,
    pub integer_trailing_hash_signs: u32,
    pub integer_at_signs: u32,
    pub integer_total: u32,
    pub fraction_numerals: u32,
    pub fraction_hash_signs: u32,
    pub fraction_total: u32,
    pub exponent_zeros: u32,

    pub grouping_sizes: GroupingSizes,
    /// Characters of the number body (digits, separators, exponent) used to size padding
    pub width_except_affixes: u32,
    /// Literal rounding increment spelled by the pattern digits, e.g. `0.05`
    pub rounding: RoundingAccumulator,
}

impl SubpatternInfo {
    pub fn has_padding(&self) -> bool {
        self.padding_location.is_some()
    }
}

/// Which subpattern, and which part of it, an affix query refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffixSlot {
    Prefix,
    Suffix,
    Padding,
}

/// Plural category used by providers that carry per-plural affixes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plural {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

/// Key of an affix query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffixKey {
    pub negative: bool,
    pub slot: AffixSlot,
    pub plural: Option<Plural>,
}

impl AffixKey {
    pub const fn prefix(negative: bool) -> Self {
        Self {
            negative,
            slot: AffixSlot::Prefix,
            plural: None,
        }
    }

    pub const fn suffix(negative: bool) -> Self {
        Self {
            negative,
            slot: AffixSlot::Suffix,
            plural: None,
        }
    }

    pub const fn padding(negative: bool) -> Self {
        Self {
            negative,
            slot: AffixSlot::Padding,
            plural: None,
        }
    }

    pub const fn with_plural(mut self, plural: Option<Plural>) -> Self {
        self.plural = plural;
        self
    }
}

/// Sign of the value being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signum {
    Negative,
    Zero,
    Positive,
}

/// When a sign is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignDisplay {
    /// Minus for negative values only
    #[default]
    Auto,
    /// Plus or minus for every value, zero included
    Always,
    /// Never show a sign
    Never,
    /// Accounting style (parentheses) for negative values
    Accounting,
    /// Accounting style, plus sign for non-negative values
    AccountingAlways,
    /// Plus or minus, except for zero
    ExceptZero,
    /// Accounting style, plus for positive values, nothing for zero
    AccountingExceptZero,
}

/// Whether rounding settings from the pattern are dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IgnoreRounding {
    #[default]
    Never,
    /// Drop them when the positive subpattern has a currency sign
    IfCurrency,
    Always,
}
