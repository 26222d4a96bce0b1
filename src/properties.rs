//! Canonical formatting properties
//!
//! [`Properties`] is what a number formatter is configured with. The mapper
//! fills it from a pattern, the generator turns it back into one, and
//! [`Properties::from_toml`] loads it from configuration.

use serde::{Deserialize, Serialize};

use crate::rounding::RoundingIncrement;
use crate::types::PadPosition;

/// How fraction or significant digits are bounded
///
/// The modes are mutually exclusive: selecting one clears the others.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum Precision {
    /// No digit constraint from the pattern
    #[default]
    Unset,
    /// Minimum and maximum fraction digits
    Fraction { min: u32, max: u32 },
    /// Round to a multiple of `increment`, with fraction digit bounds
    Increment {
        increment: RoundingIncrement,
        min_fraction: u32,
        max_fraction: u32,
    },
    /// Minimum and maximum significant digits
    Significant { min: u32, max: u32 },
}

impl Precision {
    pub fn fraction_digits(&self) -> (Option<u32>, Option<u32>) {
        match self {
            Precision::Fraction { min, max }
            | Precision::Increment {
                min_fraction: min,
                max_fraction: max,
                ..
            } => (Some(*min), Some(*max)),
            _ => (None, None),
        }
    }

    pub fn significant_digits(&self) -> (Option<u32>, Option<u32>) {
        match self {
            Precision::Significant { min, max } => (Some(*min), Some(*max)),
            _ => (None, None),
        }
    }

    /// The rounding increment, zero when not in increment mode
    pub fn rounding_increment(&self) -> RoundingIncrement {
        match self {
            Precision::Increment { increment, .. } => increment.clone(),
            _ => RoundingIncrement::default(),
        }
    }
}

/// The property set consumed by a decimal formatter
///
/// `None` means "not configured". Prefix and suffix fields ending in
/// `_pattern` hold affix *patterns* (quotes and symbol placeholders as written);
/// the plain `positive_prefix` etc. hold literal text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Properties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_grouping_size: Option<u32>,
    pub grouping_used: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_integer_digits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_integer_digits: Option<u32>,
    pub decimal_separator_always_shown: bool,

    /// Set when scientific notation is used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_exponent_digits: Option<u32>,
    pub exponent_sign_always_shown: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad_position: Option<PadPosition>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive_prefix_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive_suffix_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prefix_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_suffix_pattern: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_suffix: Option<String>,

    /// Power of ten the value is scaled by: 0, 2 for percent, 3 for per-mille
    pub magnitude_multiplier: i32,

    /// Kept last so it serializes as a trailing TOML table
    pub precision: Precision,
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            grouping_size: None,
            secondary_grouping_size: None,
            grouping_used: true,
            minimum_integer_digits: None,
            maximum_integer_digits: None,
            decimal_separator_always_shown: false,
            minimum_exponent_digits: None,
            exponent_sign_always_shown: false,
            format_width: None,
            pad_string: None,
            pad_position: None,
            positive_prefix_pattern: None,
            positive_suffix_pattern: None,
            negative_prefix_pattern: None,
            negative_suffix_pattern: None,
            positive_prefix: None,
            positive_suffix: None,
            negative_prefix: None,
            negative_suffix: None,
            magnitude_multiplier: 0,
            precision: Precision::Unset,
        }
    }
}

impl Properties {
    /// Load properties from a TOML document; missing keys keep their defaults
    ///
    /// # Examples
    /// ```
    /// use number_pattern::properties::{Precision, Properties};
    ///
    /// let props = Properties::from_toml(
    ///     r#"
    ///     grouping_size = 3
    ///     minimum_integer_digits = 1
    ///
    ///     [precision]
    ///     mode = "fraction"
    ///     min = 2
    ///     max = 2
    ///     "#,
    /// )
    /// .unwrap();
    /// assert_eq!(props.grouping_size, Some(3));
    /// assert_eq!(props.precision, Precision::Fraction { min: 2, max: 2 });
    /// ```
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Whether scientific notation is configured
    pub fn is_scientific(&self) -> bool {
        self.minimum_exponent_digits.is_some()
    }
}
