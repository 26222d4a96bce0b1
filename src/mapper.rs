//! Parsed pattern → canonical properties
//!
//! Only the positive subpattern configures digits, grouping, rounding, padding
//! and scientific notation. The negative subpattern contributes nothing but its
//! affix text.

use log::{trace, warn};

use crate::affix;
use crate::error::PatternError;
use crate::parser::ParsedPattern;
use crate::properties::{Precision, Properties};
use crate::types::{AffixKey, IgnoreRounding};

/// Parse `pattern` into a fresh property set
///
/// # Examples
/// ```
/// use number_pattern::mapper::parse_to_properties;
/// use number_pattern::properties::Precision;
/// use number_pattern::types::IgnoreRounding;
///
/// let props = parse_to_properties(".##", IgnoreRounding::Never).unwrap();
/// assert_eq!(props.minimum_integer_digits, Some(0));
/// assert_eq!(props.precision, Precision::Fraction { min: 1, max: 2 });
/// ```
pub fn parse_to_properties(
    pattern: &str,
    ignore_rounding: IgnoreRounding,
) -> Result<Properties, PatternError> {
    let mut properties = Properties::default();
    parse_to_existing_properties(pattern, &mut properties, ignore_rounding)?;
    Ok(properties)
}

/// Parse `pattern` and overwrite the fields of `properties` it governs
///
/// An empty pattern resets `properties` to its defaults. On error `properties`
/// is left untouched.
pub fn parse_to_existing_properties(
    pattern: &str,
    properties: &mut Properties,
    ignore_rounding: IgnoreRounding,
) -> Result<(), PatternError> {
    if pattern.is_empty() {
        *properties = Properties::default();
        return Ok(());
    }
    let parsed = ParsedPattern::parse(pattern)?;
    pattern_info_to_properties(properties, &parsed, ignore_rounding)
}

/// Project a parsed pattern onto `properties`
pub fn pattern_info_to_properties(
    properties: &mut Properties,
    parsed: &ParsedPattern,
    ignore_rounding: IgnoreRounding,
) -> Result<(), PatternError> {
    trace!("mapping pattern {:?} to properties", parsed.pattern());
    let positive = parsed.positive();

    let ignore_rounding = match ignore_rounding {
        IgnoreRounding::Never => false,
        IgnoreRounding::IfCurrency => positive.has_currency_sign,
        IgnoreRounding::Always => true,
    };

    let pos_prefix = parsed.affix(AffixKey::prefix(false));
    let pos_suffix = parsed.affix(AffixKey::suffix(false));

    // Computed first: the only fallible step, so nothing is written on failure
    let padding_width = if positive.has_padding() {
        Some(
            positive.width_except_affixes as usize
                + affix::estimate_length(pos_prefix)?
                + affix::estimate_length(pos_suffix)?,
        )
    } else {
        None
    };

    // Grouping
    let grouping = positive.grouping_sizes;
    if grouping.secondary().is_some() {
        properties.grouping_size = grouping.primary().map(u32::from);
        properties.grouping_used = true;
    } else {
        properties.grouping_size = None;
        properties.grouping_used = false;
    }
    properties.secondary_grouping_size = match grouping.tertiary() {
        Some(_) => grouping.secondary().map(u32::from),
        None => None,
    };

    // At least one digit must be shown
    let (min_int, min_frac) = if positive.integer_total == 0 && positive.fraction_total > 0 {
        // ".##"
        (0, positive.fraction_numerals.max(1))
    } else if positive.integer_numerals == 0 && positive.fraction_numerals == 0 {
        // "#.##"
        (1, 0)
    } else {
        (positive.integer_numerals, positive.fraction_numerals)
    };

    // Rounding
    properties.precision = if ignore_rounding {
        Precision::Unset
    } else if positive.integer_at_signs > 0 {
        Precision::Significant {
            min: positive.integer_at_signs,
            max: positive.integer_at_signs + positive.integer_trailing_hash_signs,
        }
    } else if !positive.rounding.is_zero() {
        Precision::Increment {
            increment: positive.rounding.value(),
            min_fraction: min_frac,
            max_fraction: positive.fraction_total,
        }
    } else {
        Precision::Fraction {
            min: min_frac,
            max: positive.fraction_total,
        }
    };

    // "#." forces the decimal separator
    properties.decimal_separator_always_shown =
        positive.has_decimal && positive.fraction_total == 0;

    // Scientific notation
    if positive.exponent_zeros > 0 {
        properties.exponent_sign_always_shown = positive.exponent_has_plus_sign;
        properties.minimum_exponent_digits = Some(positive.exponent_zeros);
        if positive.integer_at_signs == 0 {
            // Bounded integer digits enable engineering notation
            properties.minimum_integer_digits = Some(positive.integer_numerals);
            properties.maximum_integer_digits = Some(positive.integer_total);
        } else {
            properties.minimum_integer_digits = Some(1);
            properties.maximum_integer_digits = None;
        }
    } else {
        properties.exponent_sign_always_shown = false;
        properties.minimum_exponent_digits = None;
        properties.minimum_integer_digits = Some(min_int);
        properties.maximum_integer_digits = None;
    }

    // Padding
    match (padding_width, positive.padding_location) {
        (Some(width), Some(location)) => {
            properties.format_width = Some(width as u32);
            properties.pad_string = Some(unquote_padding(parsed.affix(AffixKey::padding(false))));
            properties.pad_position = Some(location);
        }
        _ => {
            properties.format_width = None;
            properties.pad_string = None;
            properties.pad_position = None;
        }
    }

    // Always written, so an earlier negative configuration cannot leak through
    properties.positive_prefix_pattern = Some(pos_prefix.to_string());
    properties.positive_suffix_pattern = Some(pos_suffix.to_string());
    if parsed.has_negative_subpattern() {
        properties.negative_prefix_pattern = Some(parsed.affix(AffixKey::prefix(true)).to_string());
        properties.negative_suffix_pattern = Some(parsed.affix(AffixKey::suffix(true)).to_string());
    } else {
        properties.negative_prefix_pattern = None;
        properties.negative_suffix_pattern = None;
    }

    // Magnitude multiplier
    if positive.has_percent_sign && positive.has_per_mille_sign {
        warn!(
            "pattern {:?} has both % and ‰; using the percent multiplier",
            parsed.pattern()
        );
    }
    properties.magnitude_multiplier = if positive.has_percent_sign {
        2
    } else if positive.has_per_mille_sign {
        3
    } else {
        0
    };

    Ok(())
}

/// Pad literal as written → pad string
fn unquote_padding(raw: &str) -> String {
    if raw.chars().count() <= 1 {
        return raw.to_string();
    }
    if raw == "''" {
        return "'".to_string();
    }
    match raw.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')) {
        Some(inner) => inner.to_string(),
        None => raw.to_string(),
    }
}
