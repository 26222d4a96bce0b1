//! Canonical properties → pattern string
//!
//! The output is not a copy of whatever pattern produced the properties, but
//! parsing it and mapping the result gives back the same formatting fields.

use log::{debug, trace};

use crate::affix;
use crate::error::PatternError;
use crate::properties::Properties;
use crate::rounding::increment_digits;
use crate::types::PadPosition;

/// Upper bound for every size-like property driving a loop below
const DOS_MAX: i32 = 100;

/// Pad string used when padding is configured without one
const FALLBACK_PADDING: &str = " ";

fn bounded(name: &str, value: Option<u32>) -> i32 {
    match value {
        None => -1,
        Some(v) if v > DOS_MAX as u32 => {
            debug!("clamping {name} from {v} to {DOS_MAX}");
            DOS_MAX
        }
        Some(v) => v as i32,
    }
}

/// Synthesize a pattern string from a property set
///
/// # Examples
/// ```
/// use number_pattern::generator::properties_to_pattern_string;
/// use number_pattern::properties::{Precision, Properties};
///
/// let props = Properties {
///     minimum_integer_digits: Some(1),
///     precision: Precision::Fraction { min: 2, max: 2 },
///     grouping_size: Some(3),
///     grouping_used: true,
///     ..Properties::default()
/// };
/// assert_eq!(properties_to_pattern_string(&props).unwrap(), "#,##0.00");
/// ```
pub fn properties_to_pattern_string(properties: &Properties) -> Result<String, PatternError> {
    trace!("generating pattern from {properties:?}");

    // An affix pattern that cannot be tokenized could never be parsed back
    for pattern in [
        &properties.positive_prefix_pattern,
        &properties.positive_suffix_pattern,
        &properties.negative_prefix_pattern,
        &properties.negative_suffix_pattern,
    ]
    .into_iter()
    .flatten()
    {
        affix::tokenize(pattern)?;
    }

    let (grouping_size, first_grouping_size) = if properties.grouping_used {
        (
            bounded("secondary grouping size", properties.secondary_grouping_size),
            bounded("grouping size", properties.grouping_size),
        )
    } else {
        (-1, -1)
    };
    let padding_width = bounded("format width", properties.format_width);
    let min_int = bounded("minimum integer digits", properties.minimum_integer_digits).max(0);
    let max_int = bounded("maximum integer digits", properties.maximum_integer_digits);
    let (min_frac, max_frac) = properties.precision.fraction_digits();
    let min_frac = bounded("minimum fraction digits", min_frac).max(0);
    let max_frac = bounded("maximum fraction digits", max_frac);
    let (min_sig, max_sig) = properties.precision.significant_digits();
    let min_sig = bounded("minimum significant digits", min_sig);
    let max_sig = bounded("maximum significant digits", max_sig);
    let exponent_digits = bounded("exponent digits", properties.minimum_exponent_digits);

    let mut sb: Vec<char> = Vec::new();

    // Prefixes
    if let Some(pattern) = &properties.positive_prefix_pattern {
        sb.extend(pattern.chars());
    }
    if let Some(literal) = &properties.positive_prefix {
        sb.extend(affix::escape(literal).chars());
    }
    let mut after_prefix_pos = sb.len();

    // Grouping: `grouping` repeats beyond `grouping2`; 0 means no repetition
    let (grouping, grouping1, grouping2) = if grouping_size != -1
        && first_grouping_size != -1
        && grouping_size != first_grouping_size
    {
        (grouping_size, grouping_size, first_grouping_size)
    } else if grouping_size != -1 {
        (grouping_size, 0, grouping_size)
    } else if first_grouping_size != -1 {
        (grouping_size, 0, first_grouping_size)
    } else {
        (0, 0, 0)
    };
    let grouping_length = grouping1 + grouping2 + 1;

    // Digits that must appear literally, with the magnitude of the last one
    let mut digits: Vec<char> = Vec::new();
    let mut digits_scale: i32 = 0;
    let increment = properties.precision.rounding_increment();
    if max_sig != -1 {
        while (digits.len() as i32) < min_sig {
            digits.push('@');
        }
        while (digits.len() as i32) < max_sig {
            digits.push('#');
        }
    } else if !increment.is_zero() {
        let (text, scale) = increment_digits(&increment);
        digits.extend(text.chars());
        digits_scale = scale;
    }
    while digits.len() as i32 + digits_scale < min_int {
        digits.insert(0, '0');
    }
    while -digits_scale < min_frac {
        digits.push('0');
        digits_scale -= 1;
    }

    // Walk the magnitudes from the most to the least significant
    let digits_len = digits.len() as i32;
    let m0 = grouping_length.max(digits_len + digits_scale);
    let m0 = if max_int != DOS_MAX {
        max_int.max(m0) - 1
    } else {
        m0 - 1
    };
    let m_n = if max_frac != DOS_MAX {
        (-max_frac).min(digits_scale)
    } else {
        digits_scale
    };
    for magnitude in (m_n..=m0).rev() {
        let di = digits_len + digits_scale - magnitude - 1;
        if di < 0 || di >= digits_len {
            sb.push('#');
        } else {
            sb.push(digits[di as usize]);
        }
        if magnitude > grouping2 && grouping > 0 && (magnitude - grouping2) % grouping == 0 {
            sb.push(',');
        } else if magnitude > 0 && magnitude == grouping2 {
            sb.push(',');
        } else if magnitude == 0 && (properties.decimal_separator_always_shown || m_n < 0) {
            sb.push('.');
        }
    }

    // Exponential notation
    if exponent_digits != -1 {
        sb.push('E');
        if properties.exponent_sign_always_shown {
            sb.push('+');
        }
        for _ in 0..exponent_digits {
            sb.push('0');
        }
    }

    // Suffixes
    let mut before_suffix_pos = sb.len();
    if let Some(pattern) = &properties.positive_suffix_pattern {
        sb.extend(pattern.chars());
    }
    if let Some(literal) = &properties.positive_suffix {
        sb.extend(affix::escape(literal).chars());
    }

    // Padding
    if let (true, Some(location)) = (padding_width != -1, properties.pad_position) {
        // Measured like the mapper: body characters plus rendered affix length
        let prefix: String = sb[..after_prefix_pos].iter().collect();
        let suffix: String = sb[before_suffix_pos..].iter().collect();
        let affix_width =
            (affix::estimate_length(&prefix)? + affix::estimate_length(&suffix)?) as i32;
        while padding_width - affix_width - ((before_suffix_pos - after_prefix_pos) as i32) > 0 {
            sb.insert(after_prefix_pos, '#');
            before_suffix_pos += 1;
        }
        let pad: Vec<char> = escape_padding_string(properties.pad_string.as_deref().unwrap_or(""))
            .chars()
            .collect();
        let added = pad.len() + 1;
        match location {
            PadPosition::BeforePrefix => {
                sb.splice(0..0, std::iter::once('*').chain(pad));
                after_prefix_pos += added;
                before_suffix_pos += added;
            }
            PadPosition::AfterPrefix => {
                sb.splice(
                    after_prefix_pos..after_prefix_pos,
                    std::iter::once('*').chain(pad),
                );
                after_prefix_pos += added;
                before_suffix_pos += added;
            }
            PadPosition::BeforeSuffix => {
                sb.splice(
                    before_suffix_pos..before_suffix_pos,
                    std::iter::once('*').chain(pad),
                );
            }
            PadPosition::AfterSuffix => {
                sb.push('*');
                sb.extend(pad);
            }
        }
    }

    // Negative subpattern, unless it is just "-" in front of the positive one
    let npp = properties.negative_prefix_pattern.as_deref();
    let nsp = properties.negative_suffix_pattern.as_deref();
    let emit_negative = properties.negative_prefix.is_some()
        || properties.negative_suffix.is_some()
        || (npp.is_none() && nsp.is_some())
        || npp.is_some_and(|prefix| prefix != "-" || nsp.is_some_and(|suffix| !suffix.is_empty()));
    if emit_negative {
        sb.push(';');
        if let Some(pattern) = npp {
            sb.extend(pattern.chars());
        }
        if let Some(literal) = &properties.negative_prefix {
            sb.extend(affix::escape(literal).chars());
        }
        let body = sb[after_prefix_pos..before_suffix_pos].to_vec();
        sb.extend(body);
        if let Some(pattern) = nsp {
            sb.extend(pattern.chars());
        }
        if let Some(literal) = &properties.negative_suffix {
            sb.extend(affix::escape(literal).chars());
        }
    }

    Ok(sb.into_iter().collect())
}

/// Quote a pad string so it reads back as a single pad literal
///
/// ```
/// use number_pattern::generator::escape_padding_string;
///
/// assert_eq!(escape_padding_string("x"), "x");
/// assert_eq!(escape_padding_string("'"), "''");
/// assert_eq!(escape_padding_string("ab"), "'ab'");
/// assert_eq!(escape_padding_string(""), " ");
/// ```
pub fn escape_padding_string(pad: &str) -> String {
    let pad = if pad.is_empty() { FALLBACK_PADDING } else { pad };
    if pad.chars().count() == 1 {
        if pad == "'" {
            "''".to_string()
        } else {
            pad.to_string()
        }
    } else {
        format!("'{}'", pad.replace('\'', "''"))
    }
}
