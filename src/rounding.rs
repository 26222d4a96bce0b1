//! Rounding increment arithmetic
//!
//! Patterns such as `#,##0.05` spell a rounding increment with their digits.
//! The parser feeds those digits one by one into a [`RoundingAccumulator`];
//! the generator turns an increment back into a digit run with
//! [`increment_digits`]. Increments have no precision limit, so any digit run
//! a pattern can spell is representable.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

/// Non-negative decimal `unscaled × 10^-scale` of unbounded precision
///
/// Always normalized: no trailing fraction zeros, and zero has scale 0. Two
/// increments are equal exactly when they denote the same number.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoundingIncrement {
    unscaled: BigUint,
    scale: u32,
}

impl RoundingIncrement {
    fn normalized(mut unscaled: BigUint, mut scale: u32) -> Self {
        let ten = BigUint::from(10u32);
        while scale > 0 && !unscaled.is_zero() && (&unscaled % &ten).is_zero() {
            unscaled /= &ten;
            scale -= 1;
        }
        if unscaled.is_zero() {
            scale = 0;
        }
        RoundingIncrement { unscaled, scale }
    }

    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Number of places after the decimal point
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Nearest `f64`; tiny increments underflow to zero
    pub fn to_f64(&self) -> f64 {
        let unscaled = self.unscaled.to_f64().unwrap_or(f64::INFINITY);
        let divisor = 10f64.powi(i32::try_from(self.scale).unwrap_or(i32::MAX));
        unscaled / divisor
    }
}

impl fmt::Display for RoundingIncrement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.unscaled.to_str_radix(10);
        let scale = self.scale as usize;
        if scale == 0 {
            return f.write_str(&digits);
        }
        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (int, frac) = padded.split_at(padded.len() - scale);
        write!(f, "{int}.{frac}")
    }
}

/// Text is not a plain non-negative decimal such as `0.05`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidIncrement(String);

impl fmt::Display for InvalidIncrement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid rounding increment {:?}", self.0)
    }
}

impl std::error::Error for InvalidIncrement {}

impl FromStr for RoundingIncrement {
    type Err = InvalidIncrement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidIncrement(s.to_string());
        let body = s.strip_prefix('+').unwrap_or(s);
        let (int, frac) = body.split_once('.').unwrap_or((body, ""));
        if int.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !int.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let digits = format!("{int}{frac}");
        let unscaled = if digits.is_empty() {
            BigUint::zero()
        } else {
            BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?
        };
        let scale = u32::try_from(frac.len()).map_err(|_| invalid())?;
        Ok(Self::normalized(unscaled, scale))
    }
}

impl TryFrom<String> for RoundingIncrement {
    type Error = InvalidIncrement;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RoundingIncrement> for String {
    fn from(value: RoundingIncrement) -> Self {
        value.to_string()
    }
}

/// Decimal value built digit by digit at explicit magnitudes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoundingAccumulator {
    unscaled: BigUint,
    /// Scale of the last fraction digit appended
    scale: u32,
}

impl RoundingAccumulator {
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Append `digit` after `leading_zeros` implied zeros.
    ///
    /// In integer mode the current value is shifted left and the digit lands at
    /// magnitude 0. Otherwise it lands `leading_zeros + 1` places to the right of
    /// the previous fraction digit.
    pub fn append_digit(&mut self, digit: u8, leading_zeros: u32, as_integer: bool) {
        let places = leading_zeros.saturating_add(1);
        self.unscaled = &self.unscaled * BigUint::from(10u32).pow(places) + BigUint::from(digit);
        if !as_integer {
            self.scale = self.scale.saturating_add(places);
        }
    }

    /// The accumulated value without trailing fraction zeros
    pub fn value(&self) -> RoundingIncrement {
        RoundingIncrement::normalized(self.unscaled.clone(), self.scale)
    }

    pub fn to_f64(&self) -> f64 {
        self.value().to_f64()
    }

    /// Plain decimal text, e.g. `0.05`
    pub fn to_plain_string(&self) -> String {
        self.value().to_string()
    }
}

/// Split an increment into its significant digits and the magnitude of the last one.
///
/// `0.05` becomes `("5", -2)`, `10.5` becomes `("105", -1)` and `50` becomes
/// `("50", 0)`.
pub fn increment_digits(increment: &RoundingIncrement) -> (String, i32) {
    let scale = i32::try_from(increment.scale).unwrap_or(i32::MAX);
    (increment.unscaled.to_str_radix(10), -scale)
}
