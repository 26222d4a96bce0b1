//! Affix pattern providers
//!
//! The affix selector does not care whether affixes came straight from a
//! parsed pattern or from a property set whose affixes were edited one by one.
//! [`AffixPatternProvider`] is the query surface both expose.

use crate::affix::{self, AffixPatternType};
use crate::error::PatternError;
use crate::parser::ParsedPattern;
use crate::properties::Properties;
use crate::types::{AffixKey, AffixSlot};

/// Read access to the affix patterns of a number format
pub trait AffixPatternProvider {
    /// Affix pattern text for `key`, quotes and placeholders as written
    fn affix(&self, key: AffixKey) -> &str;

    /// Length of [`Self::affix`] in code points
    fn length(&self, key: AffixKey) -> usize {
        self.affix(key).chars().count()
    }

    fn positive_has_plus_sign(&self) -> bool;

    fn has_negative_subpattern(&self) -> bool;

    fn negative_has_minus_sign(&self) -> bool;

    fn has_currency_sign(&self) -> bool;

    fn contains_symbol_type(&self, kind: AffixPatternType) -> bool;

    /// Whether the format renders digits at all
    fn has_body(&self) -> bool;
}

impl AffixPatternProvider for ParsedPattern {
    fn affix(&self, key: AffixKey) -> &str {
        ParsedPattern::affix(self, key)
    }

    fn positive_has_plus_sign(&self) -> bool {
        ParsedPattern::positive_has_plus_sign(self)
    }

    fn has_negative_subpattern(&self) -> bool {
        ParsedPattern::has_negative_subpattern(self)
    }

    fn negative_has_minus_sign(&self) -> bool {
        ParsedPattern::negative_has_minus_sign(self)
    }

    fn has_currency_sign(&self) -> bool {
        ParsedPattern::has_currency_sign(self)
    }

    fn contains_symbol_type(&self, kind: AffixPatternType) -> bool {
        ParsedPattern::contains_symbol_type(self, kind)
    }

    fn has_body(&self) -> bool {
        ParsedPattern::has_body(self)
    }
}

/// Effective affix patterns of a [`Properties`] value
///
/// Each affix resolves on its own: the literal field wins, then the pattern
/// field, then the default (empty for positive affixes, `-` plus the positive
/// prefix pattern for the negative prefix, the positive suffix pattern for the
/// negative suffix).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertiesAffixProvider {
    pos_prefix: String,
    pos_suffix: String,
    neg_prefix: String,
    neg_suffix: String,
    is_currency_pattern: bool,
}

impl PropertiesAffixProvider {
    /// Resolve the affixes of `properties`
    ///
    /// Fails when one of the affix pattern fields is not a valid affix pattern.
    ///
    /// # Examples
    /// ```
    /// use number_pattern::mapper::parse_to_properties;
    /// use number_pattern::provider::{AffixPatternProvider, PropertiesAffixProvider};
    /// use number_pattern::types::{AffixKey, IgnoreRounding};
    ///
    /// let mut props = parse_to_properties("#,##0.00", IgnoreRounding::Never).unwrap();
    /// props.positive_prefix = Some("EUR ".to_string());
    /// let provider = PropertiesAffixProvider::new(&props).unwrap();
    /// assert_eq!(provider.affix(AffixKey::prefix(false)), "EUR ");
    /// assert_eq!(provider.affix(AffixKey::prefix(true)), "-");
    /// assert!(provider.has_negative_subpattern());
    /// ```
    pub fn new(properties: &Properties) -> Result<Self, PatternError> {
        let ppp = properties.positive_prefix_pattern.as_deref();
        let psp = properties.positive_suffix_pattern.as_deref();
        let npp = properties.negative_prefix_pattern.as_deref();
        let nsp = properties.negative_suffix_pattern.as_deref();

        let resolve = |literal: &Option<String>, pattern: Option<&str>, default: String| {
            match (literal, pattern) {
                (Some(literal), _) => affix::escape(literal),
                (None, Some(pattern)) => pattern.to_string(),
                (None, None) => default,
            }
        };
        let provider = Self {
            pos_prefix: resolve(&properties.positive_prefix, ppp, String::new()),
            pos_suffix: resolve(&properties.positive_suffix, psp, String::new()),
            neg_prefix: resolve(
                &properties.negative_prefix,
                npp,
                format!("-{}", ppp.unwrap_or("")),
            ),
            neg_suffix: resolve(
                &properties.negative_suffix,
                nsp,
                psp.unwrap_or("").to_string(),
            ),
            // Only the pattern fields decide, never the literal overrides
            is_currency_pattern: has_currency(ppp)?
                || has_currency(psp)?
                || has_currency(npp)?
                || has_currency(nsp)?,
        };

        for affix in [
            &provider.pos_prefix,
            &provider.pos_suffix,
            &provider.neg_prefix,
            &provider.neg_suffix,
        ] {
            affix::tokenize(affix)?;
        }
        Ok(provider)
    }

    fn contains(&self, key: AffixKey, kind: AffixPatternType) -> bool {
        affix::contains_type(AffixPatternProvider::affix(self, key), kind).unwrap_or(false)
    }
}

fn has_currency(pattern: Option<&str>) -> Result<bool, PatternError> {
    pattern.map_or(Ok(false), affix::has_currency_symbols)
}

impl AffixPatternProvider for PropertiesAffixProvider {
    fn affix(&self, key: AffixKey) -> &str {
        match (key.negative, key.slot) {
            (false, AffixSlot::Prefix) => &self.pos_prefix,
            (false, AffixSlot::Suffix) => &self.pos_suffix,
            (true, AffixSlot::Prefix) => &self.neg_prefix,
            (true, AffixSlot::Suffix) => &self.neg_suffix,
            (_, AffixSlot::Padding) => "",
        }
    }

    fn positive_has_plus_sign(&self) -> bool {
        self.contains(AffixKey::prefix(false), AffixPatternType::PlusSign)
            || self.contains(AffixKey::suffix(false), AffixPatternType::PlusSign)
    }

    /// True unless the negative affixes are the positive ones behind a `-`
    fn has_negative_subpattern(&self) -> bool {
        let mut neg_prefix = self.neg_prefix.chars();
        let starts_with_minus = neg_prefix.next() == Some('-');
        self.neg_suffix != self.pos_suffix
            || !starts_with_minus
            || neg_prefix.as_str() != self.pos_prefix
    }

    fn negative_has_minus_sign(&self) -> bool {
        self.contains(AffixKey::prefix(true), AffixPatternType::MinusSign)
            || self.contains(AffixKey::suffix(true), AffixPatternType::MinusSign)
    }

    fn has_currency_sign(&self) -> bool {
        self.is_currency_pattern
    }

    fn contains_symbol_type(&self, kind: AffixPatternType) -> bool {
        [
            AffixKey::prefix(false),
            AffixKey::suffix(false),
            AffixKey::prefix(true),
            AffixKey::suffix(true),
        ]
        .into_iter()
        .any(|key| self.contains(key, kind))
    }

    fn has_body(&self) -> bool {
        true
    }
}
