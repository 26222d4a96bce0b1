use log::{debug, trace};

use crate::affix::{self, AffixPatternType};
use crate::error::{ErrorKind, PatternError};
use crate::parser::cursor::Cursor;
use crate::parser::digits::{consume_exponent, consume_format};
use crate::parser::literals::{consume_affix, consume_padding};
use crate::types::{AffixKey, AffixSlot, PadPosition, SubpatternInfo};

/// A pattern string together with what the parser learned about each subpattern
///
/// Built once by [`ParsedPattern::parse`] and read-only afterwards; all affix
/// text is served as slices of the owned pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPattern {
    pattern: String,
    positive: SubpatternInfo,
    negative: SubpatternInfo,
    has_negative_subpattern: bool,
}

impl ParsedPattern {
    /// Parse a number pattern
    ///
    /// # Examples
    /// ```
    /// use number_pattern::parser::ParsedPattern;
    ///
    /// let parsed = ParsedPattern::parse("#,##0.00;(#,##0.00)").unwrap();
    /// assert!(parsed.has_negative_subpattern());
    /// assert_eq!(parsed.positive().fraction_numerals, 2);
    /// ```
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        trace!("parsing number pattern {pattern:?}");
        consume_pattern(pattern).inspect_err(|e| debug!("{e}"))
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn positive(&self) -> &SubpatternInfo {
        &self.positive
    }

    /// The negative record; all defaults unless [`Self::has_negative_subpattern`]
    pub fn negative(&self) -> &SubpatternInfo {
        &self.negative
    }

    pub fn has_negative_subpattern(&self) -> bool {
        self.has_negative_subpattern
    }

    /// Raw affix text as written in the pattern, quotes included
    pub fn affix(&self, key: AffixKey) -> &str {
        let info = if key.negative {
            &self.negative
        } else {
            &self.positive
        };
        let endpoints = match key.slot {
            AffixSlot::Prefix => info.prefix,
            AffixSlot::Suffix => info.suffix,
            AffixSlot::Padding => info.padding,
        };
        endpoints.slice(&self.pattern)
    }

    pub fn positive_has_plus_sign(&self) -> bool {
        self.positive.has_plus_sign
    }

    pub fn negative_has_minus_sign(&self) -> bool {
        self.negative.has_minus_sign
    }

    pub fn has_currency_sign(&self) -> bool {
        self.positive.has_currency_sign
            || (self.has_negative_subpattern && self.negative.has_currency_sign)
    }

    /// Whether any prefix or suffix contains a token of the given type
    pub fn contains_symbol_type(&self, kind: AffixPatternType) -> bool {
        [
            AffixKey::prefix(false),
            AffixKey::suffix(false),
            AffixKey::prefix(true),
            AffixKey::suffix(true),
        ]
        .into_iter()
        .any(|key| affix::contains_type(self.affix(key), kind).unwrap_or(false))
    }

    /// Whether the positive subpattern has any integer digit placeholder
    pub fn has_body(&self) -> bool {
        self.positive.integer_total > 0
    }
}

/// `pattern := subpattern (';' subpattern?)?`
fn consume_pattern(pattern: &str) -> Result<ParsedPattern, PatternError> {
    let mut cursor = Cursor::new(pattern);

    let mut positive = SubpatternInfo::default();
    consume_subpattern(&mut cursor, &mut positive)?;

    let mut negative = SubpatternInfo::default();
    let mut has_negative_subpattern = false;
    if cursor.peek() == Some(';') {
        cursor.advance();
        // A trailing ';' does not open an empty negative subpattern
        if cursor.peek().is_some() {
            has_negative_subpattern = true;
            consume_subpattern(&mut cursor, &mut negative)?;
        }
    }

    if cursor.peek().is_some() {
        return Err(cursor.error(
            ErrorKind::UnquotedSpecial,
            "Found unquoted special character",
        ));
    }

    Ok(ParsedPattern {
        pattern: pattern.to_string(),
        positive,
        negative,
        has_negative_subpattern,
    })
}

/// `subpattern := padding? prefix padding? format exponent? padding? suffix padding?`
fn consume_subpattern(
    cursor: &mut Cursor<'_>,
    info: &mut SubpatternInfo,
) -> Result<(), PatternError> {
    consume_padding(cursor, info, PadPosition::BeforePrefix)?;
    info.prefix = consume_affix(cursor, info)?;
    consume_padding(cursor, info, PadPosition::AfterPrefix)?;
    consume_format(cursor, info)?;
    consume_exponent(cursor, info)?;
    consume_padding(cursor, info, PadPosition::BeforeSuffix)?;
    info.suffix = consume_affix(cursor, info)?;
    consume_padding(cursor, info, PadPosition::AfterSuffix)?;
    Ok(())
}
