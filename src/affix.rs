//! Affix pattern tokens
//!
//! Prefix and suffix text in a number pattern is itself a tiny language: the
//! characters `-`, `+`, `%`, `‰` and runs of `¤` are placeholders for
//! locale symbols, and `'` quotes everything else. This module tokenizes that
//! language and answers the questions the mapper and generator ask about it.

use winnow::combinator::{alt, cut_err, delimited, repeat};
use winnow::token::{any, none_of, take_while};
use winnow::{ModalResult, Parser};

use crate::error::{ErrorKind, PatternError};

/// Kind of a placeholder token inside an affix pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffixPatternType {
    /// `-`
    MinusSign,
    /// `+`
    PlusSign,
    /// `%`
    PercentSign,
    /// `‰`
    PerMilleSign,
    /// `¤`
    CurrencySingle,
    /// `¤¤`
    CurrencyDouble,
    /// `¤¤¤`
    CurrencyTriple,
    /// `¤¤¤¤`
    CurrencyQuad,
    /// `¤¤¤¤¤`
    CurrencyQuint,
    /// Six or more `¤`
    CurrencyOverflow,
}

impl AffixPatternType {
    fn currency(run: usize) -> Self {
        match run {
            1 => AffixPatternType::CurrencySingle,
            2 => AffixPatternType::CurrencyDouble,
            3 => AffixPatternType::CurrencyTriple,
            4 => AffixPatternType::CurrencyQuad,
            5 => AffixPatternType::CurrencyQuint,
            _ => AffixPatternType::CurrencyOverflow,
        }
    }

    pub fn is_currency(self) -> bool {
        !matches!(
            self,
            AffixPatternType::MinusSign
                | AffixPatternType::PlusSign
                | AffixPatternType::PercentSign
                | AffixPatternType::PerMilleSign
        )
    }
}

/// One token of an affix pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffixToken {
    /// Text rendered as-is
    Literal(char),
    /// Sign, percent or per-mille placeholder
    Symbol(AffixPatternType),
    /// A run of this many `¤`
    Currency(usize),
}

impl AffixToken {
    pub fn kind(&self) -> Option<AffixPatternType> {
        match self {
            AffixToken::Literal(_) => None,
            AffixToken::Symbol(kind) => Some(*kind),
            AffixToken::Currency(run) => Some(AffixPatternType::currency(*run)),
        }
    }

    fn width(&self) -> usize {
        match self {
            AffixToken::Currency(run) => *run,
            _ => 1,
        }
    }
}

fn escaped_quote(input: &mut &str) -> ModalResult<Vec<AffixToken>> {
    "''".value(vec![AffixToken::Literal('\'')])
        .parse_next(input)
}

fn quoted_run(input: &mut &str) -> ModalResult<Vec<AffixToken>> {
    delimited(
        '\'',
        repeat(0.., alt(("''".value('\''), none_of('\''))))
            .map(|chars: Vec<char>| chars.into_iter().map(AffixToken::Literal).collect()),
        cut_err('\''),
    )
    .parse_next(input)
}

fn currency_run(input: &mut &str) -> ModalResult<Vec<AffixToken>> {
    take_while(1.., '¤')
        .map(|run: &str| vec![AffixToken::Currency(run.chars().count())])
        .parse_next(input)
}

fn symbol_or_literal(input: &mut &str) -> ModalResult<Vec<AffixToken>> {
    any.map(|ch: char| {
        let token = match ch {
            '-' => AffixToken::Symbol(AffixPatternType::MinusSign),
            '+' => AffixToken::Symbol(AffixPatternType::PlusSign),
            '%' => AffixToken::Symbol(AffixPatternType::PercentSign),
            '‰' => AffixToken::Symbol(AffixPatternType::PerMilleSign),
            other => AffixToken::Literal(other),
        };
        vec![token]
    })
    .parse_next(input)
}

fn affix_tokens(input: &mut &str) -> ModalResult<Vec<AffixToken>> {
    let groups: Vec<Vec<AffixToken>> = repeat(
        0..,
        alt((escaped_quote, quoted_run, currency_run, symbol_or_literal)),
    )
    .parse_next(input)?;
    Ok(groups.into_iter().flatten().collect())
}

/// Split an affix pattern into tokens
pub fn tokenize(pattern: &str) -> Result<Vec<AffixToken>, PatternError> {
    let mut input = pattern;
    affix_tokens.parse_next(&mut input).map_err(|_| {
        PatternError::new(
            ErrorKind::UnterminatedQuote,
            "Unterminated quote in affix pattern",
            pattern,
            pattern.len(),
        )
    })
}

/// Number of code points the affix is expected to render to
///
/// Quotes are not counted and each `¤` counts as one, so the result is an
/// estimate for anything containing placeholders.
pub fn estimate_length(pattern: &str) -> Result<usize, PatternError> {
    Ok(tokenize(pattern)?.iter().map(AffixToken::width).sum())
}

/// Whether the affix contains a token of `kind`
pub fn contains_type(pattern: &str, kind: AffixPatternType) -> Result<bool, PatternError> {
    Ok(tokenize(pattern)?
        .iter()
        .any(|token| token.kind() == Some(kind)))
}

/// Whether the affix contains any currency placeholder
pub fn has_currency_symbols(pattern: &str) -> Result<bool, PatternError> {
    Ok(tokenize(pattern)?
        .iter()
        .any(|token| token.kind().is_some_and(AffixPatternType::is_currency)))
}

/// Turn literal text into an affix pattern that renders exactly that text
pub fn escape(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut quoted = false;
    for ch in text.chars() {
        match ch {
            '\'' => output.push_str("''"),
            '-' | '+' | '%' | '‰' | '¤' => {
                if !quoted {
                    output.push('\'');
                    quoted = true;
                }
                output.push(ch);
            }
            _ => {
                if quoted {
                    output.push('\'');
                    quoted = false;
                }
                output.push(ch);
            }
        }
    }
    if quoted {
        output.push('\'');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_mixed() {
        let tokens = tokenize("'a''b'-¤¤x").unwrap();
        assert_eq!(
            tokens,
            vec![
                AffixToken::Literal('a'),
                AffixToken::Literal('\''),
                AffixToken::Literal('b'),
                AffixToken::Symbol(AffixPatternType::MinusSign),
                AffixToken::Currency(2),
                AffixToken::Literal('x'),
            ]
        );
    }

    #[test]
    fn test_quoted_specials_are_literal() {
        let tokens = tokenize("'%'").unwrap();
        assert_eq!(tokens, vec![AffixToken::Literal('%')]);
        assert!(!contains_type("'%'", AffixPatternType::PercentSign).unwrap());
        assert!(contains_type("%", AffixPatternType::PercentSign).unwrap());
    }

    #[test]
    fn test_estimate_length() {
        assert_eq!(estimate_length("").unwrap(), 0);
        assert_eq!(estimate_length("'abc'").unwrap(), 3);
        assert_eq!(estimate_length("''").unwrap(), 1);
        assert_eq!(estimate_length("¤¤ ").unwrap(), 3);
        assert_eq!(estimate_length("(").unwrap(), 1);
    }

    #[test]
    fn test_unterminated_quote() {
        let err = tokenize("'abc").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnterminatedQuote);
        assert!(estimate_length("x'").is_err());
    }

    #[test]
    fn test_currency_detection() {
        assert!(has_currency_symbols("¤").unwrap());
        assert!(has_currency_symbols("¤¤¤¤¤¤").unwrap());
        assert!(!has_currency_symbols("'¤'").unwrap());
        assert!(contains_type("¤¤¤", AffixPatternType::CurrencyTriple).unwrap());
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("abc"), "abc");
        assert_eq!(escape("-x'"), "'-'x''");
        assert_eq!(escape("a%b"), "a'%'b");
        assert_eq!(escape("+-"), "'+-'");
        assert_eq!(tokenize(&escape("5% off")).unwrap().len(), 6);
    }
}
