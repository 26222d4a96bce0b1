//! Translation between invariant and localized pattern syntax
//!
//! A localized pattern spells every symbol of the pattern language with the
//! locale's string for it (`#.##0,00` in German for `#,##0.00`). Quoted runs
//! pass through untouched. A character that would be read as a symbol on the
//! output side but is plain text on the input side gets wrapped in a quote
//! that the localizer opens and closes itself.

use log::trace;

use crate::error::{ErrorKind, PatternError};
use crate::symbols::SymbolTable;

/// Quote tracking while scanning the input
///
/// The first three states follow quotes found in the input, which are copied
/// to the output. The last two are entered when the output is inside a quote
/// the localizer opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    /// Outside any quote
    Base,
    /// Just after an opening quote in input and output
    FirstInQuote,
    /// Inside a quoted run in input and output
    InQuote,
    /// Just after a closing quote in the input; the output quote is still open
    AfterQuote,
    /// Outside a quote in the input, inside a synthetic quote in the output
    OutputQuoted,
    /// Just after an opening quote in the input, inside a synthetic quote in the output
    FirstInQuoteOutputQuoted,
}

impl QuoteState {
    /// Next state on an input `'`, with the text to emit
    fn on_quote(self) -> (QuoteState, &'static str) {
        match self {
            QuoteState::Base => (QuoteState::FirstInQuote, "'"),
            QuoteState::FirstInQuote => (QuoteState::Base, "'"),
            QuoteState::InQuote => (QuoteState::AfterQuote, ""),
            QuoteState::AfterQuote => (QuoteState::FirstInQuote, "''"),
            QuoteState::OutputQuoted => (QuoteState::FirstInQuoteOutputQuoted, ""),
            QuoteState::FirstInQuoteOutputQuoted => (QuoteState::OutputQuoted, "''"),
        }
    }

    /// Whether input symbols are translated in this state
    fn translates(self) -> bool {
        matches!(
            self,
            QuoteState::Base | QuoteState::AfterQuote | QuoteState::OutputQuoted
        )
    }

    /// Whether an output quote is open that the input no longer asks for
    fn pending_close(self) -> bool {
        matches!(self, QuoteState::AfterQuote | QuoteState::OutputQuoted)
    }
}

/// One (invariant, localized) pair per pattern symbol, in lookup priority order
fn symbol_pairs(symbols: &SymbolTable) -> Vec<(&'static str, String)> {
    const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
    let mut pairs = vec![
        ("%", symbols.percent.clone()),
        ("‰", symbols.per_mille.clone()),
        (".", symbols.decimal_separator.clone()),
        (",", symbols.grouping_separator.clone()),
        ("-", symbols.minus_sign.clone()),
        ("+", symbols.plus_sign.clone()),
        (";", symbols.pattern_separator.clone()),
        ("@", symbols.significant_digit.clone()),
        ("E", symbols.exponential.clone()),
        ("*", symbols.pad_escape.clone()),
        ("#", symbols.digit.clone()),
    ];
    pairs.extend(DIGITS.into_iter().zip(symbols.digits.iter().cloned()));
    // Quotes are the only escape of the pattern language
    for (_, localized) in &mut pairs {
        *localized = localized.replace('\'', "\u{2019}");
    }
    pairs
}

/// Longest non-empty entry `rest` starts with; ties go to the earlier entry
fn longest_match<'t>(rest: &str, table: &[(&'t str, &'t str)]) -> Option<(&'t str, &'t str)> {
    let mut best: Option<(&str, &str)> = None;
    for &(from, to) in table {
        if from.is_empty() || !rest.starts_with(from) {
            continue;
        }
        if best.is_none_or(|(longest, _)| from.len() > longest.len()) {
            best = Some((from, to));
        }
    }
    best
}

/// Convert a pattern between invariant and localized symbols
///
/// With `to_localized` the input is an invariant pattern and the output uses
/// the locale's symbols; otherwise the reverse.
///
/// # Examples
/// ```
/// use number_pattern::localizer::convert_localized;
/// use number_pattern::symbols::SymbolTable;
///
/// let symbols = SymbolTable {
///     decimal_separator: ",".to_string(),
///     grouping_separator: ".".to_string(),
///     ..SymbolTable::default()
/// };
/// let localized = convert_localized("#,##0.00", &symbols, true).unwrap();
/// assert_eq!(localized, "#.##0,00");
/// assert_eq!(convert_localized(&localized, &symbols, false).unwrap(), "#,##0.00");
/// ```
pub fn convert_localized(
    input: &str,
    symbols: &SymbolTable,
    to_localized: bool,
) -> Result<String, PatternError> {
    trace!("converting pattern {input:?} (to_localized: {to_localized})");
    let pairs = symbol_pairs(symbols);
    let table: Vec<(&str, &str)> = pairs
        .iter()
        .map(|(invariant, localized)| {
            if to_localized {
                (*invariant, localized.as_str())
            } else {
                (localized.as_str(), *invariant)
            }
        })
        .collect();

    let mut output = String::with_capacity(input.len());
    let mut state = QuoteState::Base;
    let mut offset = 0;
    while let Some(ch) = input[offset..].chars().next() {
        let rest = &input[offset..];

        if ch == '\'' {
            let (next, emit) = state.on_quote();
            output.push_str(emit);
            state = next;
            offset += 1;
            continue;
        }

        if !state.translates() {
            output.push(ch);
            state = QuoteState::InQuote;
            offset += ch.len_utf8();
            continue;
        }

        if let Some((from, to)) = longest_match(rest, &table) {
            if state.pending_close() {
                output.push('\'');
                state = QuoteState::Base;
            }
            output.push_str(to);
            offset += from.len();
            continue;
        }

        // Plain text that the output side would read as a symbol
        let collides = table
            .iter()
            .any(|(_, to)| !to.is_empty() && rest.starts_with(to));
        if collides {
            if state == QuoteState::Base {
                output.push('\'');
                state = QuoteState::OutputQuoted;
            }
        } else if state.pending_close() {
            output.push('\'');
            state = QuoteState::Base;
        }
        output.push(ch);
        offset += ch.len_utf8();
    }

    if state.pending_close() {
        output.push('\'');
        state = QuoteState::Base;
    }
    if state != QuoteState::Base {
        return Err(PatternError::new(
            ErrorKind::UnterminatedQuote,
            "Unterminated quote in localized pattern",
            input,
            input.len(),
        ));
    }
    Ok(output)
}
