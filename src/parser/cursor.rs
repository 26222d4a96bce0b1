use winnow::combinator::delimited;
use winnow::stream::{Offset, Stream};
use winnow::token::{take_till, take_while};
use winnow::{ModalResult, Parser};

use crate::error::{ErrorKind, PatternError};

/// Code-point read cursor over an immutable pattern
///
/// All mutable parse position lives here; one cursor per parse.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'p> {
    source: &'p str,
    input: &'p str,
}

impl<'p> Cursor<'p> {
    pub fn new(source: &'p str) -> Self {
        Self {
            source,
            input: source,
        }
    }

    /// Byte offset of the next code point
    pub fn offset(&self) -> usize {
        self.input.offset_from(&self.source)
    }

    /// The next code point, or `None` past the end
    pub fn peek(&self) -> Option<char> {
        self.input.chars().next()
    }

    /// Return the next code point and step over it
    pub fn advance(&mut self) -> Option<char> {
        self.input.next_token()
    }

    /// Consume `'...'`, returning the text between the quotes.
    ///
    /// An unterminated run consumes the rest of the input and yields `None`.
    pub fn quoted(&mut self) -> Option<&'p str> {
        let mut rest = self.input;
        match quoted_run.parse_next(&mut rest) {
            Ok(text) => {
                self.input = rest;
                Some(text)
            }
            Err(_) => {
                self.input = &self.input[self.input.len()..];
                None
            }
        }
    }

    /// Consume a run of `ch` and return its length in code points
    pub fn run_of(&mut self, ch: char) -> u32 {
        char_run(&mut self.input, ch)
            .map(|run| run.chars().count() as u32)
            .unwrap_or(0)
    }

    pub fn error(&self, kind: ErrorKind, message: &'static str) -> PatternError {
        PatternError::new(kind, message, self.source, self.offset())
    }
}

fn quoted_run<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited('\'', take_till(0.., '\''), '\'').parse_next(input)
}

fn char_run<'i>(input: &mut &'i str, ch: char) -> ModalResult<&'i str> {
    take_while(0.., ch).parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_advance_multibyte() {
        let mut cursor = Cursor::new("¤#");
        assert_eq!(cursor.peek(), Some('¤'));
        assert_eq!(cursor.advance(), Some('¤'));
        assert_eq!(cursor.offset(), '¤'.len_utf8());
        assert_eq!(cursor.advance(), Some('#'));
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn test_quoted() {
        let mut cursor = Cursor::new("'a#'0");
        assert_eq!(cursor.quoted(), Some("a#"));
        assert_eq!(cursor.peek(), Some('0'));

        let mut open = Cursor::new("'abc");
        assert_eq!(open.quoted(), None);
        assert_eq!(open.offset(), 4);
    }

    #[test]
    fn test_run_of() {
        let mut cursor = Cursor::new("000x");
        assert_eq!(cursor.run_of('0'), 3);
        assert_eq!(cursor.run_of('0'), 0);
        assert_eq!(cursor.peek(), Some('x'));
    }
}
