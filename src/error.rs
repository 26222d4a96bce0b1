//! Error types shared by the parser, generator and localizer

use std::fmt;

/// Category of a pattern failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Generic grammar violation (unterminated literal, zero-width group, ...)
    PatternSyntax,
    /// A token that is not allowed at this position (`#` after `0`, `@` mixed with `0`, ...)
    UnexpectedToken,
    /// More than one `*` pad specifier in one subpattern
    MultiplePadSpecifiers,
    /// Scientific notation combined with grouping
    MalformedExponentialPattern,
    /// Input left over after both subpatterns were consumed
    UnquotedSpecial,
    /// A quoted run that is never closed
    UnterminatedQuote,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::PatternSyntax => "pattern syntax error",
            ErrorKind::UnexpectedToken => "unexpected token",
            ErrorKind::MultiplePadSpecifiers => "multiple pad specifiers",
            ErrorKind::MalformedExponentialPattern => "malformed exponential pattern",
            ErrorKind::UnquotedSpecial => "unquoted special character",
            ErrorKind::UnterminatedQuote => "unterminated quote",
        };
        f.write_str(name)
    }
}

/// A failed parse, generate or localize call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternError {
    /// What went wrong
    pub kind: ErrorKind,
    /// Human readable description
    pub message: &'static str,
    /// The text being processed when the error occurred
    pub pattern: String,
    /// Byte offset into `pattern` where the violation was detected
    pub offset: usize,
}

impl PatternError {
    pub(crate) fn new(
        kind: ErrorKind,
        message: &'static str,
        pattern: &str,
        offset: usize,
    ) -> Self {
        Self {
            kind,
            message,
            pattern: pattern.to_string(),
            offset,
        }
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Malformed pattern \"{}\": {} at position {}",
            self.pattern, self.message, self.offset
        )
    }
}

impl std::error::Error for PatternError {}

pub type Result<T> = std::result::Result<T, PatternError>;
