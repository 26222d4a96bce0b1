//! Number pattern parsing module
//!
//! A hand-written recursive-descent parser for the decimal pattern language
//! (`#,##0.00;(#,##0.00)`, `@@#`, `*x#,##0`, `0.00E+00`, ...). The main entry
//! point is [`ParsedPattern::parse`].
//!
//! The parser never copies affix text: prefixes, suffixes and the pad literal
//! are recorded as [`Endpoints`](crate::types::Endpoints) into the pattern
//! owned by the [`ParsedPattern`].

mod cursor;
mod digits;
mod literals;
mod pattern;

pub use pattern::ParsedPattern;
