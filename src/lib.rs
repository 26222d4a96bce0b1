pub mod affix;
pub mod error;
pub mod generator;
pub mod localizer;
pub mod mapper;
pub mod parser;
pub mod properties;
pub mod provider;
pub mod rounding;
pub mod selector;
pub mod symbols;
pub mod types;

// 导出主要 API
pub use error::{ErrorKind, PatternError};
pub use generator::properties_to_pattern_string;
pub use localizer::convert_localized;
pub use mapper::{parse_to_existing_properties, parse_to_properties};
pub use parser::ParsedPattern;
pub use properties::{Precision, Properties};
pub use provider::{AffixPatternProvider, PropertiesAffixProvider};
pub use selector::pattern_info_to_string;
pub use symbols::SymbolTable;
pub use types::*;

#[cfg(test)]
mod tests;
