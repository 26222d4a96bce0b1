//! Locale symbol table
//!
//! A [`SymbolTable`] holds the locale strings the localizer substitutes for the
//! invariant pattern symbols. Loading locale data is left to the caller; a
//! table is usually read from a TOML file with [`SymbolTable::from_toml`].

use serde::{Deserialize, Serialize};

/// Locale strings for every symbol of the pattern language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolTable {
    pub percent: String,
    pub per_mille: String,
    pub decimal_separator: String,
    pub grouping_separator: String,
    pub minus_sign: String,
    pub plus_sign: String,
    /// Separates the positive and negative subpatterns
    pub pattern_separator: String,
    pub significant_digit: String,
    pub exponential: String,
    pub pad_escape: String,
    /// The optional digit placeholder
    pub digit: String,
    /// Locale digits zero through nine
    pub digits: [String; 10],
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self {
            percent: "%".to_string(),
            per_mille: "‰".to_string(),
            decimal_separator: ".".to_string(),
            grouping_separator: ",".to_string(),
            minus_sign: "-".to_string(),
            plus_sign: "+".to_string(),
            pattern_separator: ";".to_string(),
            significant_digit: "@".to_string(),
            exponential: "E".to_string(),
            pad_escape: "*".to_string(),
            digit: "#".to_string(),
            digits: ascii_digits(),
        }
    }
}

impl SymbolTable {
    /// Load a table from TOML; missing keys keep the invariant symbol
    ///
    /// # Examples
    /// ```
    /// use number_pattern::symbols::SymbolTable;
    ///
    /// let de = SymbolTable::from_toml(
    ///     r#"
    ///     decimal_separator = ","
    ///     grouping_separator = "."
    ///     "#,
    /// )
    /// .unwrap();
    /// assert_eq!(de.decimal_separator, ",");
    /// assert_eq!(de.percent, "%");
    /// ```
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Replace the ten digits with the consecutive code points starting at `zero`
    ///
    /// Returns `None` when `zero` is too close to the end of the code space or
    /// the run crosses a surrogate.
    pub fn with_zero_digit(mut self, zero: char) -> Option<Self> {
        let mut digits: [String; 10] = Default::default();
        for (i, slot) in digits.iter_mut().enumerate() {
            *slot = char::from_u32(zero as u32 + i as u32)?.to_string();
        }
        self.digits = digits;
        Some(self)
    }
}

fn ascii_digits() -> [String; 10] {
    std::array::from_fn(|i| char::from_digit(i as u32, 10).unwrap_or('0').to_string())
}
