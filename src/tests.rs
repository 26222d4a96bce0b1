use crate::error::ErrorKind;
use crate::parser::ParsedPattern;
use crate::types::*;

fn parse_err(pattern: &str) -> crate::error::PatternError {
    ParsedPattern::parse(pattern).unwrap_err()
}

#[test]
fn test_simple_positive() {
    let result = ParsedPattern::parse("0.00").unwrap();
    let positive = result.positive();
    assert_eq!(positive.integer_numerals, 1);
    assert_eq!(positive.fraction_numerals, 2);
    assert_eq!(positive.fraction_total, 2);
    assert!(positive.has_decimal);
    assert!(!result.has_negative_subpattern());
    assert_eq!(*result.negative(), SubpatternInfo::default());
}

#[test]
fn test_accounting_pattern() {
    let result = ParsedPattern::parse("#,##0.00;(#,##0.00)").unwrap();
    let positive = result.positive();
    assert_eq!(positive.grouping_sizes.primary(), Some(3));
    assert_eq!(positive.grouping_sizes.secondary(), Some(1));
    assert_eq!(positive.grouping_sizes.tertiary(), None);
    assert_eq!(positive.integer_leading_hash_signs, 3);
    assert_eq!(positive.integer_numerals, 1);
    assert_eq!(positive.integer_total, 4);
    assert_eq!(positive.width_except_affixes, 8);

    assert!(result.has_negative_subpattern());
    assert_eq!(result.affix(AffixKey::prefix(true)), "(");
    assert_eq!(result.affix(AffixKey::suffix(true)), ")");
    assert_eq!(result.affix(AffixKey::prefix(false)), "");
    assert_eq!(result.negative().prefix, Endpoints { start: 9, end: 10 });
}

#[test]
fn test_fraction_only() {
    let result = ParsedPattern::parse(".##").unwrap();
    let positive = result.positive();
    assert_eq!(positive.integer_total, 0);
    assert_eq!(positive.fraction_hash_signs, 2);
    assert_eq!(positive.fraction_total, 2);
    assert!(!result.has_body());
}

#[test]
fn test_significant_digits() {
    let result = ParsedPattern::parse("@@@#").unwrap();
    let positive = result.positive();
    assert_eq!(positive.integer_at_signs, 3);
    assert_eq!(positive.integer_trailing_hash_signs, 1);
    assert_eq!(positive.integer_leading_hash_signs, 0);
    assert_eq!(positive.integer_numerals, 0);
}

#[test]
fn test_digit_syntax_is_exclusive() {
    for pattern in ["@@@#", "#@@", "#,##0.00", "0", "@", "##0.##E0"] {
        let result = ParsedPattern::parse(pattern).unwrap();
        let positive = result.positive();
        assert!(
            !(positive.integer_at_signs > 0 && positive.integer_numerals > 0),
            "{pattern} mixes digit syntaxes"
        );
    }
    assert_eq!(parse_err("0@").kind, ErrorKind::UnexpectedToken);
    assert_eq!(parse_err("@0").kind, ErrorKind::UnexpectedToken);
    assert_eq!(parse_err("@#@").kind, ErrorKind::UnexpectedToken);
}

#[test]
fn test_hash_after_zero() {
    let err = parse_err("0#");
    assert_eq!(err.kind, ErrorKind::UnexpectedToken);
    assert_eq!(err.offset, 1);
    assert_eq!(parse_err("#,0#0").kind, ErrorKind::UnexpectedToken);
    assert_eq!(parse_err("0.#0").kind, ErrorKind::UnexpectedToken);
}

#[test]
fn test_grouping_errors() {
    let err = parse_err("#,##0,");
    assert_eq!(err.kind, ErrorKind::UnexpectedToken);
    assert_eq!(err.message, "Trailing grouping separator is invalid");

    let err = parse_err("#,,##0");
    assert_eq!(err.kind, ErrorKind::PatternSyntax);
    assert_eq!(err.message, "Grouping width of zero is invalid");
}

#[test]
fn test_three_grouping_levels() {
    let result = ParsedPattern::parse("#,##,##0").unwrap();
    let grouping = result.positive().grouping_sizes;
    assert_eq!(grouping.primary(), Some(3));
    assert_eq!(grouping.secondary(), Some(2));
    assert_eq!(grouping.tertiary(), Some(1));
}

#[test]
fn test_exponent() {
    let result = ParsedPattern::parse("##0E0").unwrap();
    assert_eq!(result.positive().exponent_zeros, 1);
    assert!(!result.positive().exponent_has_plus_sign);

    let result = ParsedPattern::parse("0.00E+00").unwrap();
    assert_eq!(result.positive().exponent_zeros, 2);
    assert!(result.positive().exponent_has_plus_sign);
    assert_eq!(result.positive().width_except_affixes, 8);

    let err = parse_err("#,##0E0");
    assert_eq!(err.kind, ErrorKind::MalformedExponentialPattern);
}

#[test]
fn test_padding() {
    let result = ParsedPattern::parse("*x#,##0").unwrap();
    assert_eq!(result.positive().padding_location, Some(PadPosition::BeforePrefix));
    assert_eq!(result.affix(AffixKey::padding(false)), "x");

    let result = ParsedPattern::parse("$*'ab'0").unwrap();
    assert_eq!(result.positive().padding_location, Some(PadPosition::AfterPrefix));
    assert_eq!(result.affix(AffixKey::padding(false)), "'ab'");
    assert_eq!(result.affix(AffixKey::prefix(false)), "$");

    let result = ParsedPattern::parse("0*  %").unwrap();
    assert_eq!(result.positive().padding_location, Some(PadPosition::BeforeSuffix));
    assert_eq!(result.affix(AffixKey::suffix(false)), " %");

    let result = ParsedPattern::parse("0 %*-").unwrap();
    assert_eq!(result.positive().padding_location, Some(PadPosition::AfterSuffix));
}

#[test]
fn test_multiple_pad_specifiers() {
    let err = parse_err("*x0*y");
    assert_eq!(err.kind, ErrorKind::MultiplePadSpecifiers);
    assert_eq!(err.offset, 3);
}

#[test]
fn test_pad_at_end_of_pattern() {
    let err = parse_err("0*");
    assert_eq!(err.kind, ErrorKind::PatternSyntax);
    assert_eq!(err.message, "Expected unquoted literal but found end of pattern");
}

#[test]
fn test_unterminated_quote_in_affix() {
    let err = parse_err("'abc0");
    assert_eq!(err.kind, ErrorKind::PatternSyntax);
    assert_eq!(err.message, "Expected quoted literal but found end of pattern");
}

#[test]
fn test_affix_flags() {
    let result = ParsedPattern::parse("¤#,##0.00;-¤#,##0.00").unwrap();
    assert!(result.positive().has_currency_sign);
    assert!(result.has_currency_sign());
    assert!(result.negative_has_minus_sign());
    assert!(!result.positive_has_plus_sign());

    // Quoted, so not a percent sign
    let result = ParsedPattern::parse("'%'0").unwrap();
    assert!(!result.positive().has_percent_sign);
    assert!(!result.contains_symbol_type(crate::affix::AffixPatternType::PercentSign));

    let result = ParsedPattern::parse("0‰").unwrap();
    assert!(result.positive().has_per_mille_sign);
    assert!(result.contains_symbol_type(crate::affix::AffixPatternType::PerMilleSign));
}

#[test]
fn test_trailing_separator_has_no_negative() {
    let result = ParsedPattern::parse("0.0;").unwrap();
    assert!(!result.has_negative_subpattern());
}

#[test]
fn test_unquoted_special() {
    let err = parse_err("0;0;0");
    assert_eq!(err.kind, ErrorKind::UnquotedSpecial);
    assert_eq!(err.offset, 3);
    assert_eq!(
        err.to_string(),
        "Malformed pattern \"0;0;0\": Found unquoted special character at position 3"
    );
}

#[test]
fn test_rounding_increment() {
    let result = ParsedPattern::parse("#,##0.05").unwrap();
    assert_eq!(result.positive().rounding.to_plain_string(), "0.05");

    let result = ParsedPattern::parse("#0.00").unwrap();
    assert!(result.positive().rounding.is_zero());

    let result = ParsedPattern::parse("50").unwrap();
    assert_eq!(result.positive().rounding.to_plain_string(), "50");
}

#[test]
fn test_rounding_increment_has_no_precision_limit() {
    let pattern = format!("0.{}1", "0".repeat(40));
    let result = ParsedPattern::parse(&pattern).unwrap();
    assert_eq!(result.positive().rounding.to_plain_string(), &pattern[..]);

    let result = ParsedPattern::parse("#,##0.00000000000000000000000000005").unwrap();
    assert_eq!(result.positive().fraction_total, 29);
    assert!(!result.positive().rounding.is_zero());

    let result = ParsedPattern::parse("100000000000000000000000000000").unwrap();
    assert_eq!(
        result.positive().rounding.to_plain_string(),
        "100000000000000000000000000000"
    );
}

#[test]
fn test_multibyte_offsets() {
    let result = ParsedPattern::parse("€ 0;€ -0").unwrap();
    assert_eq!(result.affix(AffixKey::prefix(false)), "€ ");
    assert_eq!(result.affix(AffixKey::prefix(true)), "€ -");
    assert_eq!(result.positive().prefix.len(), "€ ".len());
}
