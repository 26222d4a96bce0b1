use number_pattern::mapper::parse_to_properties;
use number_pattern::parser::ParsedPattern;
use number_pattern::provider::{AffixPatternProvider, PropertiesAffixProvider};
use number_pattern::selector::pattern_info_to_string;
use number_pattern::types::{IgnoreRounding, Plural, SignDisplay, Signum};

fn affixes(
    provider: &dyn AffixPatternProvider,
    signum: Signum,
    display: SignDisplay,
) -> (String, String) {
    (
        pattern_info_to_string(provider, true, signum, display, None, false),
        pattern_info_to_string(provider, false, signum, display, None, false),
    )
}

#[test]
fn test_always_prepends_plus() {
    let parsed = ParsedPattern::parse("#,##0.00").unwrap();
    let (prefix, suffix) = affixes(&parsed, Signum::Positive, SignDisplay::Always);
    assert_eq!(prefix, "+");
    assert_eq!(suffix, "");
}

#[test]
fn test_negative_without_subpattern_prepends_minus() {
    let parsed = ParsedPattern::parse("#,##0.00").unwrap();
    let (prefix, suffix) = affixes(&parsed, Signum::Negative, SignDisplay::Auto);
    assert_eq!(prefix, "-");
    assert_eq!(suffix, "");

    let parsed = ParsedPattern::parse("$#,##0.00").unwrap();
    let (prefix, _) = affixes(&parsed, Signum::Negative, SignDisplay::Auto);
    assert_eq!(prefix, "-$");
}

#[test]
fn test_accounting_subpattern() {
    let parsed = ParsedPattern::parse("#,##0.00;(#,##0.00)").unwrap();
    assert_eq!(
        affixes(&parsed, Signum::Negative, SignDisplay::Accounting),
        ("(".to_string(), ")".to_string())
    );
    assert_eq!(
        affixes(&parsed, Signum::Positive, SignDisplay::Accounting),
        (String::new(), String::new())
    );
    assert_eq!(
        affixes(&parsed, Signum::Positive, SignDisplay::AccountingAlways),
        ("+".to_string(), String::new())
    );
    assert_eq!(
        affixes(&parsed, Signum::Zero, SignDisplay::AccountingExceptZero),
        (String::new(), String::new())
    );
}

#[test]
fn test_minus_in_negative_subpattern_becomes_plus() {
    let parsed = ParsedPattern::parse("0 ¤;-0 ¤").unwrap();
    let (prefix, suffix) = affixes(&parsed, Signum::Positive, SignDisplay::ExceptZero);
    assert_eq!(prefix, "+");
    assert_eq!(suffix, " ¤");
}

#[test]
fn test_per_mille_replaces_percent() {
    let parsed = ParsedPattern::parse("0%").unwrap();
    let suffix = pattern_info_to_string(
        &parsed,
        false,
        Signum::Positive,
        SignDisplay::Auto,
        Some(Plural::Other),
        true,
    );
    assert_eq!(suffix, "‰");
}

#[test]
fn test_properties_provider() {
    let mut props = parse_to_properties("#,##0.00", IgnoreRounding::Never).unwrap();
    props.positive_suffix = Some(" kg".to_string());
    let provider = PropertiesAffixProvider::new(&props).unwrap();

    // The negative suffix defaults to the positive suffix pattern, not the override
    assert!(provider.has_negative_subpattern());
    assert_eq!(
        affixes(&provider, Signum::Negative, SignDisplay::Auto),
        ("-".to_string(), String::new())
    );
    assert_eq!(
        affixes(&provider, Signum::Positive, SignDisplay::Auto),
        (String::new(), " kg".to_string())
    );
}

#[test]
fn test_properties_provider_plain_minus() {
    let props = parse_to_properties("$#,##0.00", IgnoreRounding::Never).unwrap();
    let provider = PropertiesAffixProvider::new(&props).unwrap();
    assert!(!provider.has_negative_subpattern());
    assert_eq!(
        affixes(&provider, Signum::Negative, SignDisplay::Auto),
        ("-$".to_string(), String::new())
    );
    assert_eq!(
        affixes(&provider, Signum::Negative, SignDisplay::Never),
        ("$".to_string(), String::new())
    );
}
