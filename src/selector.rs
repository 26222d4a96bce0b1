//! Affix selection at render time
//!
//! Picks the prefix or suffix pattern a value of a given sign renders with and
//! applies sign and per-mille substitution. The result is still an affix
//! pattern: `-` and `+` are placeholders for the locale's sign symbols.

use crate::provider::AffixPatternProvider;
use crate::types::{AffixKey, Plural, SignDisplay, Signum};

/// Whether a `+` is rendered where the pattern has `-`
fn plus_replaces_minus(
    provider: &dyn AffixPatternProvider,
    signum: Signum,
    sign_display: SignDisplay,
) -> bool {
    let shows_plus = match sign_display {
        SignDisplay::Always | SignDisplay::AccountingAlways => true,
        SignDisplay::ExceptZero | SignDisplay::AccountingExceptZero => signum == Signum::Positive,
        SignDisplay::Auto | SignDisplay::Never | SignDisplay::Accounting => false,
    };
    signum != Signum::Negative && shows_plus && !provider.positive_has_plus_sign()
}

/// Render the affix pattern for a value of sign `signum`
///
/// # Examples
/// ```
/// use number_pattern::parser::ParsedPattern;
/// use number_pattern::selector::pattern_info_to_string;
/// use number_pattern::types::{SignDisplay, Signum};
///
/// let parsed = ParsedPattern::parse("#,##0.00;(#,##0.00)").unwrap();
/// let prefix = pattern_info_to_string(&parsed, true, Signum::Negative, SignDisplay::Auto, None, false);
/// assert_eq!(prefix, "(");
/// ```
pub fn pattern_info_to_string(
    provider: &dyn AffixPatternProvider,
    is_prefix: bool,
    signum: Signum,
    sign_display: SignDisplay,
    plural: Option<Plural>,
    per_mille_replaces_percent: bool,
) -> String {
    let plus_replaces_minus = plus_replaces_minus(provider, signum, sign_display);

    let use_negative = provider.has_negative_subpattern()
        && (signum == Signum::Negative
            || (provider.negative_has_minus_sign() && plus_replaces_minus));

    let key = if is_prefix {
        AffixKey::prefix(use_negative)
    } else {
        AffixKey::suffix(use_negative)
    }
    .with_plural(plural);

    let prepend_sign = if !is_prefix || use_negative {
        false
    } else if signum == Signum::Negative {
        sign_display != SignDisplay::Never
    } else {
        plus_replaces_minus
    };

    let affix = provider.affix(key);
    let mut output = String::with_capacity(affix.len() + 1);
    let sign = prepend_sign.then_some('-');
    for ch in sign.into_iter().chain(affix.chars()) {
        let ch = match ch {
            '-' if plus_replaces_minus => '+',
            '%' if per_mille_replaces_percent => '‰',
            other => other,
        };
        output.push(ch);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParsedPattern;

    fn prefix(pattern: &str, signum: Signum, display: SignDisplay) -> String {
        let parsed = ParsedPattern::parse(pattern).unwrap();
        pattern_info_to_string(&parsed, true, signum, display, None, false)
    }

    #[test]
    fn test_plus_replaces_minus_rules() {
        assert_eq!(prefix("0", Signum::Zero, SignDisplay::Always), "+");
        assert_eq!(prefix("0", Signum::Zero, SignDisplay::ExceptZero), "");
        assert_eq!(prefix("0", Signum::Positive, SignDisplay::ExceptZero), "+");
        assert_eq!(prefix("0", Signum::Positive, SignDisplay::Auto), "");
        // An explicit plus in the pattern is already a sign
        assert_eq!(prefix("+0", Signum::Positive, SignDisplay::Always), "+");
    }

    #[test]
    fn test_never_hides_minus() {
        assert_eq!(prefix("0", Signum::Negative, SignDisplay::Never), "");
        assert_eq!(prefix("0", Signum::Negative, SignDisplay::Auto), "-");
    }

    #[test]
    fn test_negative_subpattern_with_forced_plus() {
        // "-" in the negative subpattern turns into "+" for positive values
        assert_eq!(prefix("0;-0 ", Signum::Positive, SignDisplay::Always), "+");
        assert_eq!(prefix("0;(0)", Signum::Positive, SignDisplay::Always), "+");
    }

    #[test]
    fn test_suffix_never_gets_a_sign() {
        let parsed = ParsedPattern::parse("0%").unwrap();
        let suffix =
            pattern_info_to_string(&parsed, false, Signum::Negative, SignDisplay::Always, None, true);
        assert_eq!(suffix, "‰");
    }
}
