use crate::error::{ErrorKind, PatternError};
use crate::parser::cursor::Cursor;
use crate::types::SubpatternInfo;

fn digit_value(ch: char) -> Option<u8> {
    ch.to_digit(10).map(|d| d as u8)
}

/// `format := integer ('.' fraction)?`
pub(crate) fn consume_format(
    cursor: &mut Cursor<'_>,
    info: &mut SubpatternInfo,
) -> Result<(), PatternError> {
    consume_integer_format(cursor, info)?;
    if cursor.peek() == Some('.') {
        cursor.advance();
        info.has_decimal = true;
        info.width_except_affixes += 1;
        consume_fraction_format(cursor, info)?;
    }
    Ok(())
}

fn consume_integer_format(
    cursor: &mut Cursor<'_>,
    info: &mut SubpatternInfo,
) -> Result<(), PatternError> {
    while let Some(ch) = cursor.peek() {
        match ch {
            ',' => {
                info.width_except_affixes += 1;
                info.grouping_sizes.open_group();
            }
            '#' => {
                if info.integer_numerals > 0 {
                    return Err(cursor.error(
                        ErrorKind::UnexpectedToken,
                        "# cannot follow 0 before decimal point",
                    ));
                }
                info.width_except_affixes += 1;
                info.grouping_sizes.widen();
                if info.integer_at_signs > 0 {
                    info.integer_trailing_hash_signs += 1;
                } else {
                    info.integer_leading_hash_signs += 1;
                }
                info.integer_total += 1;
            }
            '@' => {
                if info.integer_numerals > 0 {
                    return Err(cursor.error(ErrorKind::UnexpectedToken, "Cannot mix 0 and @"));
                }
                if info.integer_trailing_hash_signs > 0 {
                    return Err(cursor.error(
                        ErrorKind::UnexpectedToken,
                        "Cannot nest # inside of a run of @",
                    ));
                }
                info.width_except_affixes += 1;
                info.grouping_sizes.widen();
                info.integer_at_signs += 1;
                info.integer_total += 1;
            }
            '0'..='9' => {
                if info.integer_at_signs > 0 {
                    return Err(cursor.error(ErrorKind::UnexpectedToken, "Cannot mix @ and 0"));
                }
                info.width_except_affixes += 1;
                info.grouping_sizes.widen();
                info.integer_numerals += 1;
                info.integer_total += 1;
                // Leading zeros carry no increment information
                if !info.rounding.is_zero() || ch != '0' {
                    let digit = digit_value(ch).unwrap_or(0);
                    info.rounding.append_digit(digit, 0, true);
                }
            }
            _ => break,
        }
        cursor.advance();
    }

    // Reject a trailing ',' and two ',' next to each other
    let grouping = info.grouping_sizes;
    if grouping.primary() == Some(0) && grouping.secondary().is_some() {
        return Err(cursor.error(
            ErrorKind::UnexpectedToken,
            "Trailing grouping separator is invalid",
        ));
    }
    if grouping.secondary() == Some(0) && grouping.tertiary().is_some() {
        return Err(cursor.error(
            ErrorKind::PatternSyntax,
            "Grouping width of zero is invalid",
        ));
    }
    Ok(())
}

fn consume_fraction_format(
    cursor: &mut Cursor<'_>,
    info: &mut SubpatternInfo,
) -> Result<(), PatternError> {
    let mut zero_streak = 0u32;
    while let Some(ch) = cursor.peek() {
        match ch {
            '#' => {
                info.width_except_affixes += 1;
                info.fraction_hash_signs += 1;
                info.fraction_total += 1;
                zero_streak += 1;
            }
            '0'..='9' => {
                if info.fraction_hash_signs > 0 {
                    return Err(cursor.error(
                        ErrorKind::UnexpectedToken,
                        "0 cannot follow # after decimal point",
                    ));
                }
                info.width_except_affixes += 1;
                info.fraction_numerals += 1;
                info.fraction_total += 1;
                if ch == '0' {
                    zero_streak += 1;
                } else {
                    let digit = digit_value(ch).unwrap_or(0);
                    info.rounding.append_digit(digit, zero_streak, false);
                    zero_streak = 0;
                }
            }
            _ => return Ok(()),
        }
        cursor.advance();
    }
    Ok(())
}

/// `exponent := 'E' '+'? '0'*`
pub(crate) fn consume_exponent(
    cursor: &mut Cursor<'_>,
    info: &mut SubpatternInfo,
) -> Result<(), PatternError> {
    if cursor.peek() != Some('E') {
        return Ok(());
    }
    if info.grouping_sizes.secondary().is_some() {
        return Err(cursor.error(
            ErrorKind::MalformedExponentialPattern,
            "Cannot have grouping separator in scientific notation",
        ));
    }
    cursor.advance();
    info.width_except_affixes += 1;
    if cursor.peek() == Some('+') {
        cursor.advance();
        info.exponent_has_plus_sign = true;
        info.width_except_affixes += 1;
    }
    let zeros = cursor.run_of('0');
    info.exponent_zeros += zeros;
    info.width_except_affixes += zeros;
    Ok(())
}
