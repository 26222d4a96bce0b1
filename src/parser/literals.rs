use crate::error::{ErrorKind, PatternError};
use crate::parser::cursor::Cursor;
use crate::types::{Endpoints, PadPosition, SubpatternInfo};

/// Characters that end a prefix or suffix when unquoted
fn is_special(ch: char) -> bool {
    matches!(ch, '#' | '@' | ';' | '*' | '.' | ',' | '0'..='9')
}

/// `padding := '*' literal`, allowed once per subpattern
pub(crate) fn consume_padding(
    cursor: &mut Cursor<'_>,
    info: &mut SubpatternInfo,
    location: PadPosition,
) -> Result<(), PatternError> {
    if cursor.peek() != Some('*') {
        return Ok(());
    }
    if info.has_padding() {
        return Err(cursor.error(
            ErrorKind::MultiplePadSpecifiers,
            "Cannot have multiple pad specifiers",
        ));
    }
    info.padding_location = Some(location);
    cursor.advance();
    let start = cursor.offset();
    consume_literal(cursor)?;
    info.padding = Endpoints {
        start,
        end: cursor.offset(),
    };
    Ok(())
}

/// `affix := literal*`, stopping at the first unquoted special character
pub(crate) fn consume_affix(
    cursor: &mut Cursor<'_>,
    info: &mut SubpatternInfo,
) -> Result<Endpoints, PatternError> {
    let start = cursor.offset();
    while let Some(ch) = cursor.peek() {
        if is_special(ch) {
            break;
        }
        match ch {
            '%' => info.has_percent_sign = true,
            '‰' => info.has_per_mille_sign = true,
            '¤' => info.has_currency_sign = true,
            '-' => info.has_minus_sign = true,
            '+' => info.has_plus_sign = true,
            _ => {}
        }
        consume_literal(cursor)?;
    }
    Ok(Endpoints {
        start,
        end: cursor.offset(),
    })
}

/// One unquoted code point, or a whole `'...'` run
pub(crate) fn consume_literal(cursor: &mut Cursor<'_>) -> Result<(), PatternError> {
    match cursor.peek() {
        None => Err(cursor.error(
            ErrorKind::PatternSyntax,
            "Expected unquoted literal but found end of pattern",
        )),
        Some('\'') => match cursor.quoted() {
            Some(_) => Ok(()),
            None => Err(cursor.error(
                ErrorKind::PatternSyntax,
                "Expected quoted literal but found end of pattern",
            )),
        },
        Some(_) => {
            cursor.advance();
            Ok(())
        }
    }
}
