//! Value parsers shared by the property grammars.

use stylecode_types::fixed::number_from_str;
use stylecode_types::{CssError, Fixed, Unit};

use crate::bytecode::{FlagValue, PropertyId, StyleBuffer};
use crate::cursor::TokenCursor;
use crate::lexer::Token;

/// Consume a CSS-wide keyword if one is next.
pub fn parse_flag_value(cursor: &mut TokenCursor<'_>) -> Option<FlagValue> {
    let Some(Token::Ident(name)) = cursor.peek() else {
        return None;
    };
    let flag = FlagValue::from_keyword(name)?;
    cursor.advance();
    Some(flag)
}

/// Emit a bare OPV carrying `flag` for each of `properties`.
pub fn emit_flag_value(
    out: &mut StyleBuffer,
    flag: FlagValue,
    properties: &[PropertyId],
) -> Result<(), CssError> {
    for &property in properties {
        out.append_opv(property, flag.flags(), 0)?;
    }
    Ok(())
}

/// Convert the text of a numeric token, requiring every byte to be used.
pub fn number_value(text: &str, int_only: bool) -> Result<Fixed, CssError> {
    let (value, consumed) = number_from_str(text, int_only);
    if consumed == 0 || consumed != text.len() {
        return Err(CssError::Invalid);
    }
    Ok(value)
}

/// Parse a number with an optional unit suffix or `%`.
///
/// Leading whitespace is skipped. A unitless number takes `default_unit`
/// and must be zero. The unit class is not checked here; callers reject
/// the classes their grammar forbids. On failure the cursor is restored.
pub fn parse_unit_specifier(
    cursor: &mut TokenCursor<'_>,
    default_unit: Unit,
) -> Result<(Fixed, Unit), CssError> {
    let mark = cursor.mark();
    cursor.consume_whitespace();
    let parsed = match cursor.advance() {
        Some(Token::Dimension { value, unit }) => number_value(value, false)
            .and_then(|v| Unit::from_keyword(unit).map(|u| (v, u)).ok_or(CssError::Invalid)),
        Some(Token::Percentage(value)) => number_value(value, false).map(|v| (v, Unit::Percent)),
        Some(Token::Number(value)) => number_value(value, false).and_then(|v| {
            if v == Fixed::ZERO {
                Ok((v, default_unit))
            } else {
                Err(CssError::Invalid)
            }
        }),
        _ => Err(CssError::Invalid),
    };
    if parsed.is_err() {
        cursor.reset(mark);
    }
    parsed
}

/// Parse a `<length-percentage>`, optionally rejecting negative values.
pub fn parse_length_percentage(
    cursor: &mut TokenCursor<'_>,
    allow_negative: bool,
) -> Result<(Fixed, Unit), CssError> {
    let mark = cursor.mark();
    let (value, unit) = parse_unit_specifier(cursor, Unit::Px)?;
    if !unit.is_length_percentage() || (!allow_negative && value.is_negative()) {
        cursor.reset(mark);
        return Err(CssError::Invalid);
    }
    Ok((value, unit))
}

/// Parse `auto` (returned as `None`) or a non-zero integer line number.
pub fn parse_grid_line_value(cursor: &mut TokenCursor<'_>) -> Result<Option<Fixed>, CssError> {
    match cursor.peek() {
        Some(tok) if tok.is_ident("auto") => {
            cursor.advance();
            Ok(None)
        },
        Some(Token::Number(text)) => {
            let line = number_value(text, true)?;
            if line == Fixed::ZERO {
                return Err(CssError::Invalid);
            }
            cursor.advance();
            Ok(Some(line))
        },
        _ => Err(CssError::Invalid),
    }
}

/// Match the next identifier against `table` and consume it.
pub fn parse_keyword<T: Copy>(
    cursor: &mut TokenCursor<'_>,
    table: &[(&str, T)],
) -> Result<T, CssError> {
    let Some(Token::Ident(name)) = cursor.peek() else {
        return Err(CssError::Invalid);
    };
    let (_, value) = table
        .iter()
        .find(|(keyword, _)| name.eq_ignore_ascii_case(keyword))
        .ok_or(CssError::Invalid)?;
    cursor.advance();
    Ok(*value)
}

/// Parse a longhand whose grammar is a CSS-wide keyword or one entry of
/// `table`.
pub fn parse_keyword_longhand(
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
    property: PropertyId,
    table: &[(&str, u16)],
) -> Result<(), CssError> {
    super::transaction(cursor, out, |cursor, out| {
        if let Some(flag) = parse_flag_value(cursor) {
            return emit_flag_value(out, flag, &[property]);
        }
        let value = parse_keyword(cursor, table)?;
        out.append_opv(property, 0, value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn unit_spec(text: &str) -> Result<(Fixed, Unit), CssError> {
        let tokens = tokenize(text);
        let mut cursor = TokenCursor::new(&tokens);
        parse_unit_specifier(&mut cursor, Unit::Px)
    }

    #[test]
    fn dimension() {
        assert_eq!(unit_spec("12em"), Ok((Fixed::from_int(12), Unit::Em)));
    }

    #[test]
    fn unit_suffix_case_is_ignored() {
        assert_eq!(unit_spec("1PX"), Ok((Fixed::ONE, Unit::Px)));
    }

    #[test]
    fn percentage() {
        assert_eq!(unit_spec("50%"), Ok((Fixed::from_int(50), Unit::Percent)));
    }

    #[test]
    fn zero_takes_default_unit() {
        let tokens = tokenize("0");
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(parse_unit_specifier(&mut cursor, Unit::Deg), Ok((Fixed::ZERO, Unit::Deg)));
    }

    #[test]
    fn nonzero_unitless_is_invalid() {
        assert_eq!(unit_spec("5"), Err(CssError::Invalid));
    }

    #[test]
    fn unknown_unit_is_invalid() {
        assert_eq!(unit_spec("5parsecs"), Err(CssError::Invalid));
    }

    #[test]
    fn failure_restores_cursor() {
        let tokens = tokenize("  auto");
        let mut cursor = TokenCursor::new(&tokens);
        assert!(parse_unit_specifier(&mut cursor, Unit::Px).is_err());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn skips_leading_whitespace() {
        let tokens = tokenize(" 3px");
        let mut cursor = TokenCursor::new(&tokens);
        assert!(parse_unit_specifier(&mut cursor, Unit::Px).is_ok());
        assert!(cursor.at_end());
    }

    #[test]
    fn length_percentage_rejects_angles_and_negatives() {
        let tokens = tokenize("10deg");
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(parse_length_percentage(&mut cursor, true), Err(CssError::Invalid));
        assert_eq!(cursor.position(), 0);

        let tokens = tokenize("-1px");
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(parse_length_percentage(&mut cursor, false), Err(CssError::Invalid));
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(parse_length_percentage(&mut cursor, true), Ok((Fixed::from_int(-1), Unit::Px)));
    }

    #[test]
    fn grid_lines() {
        for (text, expected) in [
            ("auto", Ok(None)),
            ("3", Ok(Some(Fixed::from_int(3)))),
            ("-2", Ok(Some(Fixed::from_int(-2)))),
            ("0", Err(CssError::Invalid)),
            ("1.5", Err(CssError::Invalid)),
            ("span", Err(CssError::Invalid)),
        ] {
            let tokens = tokenize(text);
            let mut cursor = TokenCursor::new(&tokens);
            assert_eq!(parse_grid_line_value(&mut cursor), expected, "{text}");
        }
    }

    #[test]
    fn flag_values_are_consumed() {
        let tokens = tokenize("Initial");
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(parse_flag_value(&mut cursor), Some(FlagValue::Initial));
        assert_eq!(cursor.position(), 1);

        let tokens = tokenize("auto");
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(parse_flag_value(&mut cursor), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn keyword_table() {
        let table = [("row", 1u16), ("column", 2)];
        let tokens = tokenize("COLUMN");
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(parse_keyword(&mut cursor, &table), Ok(2));
        let tokens = tokenize("dense");
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(parse_keyword(&mut cursor, &table), Err(CssError::Invalid));
        assert_eq!(cursor.position(), 0);
    }
}
