//! `transform`: `none` or a list of translate, scale and rotate functions.

use stylecode_types::{CssError, Fixed, Unit, UnitClass};

use crate::bytecode::opcodes::*;
use crate::bytecode::{PropertyId, StyleBuffer};
use crate::cursor::TokenCursor;
use crate::lexer::Token;
use crate::parse::utils::{
    emit_flag_value, number_value, parse_flag_value, parse_length_percentage,
    parse_unit_specifier,
};
use crate::parse::{ParseContext, transaction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Argument {
    LengthPercentage,
    Number,
    Angle,
}

#[derive(Debug, Clone, Copy)]
struct FunctionSpec {
    code: u32,
    argument: Argument,
    two_args: bool,
}

const FUNCTIONS: [(&str, FunctionSpec); 7] = [
    ("translate", spec(TRANSFORM_FN_TRANSLATE, Argument::LengthPercentage, true)),
    ("translatex", spec(TRANSFORM_FN_TRANSLATE_X, Argument::LengthPercentage, false)),
    ("translatey", spec(TRANSFORM_FN_TRANSLATE_Y, Argument::LengthPercentage, false)),
    ("scale", spec(TRANSFORM_FN_SCALE, Argument::Number, true)),
    ("scalex", spec(TRANSFORM_FN_SCALE_X, Argument::Number, false)),
    ("scaley", spec(TRANSFORM_FN_SCALE_Y, Argument::Number, false)),
    ("rotate", spec(TRANSFORM_FN_ROTATE, Argument::Angle, false)),
];

const fn spec(code: u32, argument: Argument, two_args: bool) -> FunctionSpec {
    FunctionSpec { code, argument, two_args }
}

/// `transform: none | <transform-function>+`
///
/// Emits a function count followed by one record per function: the
/// function code, then one `(value, unit)` pair, or two for `translate`
/// and `scale`. A missing second argument is filled in here.
pub fn parse_transform(
    _ctx: &mut ParseContext,
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    transaction(cursor, out, |cursor, out| {
        if let Some(flag) = parse_flag_value(cursor) {
            return emit_flag_value(out, flag, &[PropertyId::Transform]);
        }
        if cursor.peek().is_some_and(|t| t.is_ident("none")) {
            cursor.advance();
            return out.append_opv(PropertyId::Transform, 0, TRANSFORM_NONE);
        }

        out.append_opv(PropertyId::Transform, 0, TRANSFORM_FUNCTIONS)?;
        let count_at = out.len();
        out.append(0)?;

        let mut count = 0;
        while let Some(Token::Function(name)) = cursor.peek() {
            let (_, spec) = FUNCTIONS
                .iter()
                .find(|(known, _)| name.eq_ignore_ascii_case(known))
                .ok_or(CssError::Invalid)?;
            cursor.advance();
            parse_function(cursor, out, *spec)?;
            count += 1;

            let mark = cursor.mark();
            cursor.consume_whitespace();
            if !matches!(cursor.peek(), Some(Token::Function(_))) {
                cursor.reset(mark);
                break;
            }
        }
        if count == 0 {
            return Err(CssError::Invalid);
        }
        out.set(count_at, count);
        Ok(())
    })
}

/// Arguments and closing `)` of one function whose name is already consumed.
fn parse_function(
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
    spec: FunctionSpec,
) -> Result<(), CssError> {
    let first = parse_argument(cursor, spec.argument)?;
    cursor.consume_whitespace();
    let mut second = None;
    if spec.two_args && cursor.peek().is_some_and(|t| t.is_char(',')) {
        cursor.advance();
        second = Some(parse_argument(cursor, spec.argument)?);
        cursor.consume_whitespace();
    }
    if !cursor.advance().is_some_and(|t| t.is_char(')')) {
        return Err(CssError::Invalid);
    }

    out.append(spec.code)?;
    out.append_length(first.0, first.1)?;
    if spec.two_args {
        let (value, unit) = second.unwrap_or(match spec.argument {
            Argument::Number => first,
            _ => (Fixed::ZERO, Unit::Px),
        });
        out.append_length(value, unit)?;
    }
    Ok(())
}

fn parse_argument(
    cursor: &mut TokenCursor<'_>,
    argument: Argument,
) -> Result<(Fixed, Unit), CssError> {
    match argument {
        Argument::LengthPercentage => parse_length_percentage(cursor, true),
        Argument::Angle => {
            let mark = cursor.mark();
            let (value, unit) = parse_unit_specifier(cursor, Unit::Deg)?;
            if unit.class() != UnitClass::Angle {
                cursor.reset(mark);
                return Err(CssError::Invalid);
            }
            Ok((value, unit))
        },
        Argument::Number => {
            let mark = cursor.mark();
            cursor.consume_whitespace();
            let parsed = match cursor.advance() {
                Some(Token::Number(text)) => number_value(text, false),
                Some(Token::Percentage(text)) => number_value(text, false)
                    .and_then(|v| v.div(Fixed::HUNDRED).ok_or(CssError::Invalid)),
                _ => Err(CssError::Invalid),
            };
            if parsed.is_err() {
                cursor.reset(mark);
            }
            parsed.map(|value| (value, Unit::Number))
        },
    }
}
