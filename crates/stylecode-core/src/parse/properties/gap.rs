//! `row-gap`, `column-gap` and the `gap` shorthand.

use stylecode_types::{CssError, Fixed, Unit};

use crate::bytecode::opcodes::{GAP_NORMAL, GAP_SET};
use crate::bytecode::{PropertyId, StyleBuffer};
use crate::cursor::TokenCursor;
use crate::parse::utils::{emit_flag_value, parse_flag_value, parse_length_percentage};
use crate::parse::{ParseContext, transaction};

const GAPS: [PropertyId; 2] = [PropertyId::RowGap, PropertyId::ColumnGap];

pub fn parse_row_gap(
    _ctx: &mut ParseContext,
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    gap_longhand(cursor, out, PropertyId::RowGap)
}

pub fn parse_column_gap(
    _ctx: &mut ParseContext,
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    gap_longhand(cursor, out, PropertyId::ColumnGap)
}

/// `gap: normal | <row-gap> <column-gap>?`
///
/// An absent or unparseable second value repeats the first. Whatever
/// follows is left for the caller.
pub fn parse_gap(
    _ctx: &mut ParseContext,
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    transaction(cursor, out, |cursor, out| {
        if let Some(flag) = parse_flag_value(cursor) {
            return emit_flag_value(out, flag, &GAPS);
        }
        if cursor.peek().is_some_and(|t| t.is_ident("normal")) {
            cursor.advance();
            for property in GAPS {
                out.append_opv(property, 0, GAP_NORMAL)?;
            }
            return Ok(());
        }

        let row = parse_length_percentage(cursor, false)?;
        let mark = cursor.mark();
        let column = match parse_length_percentage(cursor, false) {
            Ok(column) => column,
            Err(_) => {
                let mut probe = cursor.fork(mark);
                probe.consume_whitespace();
                if !probe.at_end() {
                    log::debug!("gap: second value unusable, repeating the first");
                }
                cursor.reset(mark);
                row
            },
        };
        append_gap(out, PropertyId::RowGap, row)?;
        append_gap(out, PropertyId::ColumnGap, column)
    })
}

fn gap_longhand(
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
    property: PropertyId,
) -> Result<(), CssError> {
    transaction(cursor, out, |cursor, out| {
        if let Some(flag) = parse_flag_value(cursor) {
            return emit_flag_value(out, flag, &[property]);
        }
        if cursor.peek().is_some_and(|t| t.is_ident("normal")) {
            cursor.advance();
            return out.append_opv(property, 0, GAP_NORMAL);
        }
        let length = parse_length_percentage(cursor, false)?;
        append_gap(out, property, length)
    })
}

fn append_gap(
    out: &mut StyleBuffer,
    property: PropertyId,
    (value, unit): (Fixed, Unit),
) -> Result<(), CssError> {
    out.append_opv(property, 0, GAP_SET)?;
    out.append_length(value, unit)
}
