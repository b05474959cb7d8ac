//! Grid placement: the four line longhands, `grid-row`, `grid-column`,
//! `grid-area` and `grid-auto-flow`.

use stylecode_types::{CssError, Fixed};

use crate::bytecode::opcodes::*;
use crate::bytecode::{PropertyId, StyleBuffer};
use crate::cursor::TokenCursor;
use crate::parse::utils::{emit_flag_value, parse_flag_value, parse_grid_line_value};
use crate::parse::{ParseContext, transaction};

const AREA: [PropertyId; 4] = [
    PropertyId::GridRowStart,
    PropertyId::GridColumnStart,
    PropertyId::GridRowEnd,
    PropertyId::GridColumnEnd,
];
const ROW: [PropertyId; 2] = [PropertyId::GridRowStart, PropertyId::GridRowEnd];
const COLUMN: [PropertyId; 2] = [PropertyId::GridColumnStart, PropertyId::GridColumnEnd];

pub fn parse_grid_row_start(
    _ctx: &mut ParseContext,
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    grid_lines(cursor, out, &[PropertyId::GridRowStart])
}

pub fn parse_grid_row_end(
    _ctx: &mut ParseContext,
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    grid_lines(cursor, out, &[PropertyId::GridRowEnd])
}

pub fn parse_grid_column_start(
    _ctx: &mut ParseContext,
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    grid_lines(cursor, out, &[PropertyId::GridColumnStart])
}

pub fn parse_grid_column_end(
    _ctx: &mut ParseContext,
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    grid_lines(cursor, out, &[PropertyId::GridColumnEnd])
}

/// `grid-row: <line> [ / <line> ]?`
pub fn parse_grid_row(
    _ctx: &mut ParseContext,
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    grid_lines(cursor, out, &ROW)
}

/// `grid-column: <line> [ / <line> ]?`
pub fn parse_grid_column(
    _ctx: &mut ParseContext,
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    grid_lines(cursor, out, &COLUMN)
}

/// `grid-area: <line> [ / <line> ]{0,3}`
///
/// Components fill row-start, column-start, row-end and column-end in that
/// order; missing ones are `auto`.
pub fn parse_grid_area(
    _ctx: &mut ParseContext,
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    grid_lines(cursor, out, &AREA)
}

/// Slash-separated line values for `properties`, in order. A CSS-wide
/// keyword applies to all of them.
fn grid_lines(
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
    properties: &[PropertyId],
) -> Result<(), CssError> {
    transaction(cursor, out, |cursor, out| {
        if let Some(flag) = parse_flag_value(cursor) {
            return emit_flag_value(out, flag, properties);
        }
        let mut lines = [None; 4];
        let lines = &mut lines[..properties.len()];
        for (i, line) in lines.iter_mut().enumerate() {
            if i == 0 {
                *line = parse_grid_line_value(cursor)?;
                continue;
            }
            let mark = cursor.mark();
            cursor.consume_whitespace();
            if !cursor.peek().is_some_and(|t| t.is_char('/')) {
                cursor.reset(mark);
                break;
            }
            cursor.advance();
            cursor.consume_whitespace();
            match parse_grid_line_value(cursor) {
                Ok(value) => *line = value,
                Err(_) => {
                    cursor.reset(mark);
                    break;
                },
            }
        }
        for (&property, &line) in properties.iter().zip(lines.iter()) {
            append_line(out, property, line)?;
        }
        Ok(())
    })
}

fn append_line(
    out: &mut StyleBuffer,
    property: PropertyId,
    line: Option<Fixed>,
) -> Result<(), CssError> {
    match line {
        None => out.append_opv(property, 0, GRID_LINE_AUTO),
        Some(line) => {
            out.append_opv(property, 0, GRID_LINE_SET)?;
            out.append(line.raw() as u32)
        },
    }
}

/// `grid-auto-flow: [ row | column ] || dense`
pub fn parse_grid_auto_flow(
    _ctx: &mut ParseContext,
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    transaction(cursor, out, |cursor, out| {
        if let Some(flag) = parse_flag_value(cursor) {
            return emit_flag_value(out, flag, &[PropertyId::GridAutoFlow]);
        }
        let mut column = None;
        let mut dense = false;
        for i in 0..2 {
            let mark = cursor.mark();
            if i > 0 {
                cursor.consume_whitespace();
            }
            match cursor.peek() {
                Some(t) if t.is_ident("row") && column.is_none() => column = Some(false),
                Some(t) if t.is_ident("column") && column.is_none() => column = Some(true),
                Some(t) if t.is_ident("dense") && !dense => dense = true,
                _ if i == 0 => return Err(CssError::Invalid),
                _ => {
                    cursor.reset(mark);
                    break;
                },
            }
            cursor.advance();
        }
        let value = match (column.unwrap_or(false), dense) {
            (false, false) => GRID_AUTO_FLOW_ROW,
            (true, false) => GRID_AUTO_FLOW_COLUMN,
            (false, true) => GRID_AUTO_FLOW_ROW_DENSE,
            (true, true) => GRID_AUTO_FLOW_COLUMN_DENSE,
        };
        out.append_opv(PropertyId::GridAutoFlow, 0, value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::{FlagValue, Opv};
    use crate::test_utils::{assert_rejected, run_parser};

    fn lines(buf: &StyleBuffer) -> Vec<(PropertyId, Option<i32>)> {
        buf.declarations()
            .map(|(opv, operands)| {
                let line = (opv.value() == GRID_LINE_SET)
                    .then(|| Fixed::from_raw(operands[0] as i32).to_int());
                (opv.property(), line)
            })
            .collect()
    }

    #[test]
    fn longhand() {
        let (buf, _) = run_parser(parse_grid_row_start, "-3").unwrap();
        assert_eq!(lines(&buf), vec![(PropertyId::GridRowStart, Some(-3))]);
        let (buf, _) = run_parser(parse_grid_column_end, "auto").unwrap();
        assert_eq!(lines(&buf), vec![(PropertyId::GridColumnEnd, None)]);
    }

    #[test]
    fn longhand_rejects_zero_and_fractions() {
        assert_rejected(parse_grid_row_end, "0");
        assert_rejected(parse_grid_row_end, "2.5");
        assert_rejected(parse_grid_row_end, "span");
    }

    #[test]
    fn area_single_value_defaults_the_rest() {
        let (buf, _) = run_parser(parse_grid_area, "2").unwrap();
        assert_eq!(
            lines(&buf),
            vec![
                (PropertyId::GridRowStart, Some(2)),
                (PropertyId::GridColumnStart, None),
                (PropertyId::GridRowEnd, None),
                (PropertyId::GridColumnEnd, None),
            ]
        );
    }

    #[test]
    fn area_all_four() {
        let (buf, _) = run_parser(parse_grid_area, "1 / 2 / auto / -1").unwrap();
        assert_eq!(
            lines(&buf),
            vec![
                (PropertyId::GridRowStart, Some(1)),
                (PropertyId::GridColumnStart, Some(2)),
                (PropertyId::GridRowEnd, None),
                (PropertyId::GridColumnEnd, Some(-1)),
            ]
        );
    }

    #[test]
    fn area_stops_before_bad_component() {
        let (buf, consumed) = run_parser(parse_grid_area, "1/2 / x").unwrap();
        assert_eq!(consumed, 3);
        assert_eq!(lines(&buf)[1], (PropertyId::GridColumnStart, Some(2)));
        assert_eq!(lines(&buf)[2], (PropertyId::GridRowEnd, None));
    }

    #[test]
    fn row_and_column_shorthands() {
        let (buf, _) = run_parser(parse_grid_row, "1 / 3").unwrap();
        assert_eq!(
            lines(&buf),
            vec![(PropertyId::GridRowStart, Some(1)), (PropertyId::GridRowEnd, Some(3))]
        );
        let (buf, _) = run_parser(parse_grid_column, "4").unwrap();
        assert_eq!(
            lines(&buf),
            vec![(PropertyId::GridColumnStart, Some(4)), (PropertyId::GridColumnEnd, None)]
        );
    }

    #[test]
    fn shorthand_flag_reaches_every_longhand() {
        let (buf, _) = run_parser(parse_grid_area, "inherit").unwrap();
        assert_eq!(buf.declarations().count(), 4);
        assert!(buf.declarations().all(|(opv, _)| opv.flag_value() == Some(FlagValue::Inherit)));
    }

    #[test]
    fn auto_flow_combinations() {
        for (text, expected) in [
            ("row", GRID_AUTO_FLOW_ROW),
            ("column", GRID_AUTO_FLOW_COLUMN),
            ("dense", GRID_AUTO_FLOW_ROW_DENSE),
            ("row dense", GRID_AUTO_FLOW_ROW_DENSE),
            ("dense column", GRID_AUTO_FLOW_COLUMN_DENSE),
        ] {
            let (buf, _) = run_parser(parse_grid_auto_flow, text).unwrap();
            assert_eq!(Opv::from_word(buf.words()[0]).value(), expected, "{text}");
        }
    }

    #[test]
    fn auto_flow_leaves_repeated_keyword() {
        let (_, consumed) = run_parser(parse_grid_auto_flow, "row column").unwrap();
        assert_eq!(consumed, 1);
        assert_rejected(parse_grid_auto_flow, "sideways");
    }
}
