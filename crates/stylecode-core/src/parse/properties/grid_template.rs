//! `grid-template-rows` and `grid-template-columns` track lists.
//!
//! A list ends at the first token that is not a track, and at most
//! [`MAX_GRID_TRACKS`] tracks are kept.

use stylecode_types::{CssError, Fixed, Unit, UnitClass};

use crate::bytecode::opcodes::{GRID_TEMPLATE_NONE, GRID_TEMPLATE_SET};
use crate::bytecode::{PropertyId, StyleBuffer};
use crate::cursor::TokenCursor;
use crate::parse::utils::{emit_flag_value, parse_flag_value, parse_unit_specifier};
use crate::parse::{ParseContext, transaction};

/// Tracks kept per list. Further tracks are left unconsumed.
pub const MAX_GRID_TRACKS: usize = 32;

pub fn parse_grid_template_rows(
    _ctx: &mut ParseContext,
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    track_list(cursor, out, PropertyId::GridTemplateRows)
}

pub fn parse_grid_template_columns(
    _ctx: &mut ParseContext,
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    track_list(cursor, out, PropertyId::GridTemplateColumns)
}

/// `none | <track>+` where a track is a non-negative length, percentage
/// or flex value, or `auto` (stored as `1fr`).
fn track_list(
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
    property: PropertyId,
) -> Result<(), CssError> {
    transaction(cursor, out, |cursor, out| {
        if let Some(flag) = parse_flag_value(cursor) {
            return emit_flag_value(out, flag, &[property]);
        }
        if cursor.peek().is_some_and(|t| t.is_ident("none")) {
            cursor.advance();
            return out.append_opv(property, 0, GRID_TEMPLATE_NONE);
        }

        let mut tracks = [(Fixed::ZERO, Unit::Px); MAX_GRID_TRACKS];
        let mut count = 0;
        while count < MAX_GRID_TRACKS {
            let Some(track) = parse_track(cursor) else {
                break;
            };
            tracks[count] = track;
            count += 1;
        }
        if count == 0 {
            return Err(CssError::Invalid);
        }
        if count == MAX_GRID_TRACKS && parse_track(&mut cursor.clone()).is_some() {
            log::debug!("{}: more than {MAX_GRID_TRACKS} tracks", property.name());
        }

        out.append_opv(property, 0, GRID_TEMPLATE_SET)?;
        out.append(count as u32)?;
        for &(value, unit) in &tracks[..count] {
            out.append_length(value, unit)?;
        }
        Ok(())
    })
}

fn parse_track(cursor: &mut TokenCursor<'_>) -> Option<(Fixed, Unit)> {
    let mark = cursor.mark();
    if let Ok((value, unit)) = parse_unit_specifier(cursor, Unit::Px) {
        let sized = matches!(
            unit.class(),
            UnitClass::Length | UnitClass::Percentage | UnitClass::Flex
        );
        if sized && !value.is_negative() {
            return Some((value, unit));
        }
        cursor.reset(mark);
        return None;
    }
    cursor.consume_whitespace();
    if cursor.peek().is_some_and(|t| t.is_ident("auto")) {
        cursor.advance();
        return Some((Fixed::ONE, Unit::Fr));
    }
    cursor.reset(mark);
    None
}
