//! Cascade for grid track lists.

use stylecode_types::CssError;

use crate::bytecode::opcodes::{GRID_TEMPLATE_NONE, GRID_TEMPLATE_SET};
use crate::bytecode::{BytecodeReader, Opv, StringTable, malformed};
use crate::computed::{ComputedStyle, GridTemplate, Length, Slot};
use crate::select::{SelectState, cascaded};

property_handler!(GRID_TEMPLATE_ROWS, grid_template_rows, cascade_grid_template_rows);
property_handler!(
    GRID_TEMPLATE_COLUMNS,
    grid_template_columns,
    cascade_grid_template_columns
);

/// Read a track list. The tracks are always decoded so the reader ends up
/// past them, even if the declaration then loses.
fn decode_tracks(opv: Opv, reader: &mut BytecodeReader<'_>) -> Result<GridTemplate, CssError> {
    match opv.value() {
        GRID_TEMPLATE_NONE => Ok(GridTemplate::None),
        GRID_TEMPLATE_SET => {
            let count = reader.next_count();
            if count == 0 {
                malformed(format_args!("{} with no tracks", opv.property().name()));
            }
            let mut tracks = Vec::new();
            tracks.try_reserve_exact(count)?;
            for _ in 0..count {
                tracks.push(Length::new(reader.next_fixed(), reader.next_unit()));
            }
            Ok(GridTemplate::Tracks(tracks))
        },
        other => malformed(format_args!("{} value {other:#x}", opv.property().name())),
    }
}

fn cascade_tracks(
    opv: Opv,
    reader: &mut BytecodeReader<'_>,
    state: &mut SelectState,
    field: fn(&mut ComputedStyle) -> &mut Slot<GridTemplate>,
) -> Result<(), CssError> {
    let value = cascaded(opv, || decode_tracks(opv, reader))?;
    state.apply(opv, value, field);
    Ok(())
}

fn cascade_grid_template_rows(
    opv: Opv,
    reader: &mut BytecodeReader<'_>,
    _strings: &StringTable,
    state: &mut SelectState,
) -> Result<(), CssError> {
    cascade_tracks(opv, reader, state, |style| &mut style.grid_template_rows)
}

fn cascade_grid_template_columns(
    opv: Opv,
    reader: &mut BytecodeReader<'_>,
    _strings: &StringTable,
    state: &mut SelectState,
) -> Result<(), CssError> {
    cascade_tracks(opv, reader, state, |style| &mut style.grid_template_columns)
}
