//! Cascade for the grid line longhands and `grid-auto-flow`.

use stylecode_types::CssError;

use crate::bytecode::opcodes::*;
use crate::bytecode::{BytecodeReader, Opv, StringTable, malformed};
use crate::computed::{ComputedStyle, GridAutoFlow, GridLine, Slot};
use crate::select::{SelectState, cascaded};

property_handler!(GRID_ROW_START, grid_row_start, cascade_grid_row_start);
property_handler!(GRID_ROW_END, grid_row_end, cascade_grid_row_end);
property_handler!(GRID_COLUMN_START, grid_column_start, cascade_grid_column_start);
property_handler!(GRID_COLUMN_END, grid_column_end, cascade_grid_column_end);
property_handler!(GRID_AUTO_FLOW, grid_auto_flow, cascade_grid_auto_flow);

fn cascade_line(
    opv: Opv,
    reader: &mut BytecodeReader<'_>,
    state: &mut SelectState,
    field: fn(&mut ComputedStyle) -> &mut Slot<GridLine>,
) -> Result<(), CssError> {
    let value = cascaded(opv, || match opv.value() {
        GRID_LINE_AUTO => Ok(GridLine::Auto),
        GRID_LINE_SET => Ok(GridLine::Line(reader.next_fixed().to_int())),
        other => malformed(format_args!("{} value {other:#x}", opv.property().name())),
    })?;
    state.apply(opv, value, field);
    Ok(())
}

fn cascade_grid_row_start(
    opv: Opv,
    reader: &mut BytecodeReader<'_>,
    _strings: &StringTable,
    state: &mut SelectState,
) -> Result<(), CssError> {
    cascade_line(opv, reader, state, |style| &mut style.grid_row_start)
}

fn cascade_grid_row_end(
    opv: Opv,
    reader: &mut BytecodeReader<'_>,
    _strings: &StringTable,
    state: &mut SelectState,
) -> Result<(), CssError> {
    cascade_line(opv, reader, state, |style| &mut style.grid_row_end)
}

fn cascade_grid_column_start(
    opv: Opv,
    reader: &mut BytecodeReader<'_>,
    _strings: &StringTable,
    state: &mut SelectState,
) -> Result<(), CssError> {
    cascade_line(opv, reader, state, |style| &mut style.grid_column_start)
}

fn cascade_grid_column_end(
    opv: Opv,
    reader: &mut BytecodeReader<'_>,
    _strings: &StringTable,
    state: &mut SelectState,
) -> Result<(), CssError> {
    cascade_line(opv, reader, state, |style| &mut style.grid_column_end)
}

fn cascade_grid_auto_flow(
    opv: Opv,
    _reader: &mut BytecodeReader<'_>,
    _strings: &StringTable,
    state: &mut SelectState,
) -> Result<(), CssError> {
    let value = cascaded(opv, || {
        Ok(match opv.value() {
            GRID_AUTO_FLOW_ROW => GridAutoFlow::Row,
            GRID_AUTO_FLOW_COLUMN => GridAutoFlow::Column,
            GRID_AUTO_FLOW_ROW_DENSE => GridAutoFlow::RowDense,
            GRID_AUTO_FLOW_COLUMN_DENSE => GridAutoFlow::ColumnDense,
            other => malformed(format_args!("grid-auto-flow value {other:#x}")),
        })
    })?;
    state.apply(opv, value, |style| &mut style.grid_auto_flow);
    Ok(())
}
