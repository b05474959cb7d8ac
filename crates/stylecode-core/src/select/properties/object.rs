//! Cascade for `object-fit` and `object-position`.

use stylecode_types::CssError;

use crate::bytecode::opcodes::*;
use crate::bytecode::{BytecodeReader, Opv, StringTable, malformed};
use crate::computed::{Length, ObjectFit, ObjectPosition};
use crate::select::{SelectState, cascaded};

property_handler!(OBJECT_FIT, object_fit, cascade_object_fit);
property_handler!(OBJECT_POSITION, object_position, cascade_object_position);

fn cascade_object_fit(
    opv: Opv,
    _reader: &mut BytecodeReader<'_>,
    _strings: &StringTable,
    state: &mut SelectState,
) -> Result<(), CssError> {
    let value = cascaded(opv, || {
        Ok(match opv.value() {
            OBJECT_FIT_FILL => ObjectFit::Fill,
            OBJECT_FIT_CONTAIN => ObjectFit::Contain,
            OBJECT_FIT_COVER => ObjectFit::Cover,
            OBJECT_FIT_NONE => ObjectFit::None,
            OBJECT_FIT_SCALE_DOWN => ObjectFit::ScaleDown,
            other => malformed(format_args!("object-fit value {other:#x}")),
        })
    })?;
    state.apply(opv, value, |style| &mut style.object_fit);
    Ok(())
}

/// Keywords become percentages: left/top 0%, center 50%, right/bottom 100%.
fn cascade_object_position(
    opv: Opv,
    reader: &mut BytecodeReader<'_>,
    _strings: &StringTable,
    state: &mut SelectState,
) -> Result<(), CssError> {
    let value = cascaded(opv, || {
        let value = opv.value();
        let horizontal = match value & OBJECT_POSITION_HORZ_MASK {
            OBJECT_POSITION_HORZ_SET => Length::new(reader.next_fixed(), reader.next_unit()),
            OBJECT_POSITION_HORZ_LEFT => Length::percent(0),
            OBJECT_POSITION_HORZ_CENTER => Length::percent(50),
            OBJECT_POSITION_HORZ_RIGHT => Length::percent(100),
            other => malformed(format_args!("object-position horizontal {other:#x}")),
        };
        let vertical = match value & OBJECT_POSITION_VERT_MASK {
            OBJECT_POSITION_VERT_SET => Length::new(reader.next_fixed(), reader.next_unit()),
            OBJECT_POSITION_VERT_TOP => Length::percent(0),
            OBJECT_POSITION_VERT_CENTER => Length::percent(50),
            OBJECT_POSITION_VERT_BOTTOM => Length::percent(100),
            other => malformed(format_args!("object-position vertical {other:#x}")),
        };
        Ok(ObjectPosition {
            horizontal,
            vertical,
        })
    })?;
    state.apply(opv, value, |style| &mut style.object_position);
    Ok(())
}
