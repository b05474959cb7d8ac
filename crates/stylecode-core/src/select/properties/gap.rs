//! Cascade for `row-gap` and `column-gap`.

use stylecode_types::CssError;

use crate::bytecode::opcodes::{GAP_NORMAL, GAP_SET};
use crate::bytecode::{BytecodeReader, Opv, StringTable, malformed};
use crate::computed::{Gap, Length};
use crate::select::{SelectState, cascaded};

property_handler!(ROW_GAP, row_gap, cascade_row_gap);
property_handler!(COLUMN_GAP, column_gap, cascade_column_gap);

fn decode_gap(opv: Opv, reader: &mut BytecodeReader<'_>) -> Result<Gap, CssError> {
    match opv.value() {
        GAP_NORMAL => Ok(Gap::Normal),
        GAP_SET => Ok(Gap::Length(Length::new(reader.next_fixed(), reader.next_unit()))),
        other => malformed(format_args!("{} value {other:#x}", opv.property().name())),
    }
}

fn cascade_row_gap(
    opv: Opv,
    reader: &mut BytecodeReader<'_>,
    _strings: &StringTable,
    state: &mut SelectState,
) -> Result<(), CssError> {
    let value = cascaded(opv, || decode_gap(opv, reader))?;
    state.apply(opv, value, |style| &mut style.row_gap);
    Ok(())
}

fn cascade_column_gap(
    opv: Opv,
    reader: &mut BytecodeReader<'_>,
    _strings: &StringTable,
    state: &mut SelectState,
) -> Result<(), CssError> {
    let value = cascaded(opv, || decode_gap(opv, reader))?;
    state.apply(opv, value, |style| &mut style.column_gap);
    Ok(())
}

#[cfg(test)]
mod tests {
    use stylecode_types::Origin;

    use crate::computed::{Gap, Length, Slot};
    use crate::select::SelectState;
    use crate::test_utils::cascade_text;

    #[test]
    fn single_value_applies_to_both_axes() {
        let mut state = SelectState::new();
        cascade_text(&mut state, "gap: 8px", Origin::Author, 0);
        let style = state.finish();
        assert_eq!(style.row_gap, Slot::Set(Gap::Length(Length::px(8))));
        assert_eq!(style.column_gap, Slot::Set(Gap::Length(Length::px(8))));
    }

    #[test]
    fn longhand_after_shorthand() {
        let mut state = SelectState::new();
        cascade_text(&mut state, "gap: 8px; column-gap: normal", Origin::Author, 0);
        let style = state.finish();
        assert_eq!(style.row_gap, Slot::Set(Gap::Length(Length::px(8))));
        assert_eq!(style.column_gap, Slot::Set(Gap::Normal));
    }
}
