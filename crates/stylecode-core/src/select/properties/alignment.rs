//! Cascade for `align-content` and `justify-content`.

use stylecode_types::CssError;

use crate::bytecode::opcodes::*;
use crate::bytecode::{BytecodeReader, Opv, StringTable, malformed};
use crate::computed::{AlignContent, JustifyContent};
use crate::select::{SelectState, cascaded};

property_handler!(ALIGN_CONTENT, align_content, cascade_align_content);
property_handler!(JUSTIFY_CONTENT, justify_content, cascade_justify_content);

fn cascade_align_content(
    opv: Opv,
    _reader: &mut BytecodeReader<'_>,
    _strings: &StringTable,
    state: &mut SelectState,
) -> Result<(), CssError> {
    let value = cascaded(opv, || {
        Ok(match opv.value() {
            ALIGN_CONTENT_STRETCH => AlignContent::Stretch,
            ALIGN_CONTENT_FLEX_START => AlignContent::FlexStart,
            ALIGN_CONTENT_FLEX_END => AlignContent::FlexEnd,
            ALIGN_CONTENT_CENTER => AlignContent::Center,
            ALIGN_CONTENT_SPACE_BETWEEN => AlignContent::SpaceBetween,
            ALIGN_CONTENT_SPACE_AROUND => AlignContent::SpaceAround,
            ALIGN_CONTENT_SPACE_EVENLY => AlignContent::SpaceEvenly,
            other => malformed(format_args!("align-content value {other:#x}")),
        })
    })?;
    state.apply(opv, value, |style| &mut style.align_content);
    Ok(())
}

fn cascade_justify_content(
    opv: Opv,
    _reader: &mut BytecodeReader<'_>,
    _strings: &StringTable,
    state: &mut SelectState,
) -> Result<(), CssError> {
    let value = cascaded(opv, || {
        Ok(match opv.value() {
            JUSTIFY_CONTENT_FLEX_START => JustifyContent::FlexStart,
            JUSTIFY_CONTENT_FLEX_END => JustifyContent::FlexEnd,
            JUSTIFY_CONTENT_CENTER => JustifyContent::Center,
            JUSTIFY_CONTENT_SPACE_BETWEEN => JustifyContent::SpaceBetween,
            JUSTIFY_CONTENT_SPACE_AROUND => JustifyContent::SpaceAround,
            JUSTIFY_CONTENT_SPACE_EVENLY => JustifyContent::SpaceEvenly,
            other => malformed(format_args!("justify-content value {other:#x}")),
        })
    })?;
    state.apply(opv, value, |style| &mut style.justify_content);
    Ok(())
}

#[cfg(test)]
mod tests {
    use stylecode_types::Origin;

    use crate::computed::{AlignContent, JustifyContent, Slot};
    use crate::select::SelectState;
    use crate::test_utils::cascade_text;

    #[test]
    fn place_content_sets_both() {
        let mut state = SelectState::new();
        cascade_text(&mut state, "place-content: space-around", Origin::Author, 0);
        let style = state.finish();
        assert_eq!(style.align_content, Slot::Set(AlignContent::SpaceAround));
        assert_eq!(style.justify_content, Slot::Set(JustifyContent::SpaceAround));
    }

    #[test]
    fn invalid_place_content_leaves_initial_values() {
        let mut state = SelectState::new();
        cascade_text(&mut state, "place-content: stretch", Origin::Author, 0);
        assert_eq!(state.finish(), Default::default());
    }
}
