//! Cascade for `background-image`. URL operands index the string table.

use stylecode_types::CssError;

use crate::bytecode::opcodes::{BACKGROUND_IMAGE_NONE, BACKGROUND_IMAGE_URI};
use crate::bytecode::{BytecodeReader, Opv, StringTable, malformed};
use crate::computed::BackgroundImage;
use crate::select::{SelectState, cascaded};

property_handler!(BACKGROUND_IMAGE, background_image, cascade_background_image);

fn cascade_background_image(
    opv: Opv,
    reader: &mut BytecodeReader<'_>,
    strings: &StringTable,
    state: &mut SelectState,
) -> Result<(), CssError> {
    let value = cascaded(opv, || match opv.value() {
        BACKGROUND_IMAGE_NONE => Ok(BackgroundImage::None),
        BACKGROUND_IMAGE_URI => {
            let index = reader.next_word();
            let url = strings
                .get(index)
                .unwrap_or_else(|| malformed(format_args!("string index {index} out of range")));
            let mut owned = String::new();
            owned.try_reserve_exact(url.len())?;
            owned.push_str(url);
            Ok(BackgroundImage::Url(owned))
        },
        other => malformed(format_args!("background-image value {other:#x}")),
    })?;
    state.apply(opv, value, |style| &mut style.background_image);
    Ok(())
}
