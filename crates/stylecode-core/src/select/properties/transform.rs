//! Cascade for `transform` function lists.

use stylecode_types::CssError;

use crate::bytecode::opcodes::*;
use crate::bytecode::{BytecodeReader, Opv, StringTable, malformed};
use crate::computed::{Length, Transform, TransformFunction, TransformKind};
use crate::select::{SelectState, cascaded};

property_handler!(TRANSFORM, transform, cascade_transform);

fn function_kind(code: u32) -> TransformKind {
    match code {
        TRANSFORM_FN_TRANSLATE => TransformKind::Translate,
        TRANSFORM_FN_TRANSLATE_X => TransformKind::TranslateX,
        TRANSFORM_FN_TRANSLATE_Y => TransformKind::TranslateY,
        TRANSFORM_FN_SCALE => TransformKind::Scale,
        TRANSFORM_FN_SCALE_X => TransformKind::ScaleX,
        TRANSFORM_FN_SCALE_Y => TransformKind::ScaleY,
        TRANSFORM_FN_ROTATE => TransformKind::Rotate,
        other => malformed(format_args!("transform function {other:#x}")),
    }
}

fn decode_functions(reader: &mut BytecodeReader<'_>) -> Result<Vec<TransformFunction>, CssError> {
    let count = reader.next_count();
    let mut functions = Vec::new();
    functions.try_reserve_exact(count)?;
    for _ in 0..count {
        let code = reader.next_word();
        let kind = function_kind(code);
        let first = Length::new(reader.next_fixed(), reader.next_unit());
        let second = if transform_fn_len(code) == 5 {
            Length::new(reader.next_fixed(), reader.next_unit())
        } else {
            Length::px(0)
        };
        functions.push(TransformFunction {
            kind,
            first,
            second,
        });
    }
    Ok(functions)
}

fn cascade_transform(
    opv: Opv,
    reader: &mut BytecodeReader<'_>,
    _strings: &StringTable,
    state: &mut SelectState,
) -> Result<(), CssError> {
    let value = cascaded(opv, || match opv.value() {
        TRANSFORM_NONE => Ok(Transform::None),
        TRANSFORM_FUNCTIONS => decode_functions(reader).map(Transform::Functions),
        other => malformed(format_args!("transform value {other:#x}")),
    })?;
    state.apply(opv, value, |style| &mut style.transform);
    Ok(())
}
