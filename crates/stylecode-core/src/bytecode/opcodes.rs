//! Per-property value enums carried in the OPV header.
//!
//! Values with a `SET`-style code are followed by operand words; the rest
//! stand alone.

pub const ALIGN_CONTENT_STRETCH: u16 = 0x0;
pub const ALIGN_CONTENT_FLEX_START: u16 = 0x1;
pub const ALIGN_CONTENT_FLEX_END: u16 = 0x2;
pub const ALIGN_CONTENT_CENTER: u16 = 0x3;
pub const ALIGN_CONTENT_SPACE_BETWEEN: u16 = 0x4;
pub const ALIGN_CONTENT_SPACE_AROUND: u16 = 0x5;
pub const ALIGN_CONTENT_SPACE_EVENLY: u16 = 0x6;

pub const JUSTIFY_CONTENT_FLEX_START: u16 = 0x0;
pub const JUSTIFY_CONTENT_FLEX_END: u16 = 0x1;
pub const JUSTIFY_CONTENT_CENTER: u16 = 0x2;
pub const JUSTIFY_CONTENT_SPACE_BETWEEN: u16 = 0x3;
pub const JUSTIFY_CONTENT_SPACE_AROUND: u16 = 0x4;
pub const JUSTIFY_CONTENT_SPACE_EVENLY: u16 = 0x5;

pub const BACKGROUND_IMAGE_NONE: u16 = 0x0;
/// Operand: string table index of the resolved URL.
pub const BACKGROUND_IMAGE_URI: u16 = 0x80;

/// Shared by `row-gap` and `column-gap`.
pub const GAP_NORMAL: u16 = 0x0;
/// Operands: fixed value, unit.
pub const GAP_SET: u16 = 0x80;

/// Shared by the four grid line longhands.
pub const GRID_LINE_AUTO: u16 = 0x0;
/// Operand: fixed-point line number.
pub const GRID_LINE_SET: u16 = 0x80;

/// Shared by `grid-template-rows` and `grid-template-columns`.
pub const GRID_TEMPLATE_NONE: u16 = 0x0;
/// Operands: track count, then a fixed value and unit per track.
pub const GRID_TEMPLATE_SET: u16 = 0x80;

pub const GRID_AUTO_FLOW_ROW: u16 = 0x0;
pub const GRID_AUTO_FLOW_COLUMN: u16 = 0x1;
pub const GRID_AUTO_FLOW_ROW_DENSE: u16 = 0x2;
pub const GRID_AUTO_FLOW_COLUMN_DENSE: u16 = 0x3;

pub const OBJECT_FIT_FILL: u16 = 0x0;
pub const OBJECT_FIT_CONTAIN: u16 = 0x1;
pub const OBJECT_FIT_COVER: u16 = 0x2;
pub const OBJECT_FIT_NONE: u16 = 0x3;
pub const OBJECT_FIT_SCALE_DOWN: u16 = 0x4;

// object-position packs the horizontal choice in the high nibble and the
// vertical choice in the low nibble. `*_SET` halves carry a fixed value and
// unit, horizontal first.
pub const OBJECT_POSITION_HORZ_MASK: u16 = 0xf0;
pub const OBJECT_POSITION_HORZ_SET: u16 = 0x80;
pub const OBJECT_POSITION_HORZ_CENTER: u16 = 0x40;
pub const OBJECT_POSITION_HORZ_RIGHT: u16 = 0x20;
pub const OBJECT_POSITION_HORZ_LEFT: u16 = 0x10;
pub const OBJECT_POSITION_VERT_MASK: u16 = 0x0f;
pub const OBJECT_POSITION_VERT_SET: u16 = 0x08;
pub const OBJECT_POSITION_VERT_CENTER: u16 = 0x04;
pub const OBJECT_POSITION_VERT_BOTTOM: u16 = 0x02;
pub const OBJECT_POSITION_VERT_TOP: u16 = 0x01;

pub const TRANSFORM_NONE: u16 = 0x0;
/// Operands: function count, then per function its code, a fixed value and
/// unit, and a second value and unit for the two-argument functions.
pub const TRANSFORM_FUNCTIONS: u16 = 0x1;

pub const TRANSFORM_FN_TRANSLATE: u32 = 1;
pub const TRANSFORM_FN_TRANSLATE_X: u32 = 2;
pub const TRANSFORM_FN_TRANSLATE_Y: u32 = 3;
pub const TRANSFORM_FN_SCALE: u32 = 4;
pub const TRANSFORM_FN_SCALE_X: u32 = 5;
pub const TRANSFORM_FN_SCALE_Y: u32 = 6;
pub const TRANSFORM_FN_ROTATE: u32 = 7;

/// Words a transform function occupies, code included.
pub const fn transform_fn_len(code: u32) -> usize {
    match code {
        TRANSFORM_FN_TRANSLATE | TRANSFORM_FN_SCALE => 5,
        _ => 3,
    }
}
