//! Cascade interpreter.
//!
//! [`SelectState::cascade`] walks a declaration blob and hands each
//! declaration to its property's handler. The handler decodes the operands,
//! then asks [`SelectState`] whether the declaration outranks whatever is
//! already recorded for that property; only a winner is written to the
//! computed style. Losing values are dropped on the spot.

use stylecode_types::{CssError, Origin};

use crate::bytecode::{BytecodeReader, FlagValue, Opv, PropertyId, StringTable, StyleBuffer};
use crate::computed::{ComputedStyle, Slot};

/// Build a [`PropertyHandler`] constant for the `ComputedStyle` field
/// `$field`, with `$cascade` as its cascade function.
macro_rules! property_handler {
    ($name:ident, $field:ident, $cascade:path) => {
        pub(crate) const $name: $crate::select::PropertyHandler = $crate::select::PropertyHandler {
            cascade: $cascade,
            initial: |style| style.$field = Default::default(),
            copy: |from, to| {
                to.$field = $crate::computed::TryClone::try_clone(&from.$field)?;
                Ok(())
            },
            compose: |parent, child, result| {
                result.$field = $crate::computed::compose_slot(&parent.$field, &child.$field)?;
                Ok(())
            },
            is_inherit: |style| style.$field.is_inherit(),
        };
    };
}

mod properties;

// -----------------------------------------------------------------------
// Handler table
// -----------------------------------------------------------------------

/// Decode one declaration and apply it if it wins. Called through
/// [`SelectState::cascade`], which records the declaration's priority first.
pub type CascadeFn =
    fn(Opv, &mut BytecodeReader<'_>, &StringTable, &mut SelectState) -> Result<(), CssError>;

/// The entry points every property provides.
#[derive(Clone, Copy)]
pub struct PropertyHandler {
    pub cascade: CascadeFn,
    /// Set the CSS initial value.
    pub initial: fn(&mut ComputedStyle),
    /// Deep copy `from` into `to`.
    pub copy: fn(&ComputedStyle, &mut ComputedStyle) -> Result<(), CssError>,
    /// Write the composed value of `(parent, child)` into the result.
    pub compose: fn(&ComputedStyle, &ComputedStyle, &mut ComputedStyle) -> Result<(), CssError>,
    pub is_inherit: fn(&ComputedStyle) -> bool,
}

/// Entry points for `property`.
pub fn handler(property: PropertyId) -> PropertyHandler {
    use properties::*;

    match property {
        PropertyId::AlignContent => alignment::ALIGN_CONTENT,
        PropertyId::JustifyContent => alignment::JUSTIFY_CONTENT,
        PropertyId::BackgroundImage => background::BACKGROUND_IMAGE,
        PropertyId::RowGap => gap::ROW_GAP,
        PropertyId::ColumnGap => gap::COLUMN_GAP,
        PropertyId::GridAutoFlow => grid::GRID_AUTO_FLOW,
        PropertyId::GridColumnEnd => grid::GRID_COLUMN_END,
        PropertyId::GridColumnStart => grid::GRID_COLUMN_START,
        PropertyId::GridRowEnd => grid::GRID_ROW_END,
        PropertyId::GridRowStart => grid::GRID_ROW_START,
        PropertyId::GridTemplateColumns => grid_template::GRID_TEMPLATE_COLUMNS,
        PropertyId::GridTemplateRows => grid_template::GRID_TEMPLATE_ROWS,
        PropertyId::ObjectFit => object::OBJECT_FIT,
        PropertyId::ObjectPosition => object::OBJECT_POSITION,
        PropertyId::Transform => transform::TRANSFORM,
    }
}

/// Resolve a declaration's flag value, or decode its own value.
///
/// None of the supported properties is inherited, so `unset` and `revert`
/// both mean the initial value.
pub(crate) fn cascaded<T: Default>(
    opv: Opv,
    decode: impl FnOnce() -> Result<T, CssError>,
) -> Result<Slot<T>, CssError> {
    match opv.flag_value() {
        Some(FlagValue::Inherit) => Ok(Slot::Inherit),
        Some(FlagValue::Initial | FlagValue::Unset | FlagValue::Revert) => Ok(Slot::default()),
        None => decode().map(Slot::Set),
    }
}

// -----------------------------------------------------------------------
// Selection state
// -----------------------------------------------------------------------

/// Where a winning declaration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Priority {
    important: bool,
    origin: Origin,
    specificity: u32,
}

impl Priority {
    /// Sort key: importance, then origin (reversed for important
    /// declarations), then specificity.
    fn key(self) -> (bool, u8, u32) {
        let origin = match self.origin {
            Origin::UserAgent => 0,
            Origin::User => 1,
            Origin::Author => 2,
        };
        let origin = if self.important { 2 - origin } else { origin };
        (self.important, origin, self.specificity)
    }
}

/// Cascade state for one element.
///
/// Declarations are fed in document order; a later declaration wins ties.
#[derive(Debug)]
pub struct SelectState {
    computed: ComputedStyle,
    winners: [Option<Priority>; PropertyId::COUNT],
    current: Priority,
}

impl SelectState {
    pub fn new() -> Self {
        Self {
            computed: ComputedStyle::default(),
            winners: [None; PropertyId::COUNT],
            current: Priority {
                important: false,
                origin: Origin::Author,
                specificity: 0,
            },
        }
    }

    /// The style as cascaded so far.
    pub fn computed(&self) -> &ComputedStyle {
        &self.computed
    }

    /// Apply every declaration in `style`.
    ///
    /// `strings` must be the table the blob was parsed with. On
    /// [`CssError::NoMem`] the element's style is incomplete and should be
    /// discarded.
    ///
    /// # Panics
    ///
    /// If `style` is not well-formed bytecode.
    pub fn cascade(
        &mut self,
        style: &StyleBuffer,
        strings: &StringTable,
        origin: Origin,
        specificity: u32,
    ) -> Result<(), CssError> {
        let mut reader = BytecodeReader::new(style.words());
        while !reader.at_end() {
            let opv = Opv::from_word(reader.next_word());
            self.current = Priority {
                important: opv.is_important(),
                origin,
                specificity,
            };
            if let Err(err) = (handler(opv.property()).cascade)(opv, &mut reader, strings, self) {
                log::warn!("cascade of {} failed: {err}", opv.property().name());
                return Err(err);
            }
        }
        Ok(())
    }

    /// Decide whether the declaration being cascaded beats the recorded
    /// one for its property, and record it if so.
    pub(crate) fn outranks_existing(&mut self, opv: Opv) -> bool {
        let property = opv.property();
        let new = self.current;
        let wins = match self.winners[property.index()] {
            None => true,
            Some(existing) => new.key() >= existing.key(),
        };
        log::trace!(
            "{}: {:?} {}",
            property.name(),
            new,
            if wins { "wins" } else { "loses" }
        );
        if wins {
            self.winners[property.index()] = Some(new);
        }
        wins
    }

    /// Store `value` in the slot chosen by `field` if the current
    /// declaration wins; otherwise drop it.
    pub(crate) fn apply<T>(
        &mut self,
        opv: Opv,
        value: Slot<T>,
        field: impl FnOnce(&mut ComputedStyle) -> &mut Slot<T>,
    ) {
        if self.outranks_existing(opv) {
            *field(&mut self.computed) = value;
        }
    }

    /// The cascaded style. Slots may still be [`Slot::Inherit`].
    pub fn finish(self) -> ComputedStyle {
        self.computed
    }
}

impl Default for SelectState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::computed::{
        GridLine, GridTemplate, JustifyContent, Length, ObjectFit, Transform, TransformFunction,
        TransformKind,
    };
    use crate::test_utils::cascade_text;
    use stylecode_types::{Fixed, Unit};

    fn cascade_all(decls: &[(&str, Origin, u32)]) -> ComputedStyle {
        let mut state = SelectState::new();
        for &(text, origin, specificity) in decls {
            cascade_text(&mut state, text, origin, specificity);
        }
        state.finish()
    }

    #[test]
    fn important_wins_in_either_order() {
        let a = ("object-fit: cover !important", Origin::Author, 0);
        let b = ("object-fit: contain", Origin::Author, 100);
        assert_eq!(cascade_all(&[a, b]).object_fit, Slot::Set(ObjectFit::Cover));
        assert_eq!(cascade_all(&[b, a]).object_fit, Slot::Set(ObjectFit::Cover));
    }

    #[test]
    fn origin_order_flips_for_important() {
        let normal = cascade_all(&[
            ("object-fit: none", Origin::Author, 0),
            ("object-fit: cover", Origin::UserAgent, 50),
        ]);
        assert_eq!(normal.object_fit, Slot::Set(ObjectFit::None));

        let important = cascade_all(&[
            ("object-fit: cover !important", Origin::UserAgent, 0),
            ("object-fit: none !important", Origin::Author, 50),
        ]);
        assert_eq!(important.object_fit, Slot::Set(ObjectFit::Cover));
    }

    #[test]
    fn specificity_then_document_order() {
        let style = cascade_all(&[
            ("justify-content: center", Origin::Author, 10),
            ("justify-content: flex-end", Origin::Author, 1),
        ]);
        assert_eq!(style.justify_content, Slot::Set(JustifyContent::Center));

        let style = cascade_all(&[
            ("justify-content: center", Origin::Author, 1),
            ("justify-content: flex-end", Origin::Author, 1),
        ]);
        assert_eq!(style.justify_content, Slot::Set(JustifyContent::FlexEnd));
    }

    #[test]
    fn flag_values() {
        let style = cascade_all(&[
            ("grid-row-start: 3; transform: rotate(1deg)", Origin::Author, 0),
            ("grid-row-start: initial; transform: inherit", Origin::Author, 0),
        ]);
        assert_eq!(style.grid_row_start, Slot::Set(GridLine::Auto));
        assert_eq!(style.transform, Slot::Inherit);

        let style = cascade_all(&[("row-gap: 4px; row-gap: unset", Origin::Author, 0)]);
        assert_eq!(style.row_gap, ComputedStyle::default().row_gap);
    }

    #[test]
    fn losing_list_is_dropped() {
        let style = cascade_all(&[
            ("grid-template-rows: 1px 2px !important", Origin::Author, 0),
            ("grid-template-rows: 9px", Origin::Author, 0),
        ]);
        assert_eq!(
            style.grid_template_rows,
            Slot::Set(GridTemplate::Tracks(vec![Length::px(1), Length::px(2)]))
        );
    }

    #[test]
    fn shorthand_expansion_reaches_longhands() {
        let style = cascade_all(&[("grid-area: 2; gap: 3px 5%", Origin::Author, 0)]);
        assert_eq!(style.grid_row_start, Slot::Set(GridLine::Line(2)));
        assert_eq!(style.grid_column_start, Slot::Set(GridLine::Auto));
        assert_eq!(style.grid_column_end, Slot::Set(GridLine::Auto));
        assert_eq!(style.column_gap.value().unwrap().to_string(), "5%");
    }

    #[test]
    fn transform_arguments_are_defaulted() {
        let style = cascade_all(&[("transform: translate(10px) scale(2)", Origin::Author, 0)]);
        let two = Length::new(Fixed::from_int(2), Unit::Number);
        assert_eq!(
            style.transform,
            Slot::Set(Transform::Functions(vec![
                TransformFunction {
                    kind: TransformKind::Translate,
                    first: Length::px(10),
                    second: Length::px(0),
                },
                TransformFunction {
                    kind: TransformKind::Scale,
                    first: two,
                    second: two,
                },
            ]))
        );
    }

    #[test]
    fn finish_then_compose() {
        let parent = cascade_all(&[("grid-template-columns: 10px auto", Origin::Author, 0)])
            .resolve_root()
            .unwrap();
        let child = cascade_all(&[("grid-template-columns: inherit", Origin::Author, 0)]);
        let composed = ComputedStyle::compose(&parent, &child).unwrap();
        assert_eq!(
            composed.grid_template_columns.value().unwrap().to_string(),
            "10px 1fr"
        );
    }

    #[test]
    #[should_panic(expected = "malformed style bytecode")]
    fn truncated_operands_panic() {
        let mut style = StyleBuffer::new();
        style
            .append_opv(PropertyId::RowGap, 0, crate::bytecode::opcodes::GAP_SET)
            .unwrap();
        let _ = SelectState::new().cascade(&style, &StringTable::new(), Origin::Author, 0);
    }
}
