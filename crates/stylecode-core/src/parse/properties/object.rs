//! `object-fit` and `object-position`.

use stylecode_types::{CssError, Fixed, Unit};

use crate::bytecode::opcodes::*;
use crate::bytecode::{PropertyId, StyleBuffer};
use crate::cursor::TokenCursor;
use crate::lexer::Token;
use crate::parse::utils::{
    emit_flag_value, parse_flag_value, parse_keyword_longhand, parse_length_percentage,
};
use crate::parse::{ParseContext, transaction};

const OBJECT_FIT: [(&str, u16); 5] = [
    ("fill", OBJECT_FIT_FILL),
    ("contain", OBJECT_FIT_CONTAIN),
    ("cover", OBJECT_FIT_COVER),
    ("none", OBJECT_FIT_NONE),
    ("scale-down", OBJECT_FIT_SCALE_DOWN),
];

pub fn parse_object_fit(
    _ctx: &mut ParseContext,
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    parse_keyword_longhand(cursor, out, PropertyId::ObjectFit, &OBJECT_FIT)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Component {
    Left,
    Right,
    Top,
    Bottom,
    Center,
    Length(Fixed, Unit),
}

impl Component {
    fn is_keyword(self) -> bool {
        !matches!(self, Component::Length(..))
    }
}

/// `object-position: <component> <component>?`
///
/// A single value leaves the other axis centred. Two keywords may come in
/// either order; with a length involved the horizontal value comes first.
pub fn parse_object_position(
    _ctx: &mut ParseContext,
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    transaction(cursor, out, |cursor, out| {
        if let Some(flag) = parse_flag_value(cursor) {
            return emit_flag_value(out, flag, &[PropertyId::ObjectPosition]);
        }
        let first = parse_component(cursor)?;
        let mark = cursor.mark();
        let second = match parse_component(cursor) {
            Ok(second) => Some(second),
            Err(_) => {
                cursor.reset(mark);
                None
            },
        };

        let (horizontal, vertical) = match second {
            None if matches!(first, Component::Top | Component::Bottom) => {
                (Component::Center, first)
            },
            None => (first, Component::Center),
            Some(second) => {
                let swap = first.is_keyword()
                    && second.is_keyword()
                    && (matches!(first, Component::Top | Component::Bottom)
                        || matches!(second, Component::Left | Component::Right));
                if swap { (second, first) } else { (first, second) }
            },
        };

        let horz = match horizontal {
            Component::Left => OBJECT_POSITION_HORZ_LEFT,
            Component::Right => OBJECT_POSITION_HORZ_RIGHT,
            Component::Center => OBJECT_POSITION_HORZ_CENTER,
            Component::Length(..) => OBJECT_POSITION_HORZ_SET,
            Component::Top | Component::Bottom => return Err(CssError::Invalid),
        };
        let vert = match vertical {
            Component::Top => OBJECT_POSITION_VERT_TOP,
            Component::Bottom => OBJECT_POSITION_VERT_BOTTOM,
            Component::Center => OBJECT_POSITION_VERT_CENTER,
            Component::Length(..) => OBJECT_POSITION_VERT_SET,
            Component::Left | Component::Right => return Err(CssError::Invalid),
        };

        out.append_opv(PropertyId::ObjectPosition, 0, horz | vert)?;
        for component in [horizontal, vertical] {
            if let Component::Length(value, unit) = component {
                out.append_length(value, unit)?;
            }
        }
        Ok(())
    })
}

fn parse_component(cursor: &mut TokenCursor<'_>) -> Result<Component, CssError> {
    let mark = cursor.mark();
    cursor.consume_whitespace();
    if let Some(Token::Ident(name)) = cursor.peek() {
        let component = match name.to_ascii_lowercase().as_str() {
            "left" => Component::Left,
            "right" => Component::Right,
            "top" => Component::Top,
            "bottom" => Component::Bottom,
            "center" => Component::Center,
            _ => {
                cursor.reset(mark);
                return Err(CssError::Invalid);
            },
        };
        cursor.advance();
        return Ok(component);
    }
    cursor.reset(mark);
    let (value, unit) = parse_length_percentage(cursor, true)?;
    Ok(Component::Length(value, unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::Opv;
    use crate::test_utils::{assert_rejected, decode_lengths, run_parser};

    fn position(text: &str) -> (u16, Vec<(Fixed, Unit)>) {
        let (buf, _) = run_parser(parse_object_position, text).unwrap();
        let words = buf.words();
        (Opv::from_word(words[0]).value(), decode_lengths(&words[1..]))
    }

    #[test]
    fn fit_keywords() {
        let (buf, _) = run_parser(parse_object_fit, "scale-down").unwrap();
        assert_eq!(Opv::from_word(buf.words()[0]).value(), OBJECT_FIT_SCALE_DOWN);
        assert_rejected(parse_object_fit, "stretch");
    }

    #[test]
    fn single_keyword_centres_other_axis() {
        assert_eq!(
            position("left"),
            (OBJECT_POSITION_HORZ_LEFT | OBJECT_POSITION_VERT_CENTER, vec![])
        );
        assert_eq!(
            position("bottom"),
            (OBJECT_POSITION_HORZ_CENTER | OBJECT_POSITION_VERT_BOTTOM, vec![])
        );
    }

    #[test]
    fn keywords_in_either_order() {
        let expected = (OBJECT_POSITION_HORZ_RIGHT | OBJECT_POSITION_VERT_TOP, vec![]);
        assert_eq!(position("right top"), expected);
        assert_eq!(position("top right"), expected);
        assert_eq!(
            position("center left"),
            (OBJECT_POSITION_HORZ_LEFT | OBJECT_POSITION_VERT_CENTER, vec![])
        );
    }

    #[test]
    fn lengths_keep_their_order() {
        assert_eq!(
            position("10px -20%"),
            (
                OBJECT_POSITION_HORZ_SET | OBJECT_POSITION_VERT_SET,
                vec![(Fixed::from_int(10), Unit::Px), (Fixed::from_int(-20), Unit::Percent)]
            )
        );
        assert_eq!(
            position("left 3em"),
            (
                OBJECT_POSITION_HORZ_LEFT | OBJECT_POSITION_VERT_SET,
                vec![(Fixed::from_int(3), Unit::Em)]
            )
        );
    }

    #[test]
    fn single_length_is_horizontal() {
        assert_eq!(
            position("0"),
            (
                OBJECT_POSITION_HORZ_SET | OBJECT_POSITION_VERT_CENTER,
                vec![(Fixed::ZERO, Unit::Px)]
            )
        );
    }

    #[test]
    fn conflicting_axes_are_invalid() {
        assert_rejected(parse_object_position, "left right");
        assert_rejected(parse_object_position, "top bottom");
        assert_rejected(parse_object_position, "top 10px");
        assert_rejected(parse_object_position, "10px left");
        assert_rejected(parse_object_position, "middle");
    }
}
