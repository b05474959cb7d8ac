//! `align-content`, `justify-content` and the `place-content` shorthand.

use stylecode_types::CssError;

use crate::bytecode::opcodes::*;
use crate::bytecode::{PropertyId, StyleBuffer};
use crate::cursor::TokenCursor;
use crate::parse::utils::parse_keyword_longhand;
use crate::parse::{ParseContext, transaction};

const ALIGN_CONTENT: [(&str, u16); 7] = [
    ("stretch", ALIGN_CONTENT_STRETCH),
    ("flex-start", ALIGN_CONTENT_FLEX_START),
    ("flex-end", ALIGN_CONTENT_FLEX_END),
    ("center", ALIGN_CONTENT_CENTER),
    ("space-between", ALIGN_CONTENT_SPACE_BETWEEN),
    ("space-around", ALIGN_CONTENT_SPACE_AROUND),
    ("space-evenly", ALIGN_CONTENT_SPACE_EVENLY),
];

const JUSTIFY_CONTENT: [(&str, u16); 6] = [
    ("flex-start", JUSTIFY_CONTENT_FLEX_START),
    ("flex-end", JUSTIFY_CONTENT_FLEX_END),
    ("center", JUSTIFY_CONTENT_CENTER),
    ("space-between", JUSTIFY_CONTENT_SPACE_BETWEEN),
    ("space-around", JUSTIFY_CONTENT_SPACE_AROUND),
    ("space-evenly", JUSTIFY_CONTENT_SPACE_EVENLY),
];

pub fn parse_align_content(
    _ctx: &mut ParseContext,
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    parse_keyword_longhand(cursor, out, PropertyId::AlignContent, &ALIGN_CONTENT)
}

pub fn parse_justify_content(
    _ctx: &mut ParseContext,
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    parse_keyword_longhand(cursor, out, PropertyId::JustifyContent, &JUSTIFY_CONTENT)
}

fn is_flag_value(buf: &StyleBuffer) -> bool {
    buf.declarations().next().is_some_and(|(opv, _)| opv.has_flag_value())
}

/// `place-content: <align-content> <justify-content>?`
///
/// Each half goes through its longhand's own grammar on a scratch buffer.
/// Without a second value the first value's tokens are parsed again as
/// `justify-content`, so a keyword only `align-content` knows (`stretch`)
/// rejects the whole shorthand. A CSS-wide keyword must stand alone.
pub fn parse_place_content(
    ctx: &mut ParseContext,
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    transaction(cursor, out, |cursor, out| {
        let start = cursor.mark();
        let mut align = ctx.new_buffer();
        parse_align_content(ctx, cursor, &mut align)?;

        let after_align = cursor.mark();
        let mut justify = ctx.new_buffer();
        cursor.consume_whitespace();
        let explicit = if cursor.at_end() {
            false
        } else if is_flag_value(&align) {
            return Err(CssError::Invalid);
        } else {
            match parse_justify_content(ctx, cursor, &mut justify) {
                Ok(()) if is_flag_value(&justify) => return Err(CssError::Invalid),
                Ok(()) => true,
                Err(CssError::Invalid) => false,
                Err(err) => return Err(err),
            }
        };

        if !explicit {
            cursor.reset(after_align);
            log::debug!("place-content: re-parsing first value as justify-content");
            let mut again = cursor.fork(start);
            parse_justify_content(ctx, &mut again, &mut justify)?;
        }

        out.merge(&align)?;
        out.merge(&justify)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::{FlagValue, Opv};
    use crate::test_utils::{assert_rejected, run_parser};

    #[test]
    fn align_keywords() {
        let (buf, _) = run_parser(parse_align_content, "space-evenly").unwrap();
        let opv = Opv::from_word(buf.words()[0]);
        assert_eq!(opv.property(), PropertyId::AlignContent);
        assert_eq!(opv.value(), ALIGN_CONTENT_SPACE_EVENLY);
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn justify_rejects_stretch() {
        assert_rejected(parse_justify_content, "stretch");
    }

    #[test]
    fn flag_value() {
        let (buf, _) = run_parser(parse_align_content, "unset").unwrap();
        assert_eq!(Opv::from_word(buf.words()[0]).flag_value(), Some(FlagValue::Unset));
    }

    #[test]
    fn place_content_two_values() {
        let (buf, consumed) = run_parser(parse_place_content, "stretch flex-end").unwrap();
        assert_eq!(consumed, 3);
        let decls: Vec<_> = buf.declarations().map(|(opv, _)| (opv.property(), opv.value())).collect();
        assert_eq!(
            decls,
            vec![
                (PropertyId::AlignContent, ALIGN_CONTENT_STRETCH),
                (PropertyId::JustifyContent, JUSTIFY_CONTENT_FLEX_END),
            ]
        );
    }

    #[test]
    fn place_content_single_value_applies_to_both() {
        let (buf, consumed) = run_parser(parse_place_content, "center").unwrap();
        assert_eq!(consumed, 1);
        let decls: Vec<_> = buf.declarations().map(|(opv, _)| (opv.property(), opv.value())).collect();
        assert_eq!(
            decls,
            vec![
                (PropertyId::AlignContent, ALIGN_CONTENT_CENTER),
                (PropertyId::JustifyContent, JUSTIFY_CONTENT_CENTER),
            ]
        );
    }

    #[test]
    fn place_content_single_stretch_is_invalid() {
        assert_rejected(parse_place_content, "stretch");
    }

    #[test]
    fn place_content_unknown_second_value_is_left_unconsumed() {
        let (buf, consumed) = run_parser(parse_place_content, "center bogus").unwrap();
        assert_eq!(consumed, 1);
        assert_eq!(buf.declarations().count(), 2);
    }

    #[test]
    fn place_content_inherit_reaches_both() {
        let (buf, _) = run_parser(parse_place_content, "inherit").unwrap();
        for (opv, _) in buf.declarations() {
            assert_eq!(opv.flag_value(), Some(FlagValue::Inherit));
        }
        assert_eq!(buf.declarations().count(), 2);
    }

    #[test]
    fn place_content_css_wide_keyword_must_stand_alone() {
        assert_rejected(parse_place_content, "center inherit");
        assert_rejected(parse_place_content, "inherit center");
        assert_rejected(parse_place_content, "initial unset");
    }
}
