//! `background-image`: `none`, a `url()`, or a gradient stored as `none`.

use stylecode_types::CssError;

use crate::bytecode::opcodes::{BACKGROUND_IMAGE_NONE, BACKGROUND_IMAGE_URI};
use crate::bytecode::{PropertyId, StyleBuffer};
use crate::cursor::TokenCursor;
use crate::lexer::Token;
use crate::parse::utils::{emit_flag_value, parse_flag_value};
use crate::parse::{ParseContext, transaction};

const GRADIENTS: [&str; 4] = [
    "linear-gradient",
    "radial-gradient",
    "repeating-linear-gradient",
    "repeating-radial-gradient",
];

/// `background-image: none | <url> | <gradient>`
///
/// Gradients are accepted syntactically and stored as `none`.
pub fn parse_background_image(
    ctx: &mut ParseContext,
    cursor: &mut TokenCursor<'_>,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    transaction(cursor, out, |cursor, out| {
        if let Some(flag) = parse_flag_value(cursor) {
            return emit_flag_value(out, flag, &[PropertyId::BackgroundImage]);
        }
        match cursor.advance() {
            Some(tok) if tok.is_ident("none") => {
                out.append_opv(PropertyId::BackgroundImage, 0, BACKGROUND_IMAGE_NONE)
            },
            Some(Token::Uri(reference)) => {
                let index = ctx.add_url(reference)?;
                out.append_opv(PropertyId::BackgroundImage, 0, BACKGROUND_IMAGE_URI)?;
                out.append(index)
            },
            Some(Token::Function(name))
                if GRADIENTS.iter().any(|g| name.eq_ignore_ascii_case(g)) =>
            {
                skip_function_body(cursor)?;
                log::debug!("background-image: {name}() not supported, using none");
                out.append_opv(PropertyId::BackgroundImage, 0, BACKGROUND_IMAGE_NONE)
            },
            _ => Err(CssError::Invalid),
        }
    })
}

/// Skip to the `)` closing an already-consumed function token.
fn skip_function_body(cursor: &mut TokenCursor<'_>) -> Result<(), CssError> {
    let mut depth = 1u32;
    while depth > 0 {
        match cursor.advance() {
            None | Some(Token::Eof) => return Err(CssError::Invalid),
            Some(Token::Function(_)) => depth += 1,
            Some(tok) if tok.is_char('(') => depth += 1,
            Some(tok) if tok.is_char(')') => depth -= 1,
            Some(_) => {},
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::Opv;
    use crate::test_utils::{assert_rejected, run_parser, run_parser_with};

    #[test]
    fn none() {
        let (buf, _) = run_parser(parse_background_image, "NONE").unwrap();
        assert_eq!(Opv::from_word(buf.words()[0]).value(), BACKGROUND_IMAGE_NONE);
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn url_is_resolved_and_interned() {
        let mut ctx = ParseContext::new(&stylecode_types::config::EngineConfig {
            base_url: "http://example.com/css/site.css".into(),
            ..Default::default()
        });
        let (buf, _) =
            run_parser_with(&mut ctx, parse_background_image, "url(img/bg.png)").unwrap();
        assert_eq!(Opv::from_word(buf.words()[0]).value(), BACKGROUND_IMAGE_URI);
        assert_eq!(
            ctx.strings().get(buf.words()[1]),
            Some("http://example.com/css/img/bg.png")
        );
    }

    #[test]
    fn gradient_becomes_none() {
        let (buf, consumed) = run_parser(
            parse_background_image,
            "linear-gradient(to right, rgb(0, 0, 0), red)",
        )
        .unwrap();
        assert_eq!(buf.words(), &[Opv::new(PropertyId::BackgroundImage, 0, 0).word()]);
        assert!(consumed > 1);
    }

    #[test]
    fn unterminated_gradient_is_invalid() {
        assert_rejected(parse_background_image, "radial-gradient(red, blue");
    }

    #[test]
    fn other_functions_are_invalid() {
        assert_rejected(parse_background_image, "image-set(a)");
        assert_rejected(parse_background_image, "auto");
    }
}
