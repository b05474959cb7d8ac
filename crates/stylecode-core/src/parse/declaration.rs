//! Declaration lists: `name: value [!important]; ...`.

use stylecode_types::CssError;

use super::{ParseContext, property_parser};
use crate::bytecode::StyleBuffer;
use crate::cursor::TokenCursor;
use crate::lexer::Token;

/// Parse an inline declaration list, optionally wrapped in `{ }`.
///
/// Invalid declarations are dropped and parsing continues with the next
/// one. An allocation failure aborts the whole list.
pub fn parse_declaration_list(
    ctx: &mut ParseContext,
    tokens: &[Token],
) -> Result<StyleBuffer, CssError> {
    let mut out = ctx.new_buffer();
    let mut cursor = TokenCursor::new(tokens);

    cursor.consume_whitespace();
    if cursor.peek().is_some_and(|t| t.is_char('{')) {
        cursor.advance();
    }

    loop {
        cursor.consume_whitespace();
        match cursor.peek() {
            None | Some(Token::Eof) => break,
            Some(t) if t.is_char('}') => break,
            Some(t) if t.is_char(';') => {
                cursor.advance();
                continue;
            },
            _ => {},
        }

        let Some((name, value)) = split_declaration(&mut cursor) else {
            skip_to_semicolon_or_brace(&mut cursor);
            continue;
        };
        let (value, important) = strip_important(value);

        match parse_value(ctx, name, value, important, &mut out) {
            Ok(()) => {},
            Err(CssError::Invalid) => log::debug!("dropping invalid declaration for {name}"),
            Err(CssError::NoMem) => return Err(CssError::NoMem),
        }
        if cursor.peek().is_some_and(|t| t.is_char(';')) {
            cursor.advance();
        }
    }

    Ok(out)
}

/// Parse a single property value into `out`.
///
/// `tokens` must hold the complete value and nothing else; leftover tokens
/// make the declaration invalid. `out` is untouched on failure.
pub fn parse_property(
    ctx: &mut ParseContext,
    name: &str,
    tokens: &[Token],
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    let parser = property_parser(name).ok_or(CssError::Invalid)?;
    let mut cursor = TokenCursor::new(tokens);
    let len = out.len();

    cursor.consume_whitespace();
    parser(ctx, &mut cursor, out)?;
    cursor.consume_whitespace();
    if !cursor.at_end() {
        out.truncate(len);
        return Err(CssError::Invalid);
    }
    Ok(())
}

fn parse_value(
    ctx: &mut ParseContext,
    name: &str,
    value: &[Token],
    important: bool,
    out: &mut StyleBuffer,
) -> Result<(), CssError> {
    let mut decl = ctx.new_buffer();
    parse_property(ctx, name, value, &mut decl)?;
    if important {
        decl.make_important();
    }
    out.merge(&decl)
}

/// Read `name :` and the raw value tokens up to the next top-level `;`
/// or `}`. `None` when the name or colon is missing.
fn split_declaration<'a>(cursor: &mut TokenCursor<'a>) -> Option<(&'a str, &'a [Token])> {
    let Some(Token::Ident(name)) = cursor.peek() else {
        return None;
    };
    cursor.advance();
    cursor.consume_whitespace();
    if !cursor.peek().is_some_and(|t| t.is_char(':')) {
        return None;
    }
    cursor.advance();
    Some((name.as_str(), collect_value_tokens(cursor)))
}

fn collect_value_tokens<'a>(cursor: &mut TokenCursor<'a>) -> &'a [Token] {
    let start = cursor.mark();
    let mut depth = 0u32;
    while let Some(tok) = cursor.peek() {
        match tok {
            Token::Eof => break,
            Token::Char(';' | '}') if depth == 0 => break,
            Token::Function(_) | Token::Char('(') => depth += 1,
            Token::Char(')') => depth = depth.saturating_sub(1),
            _ => {},
        }
        cursor.advance();
    }
    cursor.slice_since(start)
}

/// Remove a trailing `! important` from `value`.
fn strip_important(value: &[Token]) -> (&[Token], bool) {
    let trimmed = trim_trailing_whitespace(value);
    let Some((last, rest)) = trimmed.split_last() else {
        return (value, false);
    };
    if !last.is_ident("important") {
        return (value, false);
    }
    let rest = trim_trailing_whitespace(rest);
    match rest.split_last() {
        Some((bang, rest)) if bang.is_char('!') => (rest, true),
        _ => (value, false),
    }
}

fn trim_trailing_whitespace(tokens: &[Token]) -> &[Token] {
    let end = tokens
        .iter()
        .rposition(|t| *t != Token::Whitespace)
        .map_or(0, |i| i + 1);
    &tokens[..end]
}

fn skip_to_semicolon_or_brace(cursor: &mut TokenCursor<'_>) {
    while let Some(tok) = cursor.peek() {
        match tok {
            Token::Eof => break,
            t if t.is_char('}') => break,
            t if t.is_char(';') => {
                cursor.advance();
                break;
            },
            _ => {
                cursor.advance();
            },
        }
    }
}
