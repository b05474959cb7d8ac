//! Helpers shared by the unit tests.

use stylecode_types::{CssError, Fixed, Origin, Unit};

use crate::bytecode::StyleBuffer;
use crate::cursor::TokenCursor;
use crate::lexer::tokenize;
use crate::parse::{ParseContext, PropertyParser, parse_declaration_list};
use crate::select::SelectState;

const SENTINEL: u32 = 0xfeed;

/// Run `parser` over `text` with a default context. Returns the emitted
/// words and the number of tokens consumed.
pub fn run_parser(parser: PropertyParser, text: &str) -> Result<(StyleBuffer, usize), CssError> {
    run_parser_with(&mut ParseContext::default(), parser, text)
}

pub fn run_parser_with(
    ctx: &mut ParseContext,
    parser: PropertyParser,
    text: &str,
) -> Result<(StyleBuffer, usize), CssError> {
    let tokens = tokenize(text);
    let mut cursor = TokenCursor::new(&tokens);
    let mut out = StyleBuffer::new();
    parser(ctx, &mut cursor, &mut out)?;
    Ok((out, cursor.position()))
}

/// Assert that `parser` rejects `text` and leaves cursor and buffer alone.
#[track_caller]
pub fn assert_rejected(parser: PropertyParser, text: &str) {
    let tokens = tokenize(text);
    let mut cursor = TokenCursor::new(&tokens);
    let mut out = StyleBuffer::new();
    out.append(SENTINEL).unwrap();
    let result = parser(&mut ParseContext::default(), &mut cursor, &mut out);
    assert_eq!(result, Err(CssError::Invalid), "{text:?} should be rejected");
    assert_eq!(cursor.position(), 0, "{text:?} moved the cursor");
    assert_eq!(out.words(), &[SENTINEL], "{text:?} left words behind");
}

/// Decode consecutive `(value, unit)` operand pairs.
pub fn decode_lengths(words: &[u32]) -> Vec<(Fixed, Unit)> {
    assert_eq!(words.len() % 2, 0, "odd operand count");
    words
        .chunks_exact(2)
        .map(|pair| (Fixed::from_raw(pair[0] as i32), Unit::from_word(pair[1]).unwrap()))
        .collect()
}

/// Parse `text` as a declaration list and cascade it into `state`.
pub fn cascade_text(state: &mut SelectState, text: &str, origin: Origin, specificity: u32) {
    let mut ctx = ParseContext::default();
    let style = parse_declaration_list(&mut ctx, &tokenize(text)).unwrap();
    state.cascade(&style, ctx.strings(), origin, specificity).unwrap();
}
