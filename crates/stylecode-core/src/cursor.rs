//! Read cursor over a pre-lexed token sequence.

use crate::lexer::Token;

/// A saved cursor position, produced by [`TokenCursor::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

/// Forward-only reader with mark/reset backtracking.
///
/// Running off the end of the slice behaves like reaching [`Token::Eof`]:
/// `peek` and `advance` return `None` and the position stays put.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Index of the next token.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The next token, without consuming it.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Consume and return the next token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let tok = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(tok)
    }

    pub fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    pub fn reset(&mut self, mark: Mark) {
        self.pos = mark.0;
    }

    /// A second cursor over the same tokens starting at `mark`.
    pub fn fork(&self, mark: Mark) -> TokenCursor<'a> {
        TokenCursor {
            tokens: self.tokens,
            pos: mark.0,
        }
    }

    /// Tokens consumed since `mark`.
    pub fn slice_since(&self, mark: Mark) -> &'a [Token] {
        &self.tokens[mark.0.min(self.pos)..self.pos]
    }

    pub fn consume_whitespace(&mut self) {
        while self.peek() == Some(&Token::Whitespace) {
            self.pos += 1;
        }
    }

    /// `true` when nothing but [`Token::Eof`] (or nothing at all) remains.
    pub fn at_end(&self) -> bool {
        matches!(self.peek(), None | Some(Token::Eof))
    }
}
