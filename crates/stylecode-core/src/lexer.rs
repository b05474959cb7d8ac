//! CSS lexer.
//!
//! Turns declaration text into the flat token stream the property parsers
//! consume. Numeric tokens keep their source text (sign included) so the
//! parsers can convert them straight to fixed point.

/// A single CSS token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Keyword or property name.
    Ident(String),
    /// Bare number: `42`, `-3.5`.
    Number(String),
    /// Percentage: `50%` (text excludes the `%`).
    Percentage(String),
    /// Number with unit: `10px`, `1.5em`.
    Dimension { value: String, unit: String },
    /// `url(...)`, quoted or not. Holds the unresolved reference.
    Uri(String),
    /// Function name immediately followed by `(`: `translate(`.
    Function(String),
    /// Quoted string.
    String(String),
    /// `#name`.
    Hash(String),
    /// Any other single character, including `:`, `;`, `/`, `,`, `(`, `)`.
    Char(char),
    /// Coalesced whitespace and comments.
    Whitespace,
    /// End-of-input sentinel.
    Eof,
}

impl Token {
    /// `true` for an identifier equal to `keyword`, ignoring ASCII case.
    pub fn is_ident(&self, keyword: &str) -> bool {
        matches!(self, Token::Ident(name) if name.eq_ignore_ascii_case(keyword))
    }

    pub fn is_char(&self, ch: char) -> bool {
        *self == Token::Char(ch)
    }
}

/// Tokenize `input`, always ending with [`Token::Eof`].
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).run()
}

struct Lexer {
    input: Vec<char>,
    pos: usize,
}

impl Lexer {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    fn run(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token();
            let done = tok == Token::Eof;
            tokens.push(tok);
            if done {
                return tokens;
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn skip_whitespace_chars(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(|ch| ch.is_ascii_whitespace()) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn skip_comment(&mut self) -> bool {
        if self.peek() != Some('/') || self.peek_at(1) != Some('*') {
            return false;
        }
        self.pos += 2;
        while self.pos < self.input.len() {
            if self.peek() == Some('*') && self.peek_at(1) == Some('/') {
                self.pos += 2;
                return true;
            }
            self.pos += 1;
        }
        // Unterminated comments run to the end of input.
        true
    }

    fn is_ident_start(ch: char) -> bool {
        ch.is_ascii_alphabetic() || ch == '_' || ch == '-' || !ch.is_ascii()
    }

    fn is_ident_char(ch: char) -> bool {
        Self::is_ident_start(ch) || ch.is_ascii_digit()
    }

    fn consume_ident(&mut self) -> String {
        let mut s = String::new();
        while let Some(ch) = self.peek().filter(|&c| Self::is_ident_char(c)) {
            s.push(ch);
            self.pos += 1;
        }
        s
    }

    fn consume_string(&mut self, quote: char) -> String {
        self.advance();
        let mut s = String::new();
        while let Some(ch) = self.advance() {
            match ch {
                '\\' => {
                    if let Some(escaped) = self.advance() {
                        s.push(escaped);
                    }
                },
                c if c == quote => break,
                c => s.push(c),
            }
        }
        s
    }

    /// `url(` has been consumed.
    fn consume_url(&mut self) -> Token {
        self.skip_whitespace_chars();
        let reference = match self.peek() {
            Some(q @ ('"' | '\'')) => self.consume_string(q),
            _ => {
                let mut s = String::new();
                while let Some(ch) = self.peek() {
                    if ch == ')' || ch.is_ascii_whitespace() {
                        break;
                    }
                    s.push(ch);
                    self.pos += 1;
                }
                s
            },
        };
        self.skip_whitespace_chars();
        if self.peek() == Some(')') {
            self.pos += 1;
        }
        Token::Uri(reference)
    }

    fn starts_number(&self) -> bool {
        let digit_at = |offset| self.peek_at(offset).is_some_and(|c: char| c.is_ascii_digit());
        match self.peek() {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => digit_at(1),
            Some('+' | '-') => digit_at(1) || (self.peek_at(1) == Some('.') && digit_at(2)),
            _ => false,
        }
    }

    fn consume_number_text(&mut self) -> String {
        let mut s = String::new();
        if let Some(sign @ ('+' | '-')) = self.peek() {
            s.push(sign);
            self.pos += 1;
        }
        while let Some(ch) = self.peek().filter(char::is_ascii_digit) {
            s.push(ch);
            self.pos += 1;
        }
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            s.push('.');
            self.pos += 1;
            while let Some(ch) = self.peek().filter(char::is_ascii_digit) {
                s.push(ch);
                self.pos += 1;
            }
        }
        s
    }

    fn numeric(&mut self) -> Token {
        let value = self.consume_number_text();
        if self.peek() == Some('%') {
            self.pos += 1;
            return Token::Percentage(value);
        }
        if self.peek().is_some_and(Self::is_ident_start) {
            let unit = self.consume_ident();
            return Token::Dimension { value, unit };
        }
        Token::Number(value)
    }

    fn next_token(&mut self) -> Token {
        let mut saw_ws = false;
        while self.skip_whitespace_chars() || self.skip_comment() {
            saw_ws = true;
        }
        let Some(ch) = self.peek() else {
            return Token::Eof;
        };
        if saw_ws {
            return Token::Whitespace;
        }

        if ch == '"' || ch == '\'' {
            return Token::String(self.consume_string(ch));
        }
        if self.starts_number() {
            return self.numeric();
        }
        if ch == '#' {
            self.pos += 1;
            return Token::Hash(self.consume_ident());
        }
        // A lone `-` not followed by a name is a delimiter.
        let ident_follows = ch != '-' || self.peek_at(1).is_some_and(Self::is_ident_start);
        if Self::is_ident_start(ch) && ident_follows {
            let name = self.consume_ident();
            if self.peek() == Some('(') {
                self.pos += 1;
                if name.eq_ignore_ascii_case("url") {
                    return self.consume_url();
                }
                return Token::Function(name);
            }
            return Token::Ident(name);
        }

        self.pos += 1;
        Token::Char(ch)
    }
}
