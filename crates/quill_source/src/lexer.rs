//! A lightweight scanner for script text.
//!
//! Splits text into identifiers, numbers, string and template literals and
//! single-byte punctuation, skipping whitespace and comments. It does not
//! understand regular-expression literals or template substitutions; it is
//! meant for line-level checks and bracket matching, not for parsing.

/// The kind of a scanned [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier or keyword. Non-ASCII characters count as identifier
    /// characters.
    Identifier,
    /// A numeric literal.
    Number,
    /// A `'...'` or `"..."` string. Unterminated when the line or the text
    /// ends before the closing quote.
    Str {
        /// Whether the closing quote was found.
        terminated: bool,
    },
    /// A `` `...` `` template literal, which may span lines.
    Template {
        /// Whether the closing backtick was found.
        terminated: bool,
    },
    /// A `/* ...` comment that runs to the end of the text.
    UnterminatedComment,
    /// Any other single ASCII character.
    Punct(u8),
}

/// A scanned token with its byte range in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    /// What was scanned.
    pub kind: TokenKind,
    /// Byte offset of the first byte.
    pub start: usize,
    /// Byte offset one past the last byte.
    pub end: usize,
}

impl Token {
    /// The token's text within `source`.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Scans `source` into tokens. Whitespace and terminated comments are
/// dropped.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer {
        source: source.as_bytes(),
        pos: 0,
    };
    lexer.lex_all()
}

struct Lexer<'a> {
    source: &'a [u8],
    pos: usize,
}

impl Lexer<'_> {
    fn lex_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    fn peek(&self) -> u8 {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> u8 {
        self.source.get(self.pos + offset).copied().unwrap_or(0)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn next_token(&mut self) -> Option<Token> {
        loop {
            while !self.at_end() && self.peek().is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.at_end() {
                return None;
            }
            // Line comment: //
            if self.peek() == b'/' && self.peek_at(1) == b'/' {
                while !self.at_end() && self.peek() != b'\n' {
                    self.pos += 1;
                }
                continue;
            }
            // Block comment: /* ... */
            if self.peek() == b'/' && self.peek_at(1) == b'*' {
                let start = self.pos;
                self.pos += 2;
                loop {
                    if self.at_end() {
                        return Some(self.token(TokenKind::UnterminatedComment, start));
                    }
                    if self.peek() == b'*' && self.peek_at(1) == b'/' {
                        self.pos += 2;
                        break;
                    }
                    self.pos += 1;
                }
                continue;
            }
            break;
        }

        let start = self.pos;
        let b = self.peek();
        let kind = if is_ident_start(b) {
            while !self.at_end() && is_ident_continue(self.peek()) {
                self.pos += 1;
            }
            TokenKind::Identifier
        } else if b.is_ascii_digit() {
            while !self.at_end() && is_number_continue(self.peek()) {
                self.pos += 1;
            }
            TokenKind::Number
        } else if b == b'\'' || b == b'"' {
            TokenKind::Str {
                terminated: self.skip_quoted(b, false),
            }
        } else if b == b'`' {
            TokenKind::Template {
                terminated: self.skip_quoted(b, true),
            }
        } else {
            self.pos += 1;
            TokenKind::Punct(b)
        };
        Some(self.token(kind, start))
    }

    /// Skips a quoted literal starting at the opening quote. Returns whether
    /// the closing quote was found.
    fn skip_quoted(&mut self, quote: u8, multiline: bool) -> bool {
        self.pos += 1;
        while !self.at_end() {
            match self.peek() {
                b'\\' => self.pos = (self.pos + 2).min(self.source.len()),
                b'\n' if !multiline => return false,
                c if c == quote => {
                    self.pos += 1;
                    return true;
                }
                _ => self.pos += 1,
            }
        }
        false
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token {
        Token {
            kind,
            start,
            end: self.pos,
        }
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$' || b >= 0x80
}

fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}

fn is_number_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'.' || b == b'_'
}
