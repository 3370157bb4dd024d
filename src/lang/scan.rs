use super::token::{Token, TokenKind};
use super::LineNumber;

/// Scan a whole source buffer. The last token is always `Eof`.
pub fn lex(s: &str) -> Vec<Token> {
    Scanner::new(s).collect()
}

fn is_lox_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

fn is_lox_alphabetic(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

/// ## Lazy tokenizer
///
/// Each call to [`Scanner::scan_token`] produces exactly one token.
/// Nothing is buffered; the compiler pulls tokens as it needs them.

#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    start: usize,
    current: usize,
    line: LineNumber,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source,
            start: 0,
            current: 0,
            line: 1,
            finished: false,
        }
    }

    pub fn scan_token(&mut self) -> Token<'a> {
        self.skip_whitespace();
        self.start = self.current;
        let line = self.line;
        let c = match self.peek() {
            Some(c) => c,
            None => return Token::new(TokenKind::Eof, "", line),
        };
        if is_lox_digit(c) {
            return self.number();
        }
        if is_lox_alphabetic(c) {
            return self.identifier();
        }
        if c == b'"' {
            return self.string();
        }
        self.advance();
        use TokenKind::*;
        let kind = match c {
            b'(' => LeftParen,
            b')' => RightParen,
            b'{' => LeftBrace,
            b'}' => RightBrace,
            b';' => Semicolon,
            b',' => Comma,
            b'.' => Dot,
            b'-' => Minus,
            b'+' => Plus,
            b'/' => Slash,
            b'*' => Star,
            b'!' => self.either(b'=', BangEqual, Bang),
            b'=' => self.either(b'=', EqualEqual, Equal),
            b'<' => self.either(b'=', LessEqual, Less),
            b'>' => self.either(b'=', GreaterEqual, Greater),
            _ => {
                // Step over the rest of a multi-byte character so the
                // cursor stays on a char boundary.
                while !self.source.is_char_boundary(self.current) {
                    self.current += 1;
                }
                return Token::error("Unexpected character.", line);
            }
        };
        self.make_token(kind, line)
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.current).copied()
    }

    fn peek_next(&self) -> Option<u8> {
        self.source.as_bytes().get(self.current + 1).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let c = self.peek()?;
        self.current += 1;
        if c == b'\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn either(&mut self, expected: u8, matched: TokenKind, otherwise: TokenKind) -> TokenKind {
        if self.peek() == Some(expected) {
            self.current += 1;
            matched
        } else {
            otherwise
        }
    }

    fn make_token(&self, kind: TokenKind, line: LineNumber) -> Token<'a> {
        Token::new(kind, &self.source[self.start..self.current], line)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                b' ' | b'\r' | b'\t' | b'\n' => {
                    self.advance();
                }
                b'/' if self.peek_next() == Some(b'/') => {
                    while !matches!(self.peek(), Some(b'\n') | None) {
                        self.advance();
                    }
                }
                _ => return,
            }
        }
    }

    fn number(&mut self) -> Token<'a> {
        let line = self.line;
        while self.peek().map_or(false, is_lox_digit) {
            self.advance();
        }
        if self.peek() == Some(b'.') && self.peek_next().map_or(false, is_lox_digit) {
            self.advance();
            while self.peek().map_or(false, is_lox_digit) {
                self.advance();
            }
        }
        self.make_token(TokenKind::Number, line)
    }

    fn identifier(&mut self) -> Token<'a> {
        let line = self.line;
        while self
            .peek()
            .map_or(false, |c| is_lox_alphabetic(c) || is_lox_digit(c))
        {
            self.advance();
        }
        let text = &self.source[self.start..self.current];
        let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, line)
    }

    fn string(&mut self) -> Token<'a> {
        let line = self.line;
        self.advance();
        loop {
            match self.peek() {
                None => return Token::error("Unterminated string.", line),
                Some(b'"') => break,
                Some(_) => {
                    self.advance();
                }
            }
        }
        self.advance();
        self.make_token(TokenKind::String, line)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.scan_token();
        if token.is_eof() {
            self.finished = true;
        }
        Some(token)
    }
}
