use tracing::{debug, trace};

use crate::MK_TOKEN;

use super::tokens::{lookup_ident, Token, TokenKind};

/// Forward-only, single-pass scanner over raw source bytes.
///
/// `ch` always mirrors `source[pos]`, or is `None` once `pos` has run off the
/// end. After construction `next_pos == pos + 1` holds for the lifetime of
/// the lexer.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: Vec<u8>,
    pos: usize,
    next_pos: usize,
    ch: Option<u8>,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer::from_bytes(source.into_bytes())
    }

    /// Lexes bytes that need not be valid UTF-8; stray bytes become `Illegal`.
    pub fn from_bytes(source: Vec<u8>) -> Lexer {
        let mut lexer = Lexer {
            source,
            pos: 0,
            next_pos: 0,
            ch: None,
        };

        lexer.read_char();
        lexer
    }

    /// Produces the next token and advances past it.
    ///
    /// Once the end of input is reached every further call returns `EOF`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            None => MK_TOKEN!(TokenKind::EOF, String::new()),
            Some(b'=') if self.peek_char() == Some(b'=') => self.two_char_token(TokenKind::Equals),
            Some(b'!') if self.peek_char() == Some(b'=') => self.two_char_token(TokenKind::NotEquals),
            Some(b'=') => self.single_char_token(TokenKind::Assignment),
            Some(b';') => self.single_char_token(TokenKind::Semicolon),
            Some(b'(') => self.single_char_token(TokenKind::OpenParen),
            Some(b')') => self.single_char_token(TokenKind::CloseParen),
            Some(b'{') => self.single_char_token(TokenKind::OpenCurly),
            Some(b'}') => self.single_char_token(TokenKind::CloseCurly),
            Some(b',') => self.single_char_token(TokenKind::Comma),
            Some(b'+') => self.single_char_token(TokenKind::Plus),
            Some(b'-') => self.single_char_token(TokenKind::Dash),
            Some(b'!') => self.single_char_token(TokenKind::Not),
            Some(b'/') => self.single_char_token(TokenKind::Slash),
            Some(b'*') => self.single_char_token(TokenKind::Star),
            Some(b'<') => self.single_char_token(TokenKind::Less),
            Some(b'>') => self.single_char_token(TokenKind::Greater),
            Some(ch) if is_letter(ch) => {
                let value = self.read_identifier();
                MK_TOKEN!(lookup_ident(&value), value)
            }
            Some(ch) if ch.is_ascii_digit() => MK_TOKEN!(TokenKind::Int, self.read_number()),
            Some(ch) => {
                debug!(byte = ch, "illegal byte in input");
                self.single_char_token(TokenKind::Illegal)
            }
        };

        trace!(kind = %token.kind, value = %token.value, "token");
        token
    }

    fn read_char(&mut self) {
        self.ch = self.source.get(self.next_pos).copied();
        self.pos = self.next_pos;
        self.next_pos += 1;
    }

    /// Looks at the byte after `ch` without moving the cursor.
    fn peek_char(&self) -> Option<u8> {
        self.source.get(self.next_pos).copied()
    }

    fn single_char_token(&mut self, kind: TokenKind) -> Token {
        let value = self.at().to_string();
        self.read_char();
        MK_TOKEN!(kind, value)
    }

    fn two_char_token(&mut self, kind: TokenKind) -> Token {
        let start = self.pos;
        self.read_char();
        self.read_char();
        MK_TOKEN!(kind, self.text_from(start))
    }

    fn read_identifier(&mut self) -> String {
        let start = self.pos;
        while self.ch.is_some_and(is_letter) {
            self.read_char();
        }
        self.text_from(start)
    }

    fn read_number(&mut self) -> String {
        let start = self.pos;
        while self.ch.is_some_and(|ch| ch.is_ascii_digit()) {
            self.read_char();
        }
        self.text_from(start)
    }

    /// Text of `source[start..pos]`; every byte in it is ASCII.
    fn text_from(&self, start: usize) -> String {
        self.source[start..self.pos].iter().copied().map(char::from).collect()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.read_char();
        }
    }

    /// The current byte widened to a `char`; `'\0'` past the end.
    pub fn at(&self) -> char {
        self.ch.map_or('\0', char::from)
    }

    pub fn at_eof(&self) -> bool {
        self.ch.is_none()
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Lexes `source` to completion. The returned tokens end with exactly one `EOF`.
pub fn tokenize(source: String) -> Vec<Token> {
    tokenize_bytes(source.into_bytes())
}

/// Like [`tokenize`], for input that may not be valid UTF-8.
pub fn tokenize_bytes(source: Vec<u8>) -> Vec<Token> {
    let mut lex = Lexer::from_bytes(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is_eof();
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
