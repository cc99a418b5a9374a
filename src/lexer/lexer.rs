use crate::{Span, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

/// Represents "past the end of input".
const SENTINEL: char = '\0';

/// Scanning automaton producing one token per call to [`Lexer::next_token`].
///
/// `position` indexes the character in `ch`, `read_position` the one after it.
/// Both only ever move forward.
#[derive(Debug, Clone)]
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    read_position: usize,
    ch: char,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        let mut lexer = Lexer {
            input: source.chars().collect(),
            position: 0,
            read_position: 0,
            ch: SENTINEL,
        };
        lexer.read_char();
        lexer
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let token = match self.ch {
            '=' => {
                if self.peek_char() == '=' {
                    self.read_char();
                    MK_TOKEN!(TokenKind::Eq, "==", Span::new(start, start + 2))
                } else {
                    self.single(TokenKind::Assign)
                }
            }
            '!' => {
                if self.peek_char() == '=' {
                    self.read_char();
                    MK_TOKEN!(TokenKind::NotEq, "!=", Span::new(start, start + 2))
                } else {
                    self.single(TokenKind::Bang)
                }
            }
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Asterisk),
            '/' => self.single(TokenKind::Slash),
            '<' => self.single(TokenKind::Lt),
            '>' => self.single(TokenKind::Gt),
            ';' => self.single(TokenKind::Semicolon),
            ',' => self.single(TokenKind::Comma),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            SENTINEL if self.at_eof() => {
                return MK_TOKEN!(TokenKind::EOF, "", Span::new(start, start));
            }
            ch if is_letter(ch) => {
                // read_identifier already leaves us past the run
                let literal = self.read_identifier();
                return MK_TOKEN!(lookup_ident(&literal), literal, Span::new(start, self.position));
            }
            ch if is_digit(ch) => {
                let literal = self.read_number();
                return MK_TOKEN!(TokenKind::Int, literal, Span::new(start, self.position));
            }
            _ => self.single(TokenKind::Illegal),
        };

        self.read_char();
        token
    }

    /// Returns true once the current position has run off the input.
    pub fn at_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    fn single(&self, kind: TokenKind) -> Token {
        MK_TOKEN!(
            kind,
            self.ch.to_string(),
            Span::new(self.position, self.position + 1)
        )
    }

    fn read_char(&mut self) {
        self.ch = self.peek_char();
        self.position = self.read_position;
        if self.read_position <= self.input.len() {
            self.read_position += 1;
        }
    }

    fn peek_char(&self) -> char {
        self.input
            .get(self.read_position)
            .copied()
            .unwrap_or(SENTINEL)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, ' ' | '\t' | '\n' | '\r') {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while is_letter(self.ch) || is_digit(self.ch) {
            self.read_char();
        }
        self.input[start..self.position].iter().collect()
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while is_digit(self.ch) {
            self.read_char();
        }
        self.input[start..self.position].iter().collect()
    }
}

pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Drains a fresh lexer over `source`, including the trailing EOF token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
