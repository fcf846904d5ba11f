/// Single-pass lexer for Modula-2 declarations, pulling one character at a time.
use diagnostics::{NullSink, Sink};

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::source::CharSource;
use crate::token::{keyword, Span, Token, TokenKind};

pub struct Lexer<S, E> {
    cursor: Cursor<S, E>,
}

/// Scan a whole string. The result ends with exactly one `Eof` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut lexer = Lexer::new(Cursor::new(source.chars(), NullSink));
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.next_token()?;
        let is_eof = tok.kind == TokenKind::Eof;
        tokens.push(tok);
        if is_eof {
            break;
        }
    }
    Ok(tokens)
}

impl<S: CharSource, E: Sink> Lexer<S, E> {
    /// Wrap `cursor` and load its first character.
    pub fn new(mut cursor: Cursor<S, E>) -> Self {
        cursor.advance();
        Self { cursor }
    }

    pub fn into_echo(self) -> E {
        self.cursor.into_echo()
    }

    fn span(&self) -> Span {
        let (line, col) = self.cursor.position();
        Span { line, col }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.cursor.current() {
            if ch > ' ' {
                break;
            }
            self.cursor.advance();
        }
    }

    /// Skip a comment body; the opening `(*` is already consumed.
    fn skip_comment(&mut self, start: Span) -> Result<(), ParseError> {
        loop {
            match self.cursor.current() {
                None => {
                    return Err(ParseError::lexical(
                        "unterminated comment",
                        start.line,
                        start.col,
                    ));
                }
                Some('*') => {
                    self.cursor.advance();
                    if self.cursor.current() == Some(')') {
                        self.cursor.advance();
                        return Ok(());
                    }
                }
                Some(_) => self.cursor.advance(),
            }
        }
    }

    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        loop {
            self.skip_whitespace();
            let sp = self.span();

            let Some(ch) = self.cursor.current() else {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    lexeme: String::new(),
                    span: sp,
                });
            };

            let tok = if ch.is_alphabetic() {
                self.lex_ident(sp)
            } else if ch.is_ascii_digit() {
                self.lex_number(sp)
            } else if ch == '(' {
                self.cursor.advance();
                if self.cursor.current() == Some('*') {
                    self.cursor.advance();
                    log::debug!("skipping comment at line {}, col {}", sp.line, sp.col);
                    self.skip_comment(sp)?;
                    continue;
                }
                single(TokenKind::LParen, '(', sp)
            } else {
                self.lex_symbol(ch, sp)?
            };
            log::trace!("{} {:?} at {}:{}", tok.kind, tok.lexeme, sp.line, sp.col);
            return Ok(tok);
        }
    }

    fn lex_ident(&mut self, sp: Span) -> Token {
        let mut lexeme = String::new();
        while let Some(ch) = self.cursor.current() {
            if !ch.is_alphanumeric() {
                break;
            }
            lexeme.push(ch);
            self.cursor.advance();
        }
        let kind = keyword(&lexeme).unwrap_or(TokenKind::Ident);
        Token {
            kind,
            lexeme,
            span: sp,
        }
    }

    fn lex_number(&mut self, sp: Span) -> Token {
        let mut lexeme = String::new();
        while let Some(ch) = self.cursor.current() {
            if !ch.is_ascii_digit() {
                break;
            }
            lexeme.push(ch);
            self.cursor.advance();
        }
        Token {
            kind: TokenKind::Number,
            lexeme,
            span: sp,
        }
    }

    fn lex_symbol(&mut self, ch: char, sp: Span) -> Result<Token, ParseError> {
        let kind = match ch {
            '.' => {
                self.cursor.advance();
                if self.cursor.current() == Some('.') {
                    self.cursor.advance();
                    return Ok(Token {
                        kind: TokenKind::DotDot,
                        lexeme: "..".into(),
                        span: sp,
                    });
                }
                return Ok(single(TokenKind::Dot, '.', sp));
            }
            '=' => TokenKind::Equals,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ')' => TokenKind::RParen,
            '*' => TokenKind::Star,
            _ => {
                return Err(ParseError::lexical(
                    format!("invalid character '{ch}'"),
                    sp.line,
                    sp.col,
                ));
            }
        };
        self.cursor.advance();
        Ok(single(kind, ch, sp))
    }
}

fn single(kind: TokenKind, ch: char, sp: Span) -> Token {
    Token {
        kind,
        lexeme: ch.to_string(),
        span: sp,
    }
}
