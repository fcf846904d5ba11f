/// Token types for the declaration scanner.
use std::fmt;

/// Source location of a token's first character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub col: usize,
}

/// A single token produced by the lexer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact consumed text; empty for `Eof`.
    pub lexeme: String,
    pub span: Span,
}

/// All token variants recognized by the lexer.
///
/// The discriminants are stable and are what the token dump prints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Placeholder, never produced by the lexer.
    NoSym = 0,
    Eof = 1,

    Ident = 2,
    Number = 3,

    // Keywords
    Type = 4,
    Var = 5,
    Array = 6,
    Record = 7,
    End = 8,
    Set = 9,
    Of = 10,
    Pointer = 11,
    To = 12,

    // Punctuation
    Equals = 13,
    Comma = 14,
    Semicolon = 15,
    Colon = 16,
    Dot = 17,
    LBracket = 18,
    RBracket = 19,
    LParen = 20,
    RParen = 21,
    Star = 22,
    DotDot = 23,
}

impl TokenKind {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Human-readable name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::NoSym => "no symbol",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::Type => "TYPE",
            TokenKind::Var => "VAR",
            TokenKind::Array => "ARRAY",
            TokenKind::Record => "RECORD",
            TokenKind::End => "END",
            TokenKind::Set => "SET",
            TokenKind::Of => "OF",
            TokenKind::Pointer => "POINTER",
            TokenKind::To => "TO",
            TokenKind::Equals => "=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Dot => ".",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Star => "*",
            TokenKind::DotDot => "..",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The keyword table. Matching is case-sensitive.
pub fn keyword(spelling: &str) -> Option<TokenKind> {
    let kind = match spelling {
        "TYPE" => TokenKind::Type,
        "VAR" => TokenKind::Var,
        "ARRAY" => TokenKind::Array,
        "RECORD" => TokenKind::Record,
        "END" => TokenKind::End,
        "SET" => TokenKind::Set,
        "OF" => TokenKind::Of,
        "POINTER" => TokenKind::Pointer,
        "TO" => TokenKind::To,
        _ => return None,
    };
    Some(kind)
}

/// Immutable set of token kinds, used for FIRST-set tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindSet(u32);

impl KindSet {
    pub const fn of(kinds: &[TokenKind]) -> KindSet {
        let mut bits = 0u32;
        let mut i = 0;
        while i < kinds.len() {
            bits |= 1 << kinds[i] as u32;
            i += 1;
        }
        KindSet(bits)
    }

    pub const fn union(self, other: KindSet) -> KindSet {
        KindSet(self.0 | other.0)
    }

    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & (1 << kind as u32) != 0
    }
}
