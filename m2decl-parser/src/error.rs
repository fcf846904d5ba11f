/// Parse error with source location.
use std::fmt;

use thiserror::Error;

/// Which stage detected the error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => f.write_str("lexical"),
            ErrorKind::Syntax => f.write_str("syntax"),
        }
    }
}

/// The first (and only) error of a run. Every error is fatal.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind} error at line {line}, col {col}: {message}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub message: String,
    pub line: usize,
    pub col: usize,
}

impl ParseError {
    pub fn lexical(message: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            kind: ErrorKind::Lexical,
            message: message.into(),
            line,
            col,
        }
    }

    pub fn syntax(message: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
            line,
            col,
        }
    }

    /// The diagnostic text without location, e.g. `"; expected"`.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_location() {
        let err = ParseError::syntax("OF expected", 3, 14);
        assert_eq!(err.to_string(), "syntax error at line 3, col 14: OF expected");
        assert_eq!(err.message(), "OF expected");
    }
}
