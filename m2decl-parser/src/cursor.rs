/// One-character lookahead over a [`CharSource`], echoing what it reads.
use diagnostics::Sink;

use crate::source::CharSource;

pub struct Cursor<S, E> {
    source: S,
    echo: E,
    ch: Option<char>,
    at_end: bool,
    line: usize,
    col: usize,
}

impl<S: CharSource, E: Sink> Cursor<S, E> {
    /// The cursor starts before the first character; call [`advance`](Self::advance)
    /// to load it.
    pub fn new(source: S, echo: E) -> Self {
        Self {
            source,
            echo,
            ch: None,
            at_end: false,
            line: 1,
            col: 0,
        }
    }

    /// The lookahead character, `None` once the source is exhausted.
    pub fn current(&self) -> Option<char> {
        self.ch
    }

    /// 1-based line and column of the lookahead character.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.col)
    }

    /// Load the next character. A NUL from the source ends the stream, and
    /// after that every call keeps yielding `None`.
    pub fn advance(&mut self) {
        if self.at_end {
            self.ch = None;
            return;
        }
        if self.ch == Some('\n') {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        match self.source.read_char() {
            Some(ch) if ch != '\0' => {
                self.echo.echo(ch);
                self.ch = Some(ch);
            }
            _ => {
                self.at_end = true;
                self.ch = None;
            }
        }
    }

    pub fn into_echo(self) -> E {
        self.echo
    }
}
