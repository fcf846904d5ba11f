pub mod cursor;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod source;
pub mod token;

pub use cursor::Cursor;
pub use error::{ErrorKind, ParseError};
pub use lexer::{tokenize, Lexer};
/// The recognizer entry points.
pub use parser::{check, check_source, Parser};
pub use source::{CharSource, FileSource};
pub use token::{keyword, KindSet, Span, Token, TokenKind};
