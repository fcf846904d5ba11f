use std::io::Write;
use std::path::Path;

use anyhow::Result;
use m2decl_parser::{Cursor, Lexer, TokenKind};

use super::{finish, open, Outcome};

/// Print every token of `path` as `<kind code, width 3> <lexeme>`, through `Eof`.
pub fn dump_tokens(path: &Path, out: &mut impl Write) -> Result<Outcome> {
    let (source, mut transcript) = open(path)?;
    let mut lexer = Lexer::new(Cursor::new(source, &mut transcript));
    let result = loop {
        match lexer.next_token() {
            Ok(tok) => {
                writeln!(out, "{:>3} {}", tok.kind.code(), tok.lexeme)?;
                if tok.kind == TokenKind::Eof {
                    break Ok(());
                }
            }
            Err(err) => break Err(err),
        }
    };
    drop(lexer);
    finish(result, transcript)
}
