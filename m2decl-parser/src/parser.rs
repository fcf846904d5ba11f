/// Recursive descent recognizer for Modula-2 declarations.
///
/// One method per nonterminal, one token of lookahead. Nothing is built:
/// a run either consumes `Eof` or stops at the first error.
use diagnostics::{NullSink, Sink};

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::source::CharSource;
use crate::token::{KindSet, Token, TokenKind};

const FIRST_DECLARATION: KindSet = KindSet::of(&[TokenKind::Type, TokenKind::Var]);
const FIRST_SIMPLE_TYPE: KindSet =
    KindSet::of(&[TokenKind::Ident, TokenKind::LParen, TokenKind::LBracket]);
const FIRST_TYPE: KindSet = FIRST_SIMPLE_TYPE.union(KindSet::of(&[
    TokenKind::Array,
    TokenKind::Record,
    TokenKind::Set,
    TokenKind::Pointer,
]));
const FIRST_CONSTANT: KindSet = KindSet::of(&[TokenKind::Number, TokenKind::Ident]);

/// Check a complete string of declarations.
///
/// ```
/// use m2decl_parser::check_source;
///
/// assert!(check_source("TYPE T = RECORD a, b: [1..10]; END;").is_ok());
/// let err = check_source("VAR x y;").unwrap_err();
/// assert_eq!(err.message(), ": expected");
/// ```
pub fn check_source(source: &str) -> Result<(), ParseError> {
    check(source.chars(), NullSink)
}

/// Check declarations read from `source`, echoing every character to `echo`.
pub fn check<S: CharSource, E: Sink>(source: S, echo: E) -> Result<(), ParseError> {
    let lexer = Lexer::new(Cursor::new(source, echo));
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

pub struct Parser<S, E> {
    lexer: Lexer<S, E>,
    token: Token,
}

impl<S: CharSource, E: Sink> Parser<S, E> {
    /// Fetch the first lookahead token.
    pub fn new(mut lexer: Lexer<S, E>) -> Result<Self, ParseError> {
        let token = lexer.next_token()?;
        Ok(Self { lexer, token })
    }

    /// Recognize `Mod2Decl`. `Ok` means `Eof` was reached cleanly.
    pub fn parse(&mut self) -> Result<(), ParseError> {
        self.parse_mod2_decl()
    }

    pub fn into_echo(self) -> E {
        self.lexer.into_echo()
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn at(&self, kind: TokenKind) -> bool {
        self.token.kind == kind
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.token = self.lexer.next_token()?;
        Ok(())
    }

    fn error(&self, message: &str) -> ParseError {
        ParseError::syntax(message, self.token.span.line, self.token.span.col)
    }

    fn accept(&mut self, wanted: TokenKind, message: &str) -> Result<(), ParseError> {
        if self.at(wanted) {
            self.advance()
        } else {
            Err(self.error(message))
        }
    }

    fn accept_any(&mut self, allowed: KindSet, message: &str) -> Result<(), ParseError> {
        if allowed.contains(self.token.kind) {
            self.advance()
        } else {
            Err(self.error(message))
        }
    }

    /// Membership guard that leaves the lookahead in place.
    fn expect_any(&self, allowed: KindSet, message: &str) -> Result<(), ParseError> {
        if allowed.contains(self.token.kind) {
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    // Mod2Decl = { Declaration } EOF .
    fn parse_mod2_decl(&mut self) -> Result<(), ParseError> {
        while FIRST_DECLARATION.contains(self.token.kind) {
            self.parse_declaration()?;
        }
        self.accept(TokenKind::Eof, "EOF expected")
    }

    // Declaration = "TYPE" { TypeDecl ";" } | "VAR" { VarDecl ";" } .
    fn parse_declaration(&mut self) -> Result<(), ParseError> {
        self.expect_any(FIRST_DECLARATION, "TYPE or VAR expected")?;
        log::debug!(
            "{} section at line {}",
            self.token.kind,
            self.token.span.line
        );
        if self.at(TokenKind::Type) {
            self.advance()?;
            while self.at(TokenKind::Ident) {
                self.parse_type_decl()?;
                self.accept(TokenKind::Semicolon, "; expected")?;
            }
        } else {
            self.advance()?;
            while self.at(TokenKind::Ident) {
                self.parse_var_decl()?;
                self.accept(TokenKind::Semicolon, "; expected")?;
            }
        }
        Ok(())
    }

    // TypeDecl = identifier "=" Type .
    fn parse_type_decl(&mut self) -> Result<(), ParseError> {
        self.accept(TokenKind::Ident, "identifier expected")?;
        self.accept(TokenKind::Equals, "= expected")?;
        self.parse_type()
    }

    // VarDecl = IdentList ":" Type .
    fn parse_var_decl(&mut self) -> Result<(), ParseError> {
        self.parse_ident_list()?;
        self.accept(TokenKind::Colon, ": expected")?;
        self.parse_type()
    }

    // ========================================================================
    // Types
    // ========================================================================

    // Type = SimpleType | ArrayType | RecordType | SetType | PointerType .
    fn parse_type(&mut self) -> Result<(), ParseError> {
        self.expect_any(FIRST_TYPE, "type expected")?;
        match self.token.kind {
            TokenKind::Array => self.parse_array_type(),
            TokenKind::Record => self.parse_record_type(),
            TokenKind::Set => self.parse_set_type(),
            TokenKind::Pointer => self.parse_pointer_type(),
            _ => self.parse_simple_type(),
        }
    }

    // SimpleType = QualIdent [ Subrange ] | Enumeration | Subrange .
    fn parse_simple_type(&mut self) -> Result<(), ParseError> {
        self.expect_any(FIRST_SIMPLE_TYPE, "simple type expected")?;
        match self.token.kind {
            TokenKind::LParen => self.parse_enumeration(),
            TokenKind::LBracket => self.parse_subrange(),
            _ => {
                self.parse_qual_ident()?;
                if self.at(TokenKind::LBracket) {
                    self.parse_subrange()?;
                }
                Ok(())
            }
        }
    }

    // QualIdent = identifier { "." identifier } .
    fn parse_qual_ident(&mut self) -> Result<(), ParseError> {
        self.accept(TokenKind::Ident, "identifier expected")?;
        while self.at(TokenKind::Dot) {
            self.advance()?;
            self.accept(TokenKind::Ident, "identifier expected")?;
        }
        Ok(())
    }

    // Subrange = "[" Constant ".." Constant "]" .
    fn parse_subrange(&mut self) -> Result<(), ParseError> {
        self.accept(TokenKind::LBracket, "[ expected")?;
        self.parse_constant()?;
        self.accept(TokenKind::DotDot, ".. expected")?;
        self.parse_constant()?;
        self.accept(TokenKind::RBracket, "] expected")
    }

    // Constant = number | identifier .
    fn parse_constant(&mut self) -> Result<(), ParseError> {
        self.accept_any(FIRST_CONSTANT, "number or identifier expected")
    }

    // Enumeration = "(" IdentList ")" .
    fn parse_enumeration(&mut self) -> Result<(), ParseError> {
        self.accept(TokenKind::LParen, "( expected")?;
        self.parse_ident_list()?;
        self.accept(TokenKind::RParen, ") expected")
    }

    // IdentList = identifier { "," identifier } .
    fn parse_ident_list(&mut self) -> Result<(), ParseError> {
        self.accept(TokenKind::Ident, "identifier expected")?;
        while self.at(TokenKind::Comma) {
            self.advance()?;
            self.accept(TokenKind::Ident, "identifier expected")?;
        }
        Ok(())
    }

    // ArrayType = "ARRAY" SimpleType { "," SimpleType } "OF" Type .
    fn parse_array_type(&mut self) -> Result<(), ParseError> {
        self.accept(TokenKind::Array, "ARRAY expected")?;
        self.parse_simple_type()?;
        while self.at(TokenKind::Comma) {
            self.advance()?;
            self.parse_simple_type()?;
        }
        self.accept(TokenKind::Of, "OF expected")?;
        self.parse_type()
    }

    // RecordType = "RECORD" FieldLists "END" .
    fn parse_record_type(&mut self) -> Result<(), ParseError> {
        self.accept(TokenKind::Record, "RECORD expected")?;
        self.parse_field_lists()?;
        self.accept(TokenKind::End, "END expected")
    }

    // FieldLists = FieldList { ";" FieldList } .
    fn parse_field_lists(&mut self) -> Result<(), ParseError> {
        self.parse_field_list()?;
        while self.at(TokenKind::Semicolon) {
            self.advance()?;
            self.parse_field_list()?;
        }
        Ok(())
    }

    // FieldList = [ IdentList ":" Type ] .
    fn parse_field_list(&mut self) -> Result<(), ParseError> {
        if self.at(TokenKind::Ident) {
            self.parse_ident_list()?;
            self.accept(TokenKind::Colon, ": expected")?;
            self.parse_type()?;
        }
        Ok(())
    }

    // SetType = "SET" "OF" SimpleType .
    fn parse_set_type(&mut self) -> Result<(), ParseError> {
        self.accept(TokenKind::Set, "SET expected")?;
        self.accept(TokenKind::Of, "OF expected")?;
        self.parse_simple_type()
    }

    // PointerType = "POINTER" "TO" Type .
    fn parse_pointer_type(&mut self) -> Result<(), ParseError> {
        self.accept(TokenKind::Pointer, "POINTER expected")?;
        self.accept(TokenKind::To, "TO expected")?;
        self.parse_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use diagnostics::Transcript;

    fn rejects(src: &str) -> String {
        let err = check_source(src).unwrap_err();
        err.message().to_string()
    }

    #[test]
    fn parse_empty_input() {
        check_source("").unwrap();
        check_source("  \n (* nothing here *) \n").unwrap();
    }

    #[test]
    fn parse_record_with_subrange_field() {
        check_source("TYPE T = RECORD a, b: [1..10]; END;").unwrap();
    }

    #[test]
    fn parse_pointer_var() {
        check_source("VAR x: POINTER TO T;").unwrap();
    }

    #[test]
    fn parse_set_of_enumeration() {
        check_source("TYPE T = SET OF (A, B, C);").unwrap();
    }

    #[test]
    fn parse_empty_sections() {
        check_source("TYPE VAR TYPE").unwrap();
    }

    #[test]
    fn parse_qualified_and_subranged_names() {
        check_source("TYPE T = Lib.Sub.Color; U = INTEGER[0..255]; V = [lo..hi];").unwrap();
    }

    #[test]
    fn parse_multi_index_array() {
        check_source("TYPE Grid = ARRAY [0..9], Color OF ARRAY (X, Y) OF CHAR;").unwrap();
    }

    #[test]
    fn parse_empty_field_lists() {
        check_source("TYPE A = RECORD END; B = RECORD ; ; END;").unwrap();
    }

    #[test]
    fn parse_nested_types() {
        check_source(
            "TYPE Node = POINTER TO RECORD\n\
             \x20 next: Node;\n\
             \x20 bits: SET OF [0..7];\n\
             \x20 data: ARRAY [1..4] OF RECORD x, y: REAL END\n\
             END;\n\
             VAR head, tail: Node; count: CARDINAL;",
        )
        .unwrap();
    }

    #[test]
    fn error_missing_colon() {
        let err = check_source("VAR x y;").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.message(), ": expected");
        assert_eq!((err.line, err.col), (1, 7));
    }

    #[test]
    fn error_messages_name_the_expectation() {
        assert_eq!(rejects("TYPE T = ;"), "type expected");
        assert_eq!(rejects("TYPE T = ARRAY [1..5] INTEGER;"), "OF expected");
        assert_eq!(rejects("TYPE T = [1 = 10];"), ".. expected");
        assert_eq!(rejects("TYPE T = [1..];"), "number or identifier expected");
        assert_eq!(rejects("TYPE T = [1..2;"), "] expected");
        assert_eq!(rejects("TYPE T = POINTER T;"), "TO expected");
        assert_eq!(rejects("TYPE T = SET (A);"), "OF expected");
        assert_eq!(rejects("TYPE T = (A, B;"), ") expected");
        assert_eq!(rejects("TYPE T = RECORD a: INTEGER"), "END expected");
        assert_eq!(rejects("TYPE T = X"), "; expected");
        assert_eq!(rejects("TYPE T X;"), "= expected");
        assert_eq!(rejects("VAR a, : T;"), "identifier expected");
        assert_eq!(rejects("TYPE T = A.;"), "identifier expected");
        assert_eq!(rejects("TYPE T = ARRAY OF X;"), "simple type expected");
        assert_eq!(rejects("x"), "EOF expected");
        assert_eq!(rejects("TYPE T = X; END"), "EOF expected");
    }

    #[test]
    fn equals_is_not_a_range_separator() {
        assert_eq!(rejects("VAR x: [1 = 2];"), ".. expected");
    }

    #[test]
    fn lexical_errors_surface_through_parser() {
        let err = check_source("VAR x: T#;").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
        assert_eq!(err.message(), "invalid character '#'");

        let err = check_source("TYPE T = (* oops").unwrap_err();
        assert_eq!(err.message(), "unterminated comment");
    }

    #[test]
    fn echo_stops_at_the_error() {
        let mut transcript = Transcript::new(Vec::new());
        let err = check("VAR x y; z".chars(), &mut transcript).unwrap_err();
        assert_eq!(err.message(), ": expected");
        // the lookahead token `y` and the char after it have been read
        assert_eq!(transcript.into_inner(), b"VAR x y;");
    }

    #[test]
    fn parser_accepts_from_explicit_lexer() {
        let lexer = Lexer::new(Cursor::new("VAR a: B;".chars(), NullSink));
        let mut parser = Parser::new(lexer).unwrap();
        parser.parse().unwrap();
    }
}
