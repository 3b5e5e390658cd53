//! Parser state and the parsing entry point.
//!
//! The Parser is a cursor over an immutable token sequence with one token
//! of pushback. Grammar functions receive it by exclusive reference, so
//! independent parses share no state.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    Position, MK_TOKEN,
};

use super::stmt::parse_stmt;

/// Deepest nesting of expressions and blocks the recursive grammar descends
/// into before giving up on the construct.
pub const MAX_NESTING: usize = 200;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The tokens to parse, always terminated by an `End` token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Syntax errors recorded so far
    diagnostics: Vec<Error>,
    /// Nested expressions and blocks currently open
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// A missing `End` terminator is appended, so the cursor always has a
    /// token to rest on.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::End) {
            let line = tokens.last().map_or(0, |token| token.line + 1);
            tokens.push(MK_TOKEN!(TokenKind::End, String::new(), line, 0, None));
        }

        Parser {
            tokens,
            pos: 0,
            diagnostics: vec![],
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the one stepped past.
    /// The cursor never moves beyond the `End` token.
    pub fn advance(&mut self) -> &Token {
        let token = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[token]
    }

    /// Undoes one `advance`.
    pub fn step_back(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    /// Index of the current token.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::End
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    pub fn check_symbol(&self, symbol: &str) -> bool {
        self.current_token().is_symbol(symbol)
    }

    pub fn check_keyword(&self, word: &str) -> bool {
        self.current_token().is_keyword(word)
    }

    /// Consumes the current token if it has the given kind.
    pub fn accept(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance().clone())
        } else {
            None
        }
    }

    /// Consumes the current token if it is the symbol `symbol`.
    pub fn accept_symbol(&mut self, symbol: &str) -> bool {
        if self.check_symbol(symbol) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token if it is the identifier `word`.
    pub fn accept_keyword(&mut self, word: &str) -> bool {
        if self.check_keyword(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current symbol if its lexeme is a key of `table`, and
    /// returns the mapped value.
    pub fn accept_operator<T: Copy>(&mut self, table: &HashMap<&'static str, T>) -> Option<T> {
        if !self.check(TokenKind::Other) {
            return None;
        }
        let value = *table.get(self.current_token().lexeme.as_str())?;
        self.advance();
        Some(value)
    }

    /// Like `accept`, but records a diagnostic on mismatch.
    pub fn expect(&mut self, kind: TokenKind) -> Option<Token> {
        let token = self.accept(kind);
        if token.is_none() {
            self.report_expected(kind);
        }
        token
    }

    pub fn expect_symbol(&mut self, symbol: &str) -> Option<()> {
        if self.accept_symbol(symbol) {
            Some(())
        } else {
            self.report_expected(TokenKind::Other);
            None
        }
    }

    pub fn expect_keyword(&mut self, word: &str) -> Option<()> {
        if self.accept_keyword(word) {
            Some(())
        } else {
            self.report_expected(TokenKind::Identifier);
            None
        }
    }

    /// Records "unexpected <current>, expected <kind>" at the current token.
    pub fn report_expected(&mut self, kind: TokenKind) {
        let lexeme = self.current_token().lexeme.clone();
        self.report(ErrorImpl::UnexpectedSymbol {
            lexeme,
            expected: kind,
        });
    }

    /// Opens one level of nesting. Past `MAX_NESTING` levels a diagnostic is
    /// recorded and `None` returned; the caller must not call `leave`.
    pub fn enter(&mut self) -> Option<()> {
        if self.depth >= MAX_NESTING {
            self.report(ErrorImpl::NestingTooDeep { limit: MAX_NESTING });
            return None;
        }
        self.depth += 1;
        Some(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn report(&mut self, error: ErrorImpl) {
        let error = Error::new(error, self.get_position());
        tracing::debug!(%error, "syntax error");
        self.diagnostics.push(error);
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        let token = self.current_token();
        Position::new(token.line, token.column)
    }
}

/// The AST built from a token stream together with every syntax error met
/// on the way. A program is produced even when diagnostics are present.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub program: Program,
    pub diagnostics: Vec<Error>,
}

impl ParseResult {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// Statements are parsed until the `End` token. A malformed statement
/// records diagnostics but does not stop the statements after it.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: Vec<Token>) -> ParseResult {
    let mut parser = Parser::new(tokens);
    let mut statements = vec![];

    while parser.has_tokens() {
        let start = parser.position();

        if let Some(stmt) = parse_stmt(&mut parser).filter(|node| !node.is_eof()) {
            statements.push(stmt);
        }

        // Only a `}` with no open block is left unconsumed.
        if parser.position() == start {
            let lexeme = parser.current_token().lexeme.clone();
            parser.report(ErrorImpl::UnmatchedClosingBrace { lexeme });
            parser.advance();
        }
    }

    ParseResult {
        program: Program { statements },
        diagnostics: parser.diagnostics,
    }
}

/// Tokenizes and parses `source` in one step.
pub fn parse_source(source: &str) -> ParseResult {
    parse(tokenize(source))
}

