//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure: the error type, the token cursor helpers, and the main
//! parse entry point.
//!
//! # Parser Architecture
//!
//! The parser is a recursive descent over an LL(1) grammar, organized as:
//! - This module: Parser struct, helper methods, and the `program` rule
//! - `declarations`: declaration lists, variable declarations, parameters
//! - `statements`: compound/selection/iteration/assignment statements
//! - `expressions`: the layered expression grammar
//!
//! Production methods are split across those files using `impl Parser`
//! blocks, each building one labeled tree node per rule application.
//!
//! # Error model
//!
//! Every production returns `Result<NodeId, ParseError>` and propagates
//! failures with `?`, so the first mismatch in the left-to-right scan
//! unwinds the whole descent immediately. There is no recovery and no
//! second error: a failed parse yields exactly one [`ParseError`] and no
//! tree.

use crate::parser::lexer::{Lexer, SourceLocation, Token, TokenKind};
use crate::tree::{NodeId, ParseTree};
use std::fmt;

/// Parser error type, carrying the position of the offending token.
#[derive(Debug)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SYNTAX ERROR at Line {}, Col {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Recursive descent parser for the C- grammar.
pub struct Parser {
    pub(crate) lexer: Lexer,
    pub(crate) current: Token,
    pub(crate) tree: ParseTree,
}

impl Parser {
    /// Create a parser over `source` with the first token prefetched.
    pub fn new(source: &str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            tree: ParseTree::new(),
        }
    }

    /// Parse a complete program.
    ///
    /// Consumes the parser and returns the finished tree, or the first
    /// syntax error encountered. Input remaining after the program's
    /// terminating `.` is itself an error; a failed parse returns no tree
    /// at all.
    pub fn parse(mut self) -> Result<ParseTree, ParseError> {
        let root = self.parse_program()?;

        if self.current.kind != TokenKind::Eof {
            return Err(self.error(format!(
                "Expected end of file but found '{}'",
                self.current.lexeme
            )));
        }

        self.tree.set_root(root);
        Ok(self.tree)
    }

    // program ::= Program ID "{" declaration-list statement-list "}" "."
    pub(crate) fn parse_program(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("program");

        self.expect(node, TokenKind::Program, "Program")?;
        self.expect(node, TokenKind::Ident, "ID")?;
        self.expect(node, TokenKind::LBrace, "{")?;

        let decl_list = self.parse_declaration_list()?;
        self.tree.attach(node, decl_list);

        let stmt_list = self.parse_statement_list()?;
        self.tree.attach(node, stmt_list);

        self.expect(node, TokenKind::RBrace, "}")?;
        self.expect(node, TokenKind::Dot, ".")?;

        Ok(node)
    }

    // ===== Helper methods =====

    /// Report whether the current token has the given class. No side
    /// effect; this is the one token of lookahead every branching decision
    /// uses.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Pull the next token from the scanner.
    pub(crate) fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Consume the current token if it has the given class: append a
    /// terminal leaf named `name` under `parent` and advance. Otherwise
    /// fail, naming the terminal expected and the text actually found.
    pub(crate) fn expect(
        &mut self,
        parent: NodeId,
        kind: TokenKind,
        name: &'static str,
    ) -> Result<NodeId, ParseError> {
        if self.current.kind == kind {
            let leaf = self.tree.add_terminal(name, self.current.lexeme.clone());
            self.tree.attach(parent, leaf);
            self.advance();
            Ok(leaf)
        } else {
            Err(self.error(format!(
                "Expected {} but found '{}'",
                name, self.current.lexeme
            )))
        }
    }

    /// Append the empty-production marker under `parent`.
    pub(crate) fn epsilon(&mut self, parent: NodeId) {
        let leaf = self.tree.add_epsilon();
        self.tree.attach(parent, leaf);
    }

    /// Syntax error at the current token's position.
    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            message: message.into(),
            location: self.current.location,
        }
    }
}
