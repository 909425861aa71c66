//! Statement parsing
//!
//! Productions for the statement half of the grammar:
//!
//! - Compound statements: `{ statement-list }`
//! - Selection: `if (expression) statement` with an optional `else`
//! - Iteration: `while (expression) statement`
//! - Assignment: `var = expression` (scalar or indexed target)
//!
//! `statement` dispatches on the current token alone: an identifier starts
//! an assignment, `{` a compound statement, `if` a selection, `while` an
//! iteration. `statement-list'` repeats while the current token can start a
//! statement and closes with an epsilon child otherwise.

use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};
use crate::tree::NodeId;

impl Parser {
    // compound-stmt ::= "{" statement-list "}"
    pub(crate) fn parse_compound_stmt(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("compound-stmt");

        self.expect(node, TokenKind::LBrace, "{")?;

        let list = self.parse_statement_list()?;
        self.tree.attach(node, list);

        self.expect(node, TokenKind::RBrace, "}")?;

        Ok(node)
    }

    // statement-list ::= statement-list'
    pub(crate) fn parse_statement_list(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("statement-list");

        let rest = self.parse_statement_list_prime()?;
        self.tree.attach(node, rest);

        Ok(node)
    }

    // statement-list' ::= statement statement-list' | ε
    pub(crate) fn parse_statement_list_prime(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("statement-list'");

        // A statement starts with an identifier, `{`, `if`, or `while`.
        if self.check(TokenKind::Ident)
            || self.check(TokenKind::LBrace)
            || self.check(TokenKind::If)
            || self.check(TokenKind::While)
        {
            let stmt = self.parse_statement()?;
            self.tree.attach(node, stmt);

            let rest = self.parse_statement_list_prime()?;
            self.tree.attach(node, rest);
        } else {
            self.epsilon(node);
        }

        Ok(node)
    }

    // statement ::= assignment-stmt | compound-stmt | selection-stmt | iteration-stmt
    pub(crate) fn parse_statement(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("statement");

        let stmt = if self.check(TokenKind::Ident) {
            self.parse_assignment_stmt()?
        } else if self.check(TokenKind::LBrace) {
            self.parse_compound_stmt()?
        } else if self.check(TokenKind::If) {
            self.parse_selection_stmt()?
        } else if self.check(TokenKind::While) {
            self.parse_iteration_stmt()?
        } else {
            return Err(self.error("Expected statement"));
        };
        self.tree.attach(node, stmt);

        Ok(node)
    }

    // selection-stmt ::= if "(" expression ")" statement selection-stmt'
    pub(crate) fn parse_selection_stmt(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("selection-stmt");

        self.expect(node, TokenKind::If, "if")?;
        self.expect(node, TokenKind::LParen, "(")?;

        let condition = self.parse_expression()?;
        self.tree.attach(node, condition);

        self.expect(node, TokenKind::RParen, ")")?;

        let then_branch = self.parse_statement()?;
        self.tree.attach(node, then_branch);

        let rest = self.parse_selection_stmt_prime()?;
        self.tree.attach(node, rest);

        Ok(node)
    }

    // selection-stmt' ::= ε | else statement
    pub(crate) fn parse_selection_stmt_prime(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("selection-stmt'");

        if self.check(TokenKind::Else) {
            self.expect(node, TokenKind::Else, "else")?;

            let else_branch = self.parse_statement()?;
            self.tree.attach(node, else_branch);
        } else {
            self.epsilon(node);
        }

        Ok(node)
    }

    // iteration-stmt ::= while "(" expression ")" statement
    pub(crate) fn parse_iteration_stmt(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("iteration-stmt");

        self.expect(node, TokenKind::While, "while")?;
        self.expect(node, TokenKind::LParen, "(")?;

        let condition = self.parse_expression()?;
        self.tree.attach(node, condition);

        self.expect(node, TokenKind::RParen, ")")?;

        let body = self.parse_statement()?;
        self.tree.attach(node, body);

        Ok(node)
    }

    // assignment-stmt ::= var "=" expression
    pub(crate) fn parse_assignment_stmt(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("assignment-stmt");

        let var = self.parse_var()?;
        self.tree.attach(node, var);

        self.expect(node, TokenKind::Eq, "=")?;

        let value = self.parse_expression()?;
        self.tree.attach(node, value);

        Ok(node)
    }

    // var ::= ID var'
    pub(crate) fn parse_var(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("var");

        self.expect(node, TokenKind::Ident, "ID")?;

        let rest = self.parse_var_prime()?;
        self.tree.attach(node, rest);

        Ok(node)
    }

    // var' ::= ε | "[" expression "]"
    pub(crate) fn parse_var_prime(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("var'");

        if self.check(TokenKind::LBracket) {
            self.expect(node, TokenKind::LBracket, "[")?;

            let index = self.parse_expression()?;
            self.tree.attach(node, index);

            self.expect(node, TokenKind::RBracket, "]")?;
        } else {
            self.epsilon(node);
        }

        Ok(node)
    }
}
