//! Expression parsing
//!
//! The expression grammar is layered one non-terminal per precedence level:
//!
//! ```text
//! expression → additive-expression → term → factor
//! ```
//!
//! relational operators bind loosest, then `+`/`-`, then `*`/`/`. Each
//! layer's continuation rule (`expression'`, `additive-expression'`,
//! `term'`) absorbs same-precedence operators left to right before
//! returning, so precedence and left associativity are encoded in the tree
//! shape itself rather than by a precedence-climbing loop.

use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};
use crate::tree::NodeId;

impl Parser {
    // expression ::= additive-expression expression'
    pub(crate) fn parse_expression(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("expression");

        let additive = self.parse_additive_expression()?;
        self.tree.attach(node, additive);

        let rest = self.parse_expression_prime()?;
        self.tree.attach(node, rest);

        Ok(node)
    }

    // expression' ::= relop additive-expression expression' | ε
    pub(crate) fn parse_expression_prime(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("expression'");

        if self.check_relop() {
            let relop = self.parse_relop()?;
            self.tree.attach(node, relop);

            let additive = self.parse_additive_expression()?;
            self.tree.attach(node, additive);

            let rest = self.parse_expression_prime()?;
            self.tree.attach(node, rest);
        } else {
            self.epsilon(node);
        }

        Ok(node)
    }

    fn check_relop(&self) -> bool {
        self.check(TokenKind::Lt)
            || self.check(TokenKind::Le)
            || self.check(TokenKind::Gt)
            || self.check(TokenKind::Ge)
            || self.check(TokenKind::EqEq)
            || self.check(TokenKind::NotEq)
    }

    // relop ::= "<" | "<=" | ">" | ">=" | "==" | "!="
    pub(crate) fn parse_relop(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("relop");

        if self.check(TokenKind::Lt) {
            self.expect(node, TokenKind::Lt, "<")?;
        } else if self.check(TokenKind::Le) {
            self.expect(node, TokenKind::Le, "<=")?;
        } else if self.check(TokenKind::Gt) {
            self.expect(node, TokenKind::Gt, ">")?;
        } else if self.check(TokenKind::Ge) {
            self.expect(node, TokenKind::Ge, ">=")?;
        } else if self.check(TokenKind::EqEq) {
            self.expect(node, TokenKind::EqEq, "==")?;
        } else if self.check(TokenKind::NotEq) {
            self.expect(node, TokenKind::NotEq, "!=")?;
        } else {
            return Err(self.error("Expected relational operator"));
        }

        Ok(node)
    }

    // additive-expression ::= term additive-expression'
    pub(crate) fn parse_additive_expression(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("additive-expression");

        let term = self.parse_term()?;
        self.tree.attach(node, term);

        let rest = self.parse_additive_expression_prime()?;
        self.tree.attach(node, rest);

        Ok(node)
    }

    // additive-expression' ::= addop term additive-expression' | ε
    pub(crate) fn parse_additive_expression_prime(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("additive-expression'");

        if self.check(TokenKind::Plus) || self.check(TokenKind::Minus) {
            let addop = self.parse_addop()?;
            self.tree.attach(node, addop);

            let term = self.parse_term()?;
            self.tree.attach(node, term);

            let rest = self.parse_additive_expression_prime()?;
            self.tree.attach(node, rest);
        } else {
            self.epsilon(node);
        }

        Ok(node)
    }

    // addop ::= "+" | "-"
    pub(crate) fn parse_addop(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("addop");

        if self.check(TokenKind::Plus) {
            self.expect(node, TokenKind::Plus, "+")?;
        } else if self.check(TokenKind::Minus) {
            self.expect(node, TokenKind::Minus, "-")?;
        } else {
            return Err(self.error("Expected '+' or '-'"));
        }

        Ok(node)
    }

    // term ::= factor term'
    pub(crate) fn parse_term(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("term");

        let factor = self.parse_factor()?;
        self.tree.attach(node, factor);

        let rest = self.parse_term_prime()?;
        self.tree.attach(node, rest);

        Ok(node)
    }

    // term' ::= mulop factor term' | ε
    pub(crate) fn parse_term_prime(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("term'");

        if self.check(TokenKind::Star) || self.check(TokenKind::Slash) {
            let mulop = self.parse_mulop()?;
            self.tree.attach(node, mulop);

            let factor = self.parse_factor()?;
            self.tree.attach(node, factor);

            let rest = self.parse_term_prime()?;
            self.tree.attach(node, rest);
        } else {
            self.epsilon(node);
        }

        Ok(node)
    }

    // mulop ::= "*" | "/"
    pub(crate) fn parse_mulop(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("mulop");

        if self.check(TokenKind::Star) {
            self.expect(node, TokenKind::Star, "*")?;
        } else if self.check(TokenKind::Slash) {
            self.expect(node, TokenKind::Slash, "/")?;
        } else {
            return Err(self.error("Expected '*' or '/'"));
        }

        Ok(node)
    }

    // factor ::= "(" expression ")" | var | NUM
    pub(crate) fn parse_factor(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("factor");

        if self.check(TokenKind::LParen) {
            self.expect(node, TokenKind::LParen, "(")?;

            let expr = self.parse_expression()?;
            self.tree.attach(node, expr);

            self.expect(node, TokenKind::RParen, ")")?;
        } else if self.check(TokenKind::Ident) {
            let var = self.parse_var()?;
            self.tree.attach(node, var);
        } else if self.check(TokenKind::Num) {
            self.expect(node, TokenKind::Num, "NUM")?;
        } else {
            return Err(self.error("Expected '(', identifier, or number"));
        }

        Ok(node)
    }
}
