//! Declaration parsing
//!
//! Productions for the declaration half of the grammar: declaration lists,
//! scalar and array variable declarations, type specifiers, and the
//! function-parameter sub-grammar.
//!
//! Repetition is encoded by the right-recursive continuation rules
//! (`declaration-list'`, `param-list'`): each checks whether the current
//! token can start one more repetition, and otherwise closes the chain with
//! an epsilon child.

use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};
use crate::tree::NodeId;

impl Parser {
    // declaration-list ::= declaration declaration-list'
    pub(crate) fn parse_declaration_list(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("declaration-list");

        let decl = self.parse_declaration()?;
        self.tree.attach(node, decl);

        let rest = self.parse_declaration_list_prime()?;
        self.tree.attach(node, rest);

        Ok(node)
    }

    // declaration-list' ::= declaration declaration-list' | ε
    pub(crate) fn parse_declaration_list_prime(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("declaration-list'");

        // Another declaration starts with a type specifier.
        if self.check(TokenKind::Int) || self.check(TokenKind::Float) {
            let decl = self.parse_declaration()?;
            self.tree.attach(node, decl);

            let rest = self.parse_declaration_list_prime()?;
            self.tree.attach(node, rest);
        } else {
            self.epsilon(node);
        }

        Ok(node)
    }

    // declaration ::= var-declaration
    pub(crate) fn parse_declaration(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("declaration");

        let var_decl = self.parse_var_declaration()?;
        self.tree.attach(node, var_decl);

        Ok(node)
    }

    // var-declaration ::= type-specifier ID var-declaration'
    pub(crate) fn parse_var_declaration(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("var-declaration");

        let type_spec = self.parse_type_specifier()?;
        self.tree.attach(node, type_spec);

        self.expect(node, TokenKind::Ident, "ID")?;

        let rest = self.parse_var_declaration_prime()?;
        self.tree.attach(node, rest);

        Ok(node)
    }

    // var-declaration' ::= ";" | "[" NUM "]" ";"
    pub(crate) fn parse_var_declaration_prime(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("var-declaration'");

        if self.check(TokenKind::Semicolon) {
            self.expect(node, TokenKind::Semicolon, ";")?;
        } else if self.check(TokenKind::LBracket) {
            self.expect(node, TokenKind::LBracket, "[")?;
            self.expect(node, TokenKind::Num, "NUM")?;
            self.expect(node, TokenKind::RBracket, "]")?;
            self.expect(node, TokenKind::Semicolon, ";")?;
        } else {
            return Err(self.error("Expected ';' or '[' in variable declaration"));
        }

        Ok(node)
    }

    // type-specifier ::= int | float
    pub(crate) fn parse_type_specifier(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("type-specifier");

        if self.check(TokenKind::Int) {
            self.expect(node, TokenKind::Int, "int")?;
        } else if self.check(TokenKind::Float) {
            self.expect(node, TokenKind::Float, "float")?;
        } else {
            return Err(self.error("Expected 'int' or 'float'"));
        }

        Ok(node)
    }
}

/// Function-parameter grammar.
///
/// The program rule does not derive function declarations yet, so nothing
/// reaches these productions from [`Parser::parse`]; they stay compilable
/// and under test until function declarations are added to the grammar.
#[allow(dead_code)]
impl Parser {
    // params ::= param-list | void
    pub(crate) fn parse_params(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("params");

        if self.check(TokenKind::Void) {
            self.expect(node, TokenKind::Void, "void")?;
        } else if self.check(TokenKind::Int) || self.check(TokenKind::Float) {
            let list = self.parse_param_list()?;
            self.tree.attach(node, list);
        } else {
            return Err(self.error("Expected parameter list or 'void'"));
        }

        Ok(node)
    }

    // param-list ::= param param-list'
    pub(crate) fn parse_param_list(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("param-list");

        let param = self.parse_param()?;
        self.tree.attach(node, param);

        let rest = self.parse_param_list_prime()?;
        self.tree.attach(node, rest);

        Ok(node)
    }

    // param-list' ::= "," param param-list' | ε
    pub(crate) fn parse_param_list_prime(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("param-list'");

        if self.check(TokenKind::Comma) {
            self.expect(node, TokenKind::Comma, ",")?;

            let param = self.parse_param()?;
            self.tree.attach(node, param);

            let rest = self.parse_param_list_prime()?;
            self.tree.attach(node, rest);
        } else {
            self.epsilon(node);
        }

        Ok(node)
    }

    // param ::= type-specifier ID param'
    pub(crate) fn parse_param(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("param");

        let type_spec = self.parse_type_specifier()?;
        self.tree.attach(node, type_spec);

        self.expect(node, TokenKind::Ident, "ID")?;

        let rest = self.parse_param_prime()?;
        self.tree.attach(node, rest);

        Ok(node)
    }

    // param' ::= ε | "[" "]"
    pub(crate) fn parse_param_prime(&mut self) -> Result<NodeId, ParseError> {
        let node = self.tree.add_non_terminal("param'");

        if self.check(TokenKind::LBracket) {
            self.expect(node, TokenKind::LBracket, "[")?;
            self.expect(node, TokenKind::RBracket, "]")?;
        } else {
            self.epsilon(node);
        }

        Ok(node)
    }
}
