//! # Introduction
//!
//! cmtree parses the C- language with a hand-written recursive descent
//! parser and renders the resulting concrete parse tree as a Graphviz DOT
//! document for visualization.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → ParseTree → assign_ids → DOT
//! ```
//!
//! 1. [`parser::lexer`] — tokenises the source. Lexical problems surface as
//!    error-class tokens, not failures; the parser rejects them through
//!    ordinary token matching.
//! 2. [`parser`] — one method per grammar production. Builds the tree
//!    bottom-up and stops at the first syntax error; a failed parse yields
//!    an error and no tree.
//! 3. [`tree`] — the ordered, labeled parse-tree arena, with a pre-order
//!    numbering pass for stable node identities.
//! 4. [`dot`] — Graphviz serialization of the numbered tree.
//!
//! ## Supported C- surface
//!
//! Programs (`Program ID { ... } .`), scalar and array variable
//! declarations with `int`/`float` type specifiers, compound/selection/
//! iteration/assignment statements, scalar and indexed variable references,
//! and expressions over six relational and four arithmetic operators.

pub mod dot;
pub mod parser;
pub mod tree;

pub use parser::lexer::{Lexer, SourceLocation, Token, TokenKind};
pub use parser::parse::{ParseError, Parser};
pub use tree::{Node, NodeId, NodeKind, ParseTree};
