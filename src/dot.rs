//! Graphviz DOT rendering of parse trees
//!
//! A single pre-order traversal emits one node statement per tree node and
//! one edge statement per parent/child pair. Node identities come from
//! [`ParseTree::assign_ids`], which must have run on the finished tree
//! before rendering.

use crate::tree::{NodeId, ParseTree};
use std::io::{self, Write};

/// Render `tree` as a Graphviz DOT document.
///
/// Fails with [`io::ErrorKind::InvalidInput`] if the tree's nodes have not
/// been numbered by [`ParseTree::assign_ids`].
pub fn write_dot<W: Write>(tree: &ParseTree, out: &mut W) -> io::Result<()> {
    writeln!(out, "digraph ParseTree {{")?;
    writeln!(out, "  node [shape=box, fontname=\"Arial\"];")?;
    writeln!(out, "  edge [fontname=\"Arial\"];")?;
    writeln!(out)?;

    for id in tree.pre_order() {
        let node = tree.node(id);
        let node_id = display_id(tree, id)?;

        writeln!(
            out,
            "  node{} [label=\"{}\"];",
            node_id,
            escape_label(&node.label())
        )?;

        for &child in node.children() {
            writeln!(out, "  node{} -> node{};", node_id, display_id(tree, child)?)?;
        }
    }

    writeln!(out, "}}")
}

fn display_id(tree: &ParseTree, id: NodeId) -> io::Result<usize> {
    tree.node(id).display_id().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "parse tree is unnumbered; call ParseTree::assign_ids before rendering",
        )
    })
}

/// Escape `"` and `\` for use inside a double-quoted DOT label.
fn escape_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for ch in label.chars() {
        if ch == '"' || ch == '\\' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
