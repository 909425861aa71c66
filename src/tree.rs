//! Concrete parse tree
//!
//! An ordered, labeled tree mirroring a C- derivation. Nodes live in an
//! arena owned by [`ParseTree`] and reference their children by index, so
//! the whole tree is allocated and dropped as a unit and ownership never
//! cycles. Child order is insertion order and carries meaning: it is the
//! order of the grammar rule's right-hand-side symbols.
//!
//! Rendering identities are not part of construction. They are handed out
//! afterwards by [`ParseTree::assign_ids`], a pre-order numbering pass that
//! may run any number of times once the tree is complete.

use smol_str::SmolStr;

/// Index of a node in its [`ParseTree`] arena.
pub type NodeId = usize;

/// The three node shapes a derivation produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A consumed token: the terminal's display name and the source lexeme.
    Terminal { name: &'static str, lexeme: SmolStr },
    /// An applied grammar rule, labeled with the rule name.
    NonTerminal { rule: &'static str },
    /// Marker for a production that derived the empty string.
    Epsilon,
}

/// A single parse-tree node.
#[derive(Debug)]
pub struct Node {
    kind: NodeKind,
    children: Vec<NodeId>,
    display_id: Option<usize>,
}

impl Node {
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Ordered children, left to right.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Identity assigned by [`ParseTree::assign_ids`], if it has run.
    pub fn display_id(&self) -> Option<usize> {
        self.display_id
    }

    /// Display label: `"name: lexeme"` for terminals, the rule name for
    /// non-terminals, `"ε"` for the empty production.
    pub fn label(&self) -> String {
        match &self.kind {
            NodeKind::Terminal { name, lexeme } => format!("{}: {}", name, lexeme),
            NodeKind::NonTerminal { rule } => (*rule).to_string(),
            NodeKind::Epsilon => "ε".to_string(),
        }
    }
}

/// Arena of parse-tree nodes plus the root index.
#[derive(Debug, Default)]
pub struct ParseTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl ParseTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_non_terminal(&mut self, rule: &'static str) -> NodeId {
        self.push(NodeKind::NonTerminal { rule })
    }

    pub fn add_terminal(&mut self, name: &'static str, lexeme: SmolStr) -> NodeId {
        self.push(NodeKind::Terminal { name, lexeme })
    }

    pub fn add_epsilon(&mut self) -> NodeId {
        self.push(NodeKind::Epsilon)
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            kind,
            children: Vec::new(),
            display_id: None,
        });
        id
    }

    /// Append `child` as the next ordered child of `parent`.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent].children.push(child);
    }

    pub fn set_root(&mut self, root: NodeId) {
        self.root = root;
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order traversal from the root: every node exactly once, parents
    /// before children, children in insertion order.
    pub fn pre_order(&self) -> PreOrder<'_> {
        let stack = if self.nodes.is_empty() {
            Vec::new()
        } else {
            vec![self.root]
        };
        PreOrder { tree: self, stack }
    }

    /// Number every node in pre-order starting from zero and return the
    /// node count. Safe to run repeatedly: each run renumbers from zero, so
    /// the numbering is a pure function of the finished tree shape.
    pub fn assign_ids(&mut self) -> usize {
        let order: Vec<NodeId> = self.pre_order().collect();
        for (seq, &id) in order.iter().enumerate() {
            self.nodes[id].display_id = Some(seq);
        }
        order.len()
    }
}

/// Iterator over a [`ParseTree`] in pre-order.
pub struct PreOrder<'a> {
    tree: &'a ParseTree,
    stack: Vec<NodeId>,
}

impl Iterator for PreOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        for &child in self.tree.nodes[id].children.iter().rev() {
            self.stack.push(child);
        }
        Some(id)
    }
}
