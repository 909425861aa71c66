// End-to-end parses of complete C- programs

use cmtree::dot::write_dot;
use cmtree::{NodeId, NodeKind, ParseTree, Parser};

fn child_labels(tree: &ParseTree, id: NodeId) -> Vec<String> {
    tree.node(id)
        .children()
        .iter()
        .map(|&child| tree.node(child).label())
        .collect()
}

#[test]
fn test_minimal_program() {
    let tree = Parser::new("Program P { int x; x = 1 } .")
        .parse()
        .expect("parse failed");

    let root = tree.root();
    assert_eq!(tree.node(root).label(), "program");
    assert_eq!(
        child_labels(&tree, root),
        vec![
            "Program: Program",
            "ID: P",
            "{: {",
            "declaration-list",
            "statement-list",
            "}: }",
            ".: .",
        ]
    );
}

#[test]
fn test_full_language_surface() {
    let source = r#"
        Program Demo {
            int a;
            int values[10];
            float rate;

            a = 0
            rate = 4.5e2
            while (a < 10) {
                values[a] = a * 2 + 1
                a = a + 1
            }
            if (values[0] == 0) rate = rate / 2. else { rate = (rate + 1) * 0.5 }
        } .
    "#;

    let mut tree = Parser::new(source).parse().expect("parse failed");

    // Every arena node is numbered exactly once, in pre-order from zero.
    let count = tree.assign_ids();
    assert_eq!(count, tree.len());

    let mut ids: Vec<usize> = (0..tree.len())
        .map(|id| tree.node(id).display_id().expect("node left unnumbered"))
        .collect();
    ids.sort_unstable();
    let expected: Vec<usize> = (0..tree.len()).collect();
    assert_eq!(ids, expected);

    // The root is numbered first.
    assert_eq!(tree.node(tree.root()).display_id(), Some(0));
}

#[test]
fn test_epsilon_closes_every_chain() {
    let tree = Parser::new("Program P { int x; } .")
        .parse()
        .expect("parse failed");

    // Continuation rules never leave an empty child list behind: any node
    // without children is a terminal or an epsilon marker.
    for id in tree.pre_order() {
        let node = tree.node(id);
        if node.children().is_empty() {
            assert!(
                !matches!(node.kind(), NodeKind::NonTerminal { .. }),
                "non-terminal {:?} has no children",
                node.label()
            );
        }
    }
}

#[test]
fn test_selection_statement_takes_else_branch() {
    let source = "Program P { int x; if (x) x = 1 else x = 2 } .";
    let tree = Parser::new(source).parse().expect("parse failed");

    let mut else_chains = 0;
    for id in tree.pre_order() {
        let node = tree.node(id);
        if node.label() == "selection-stmt'" {
            let labels = child_labels(&tree, id);
            if labels != vec!["ε"] {
                assert_eq!(labels, vec!["else: else", "statement"]);
                else_chains += 1;
            }
        }
    }
    assert_eq!(else_chains, 1);
}

#[test]
fn test_case_insensitive_keywords_parse() {
    let source = "PROGRAM P { INT x; WHILE (x < 3) x = x + 1 } .";
    let tree = Parser::new(source).parse().expect("parse failed");
    assert_eq!(child_labels(&tree, tree.root())[0], "Program: PROGRAM");
}

#[test]
fn test_identity_assignment_is_idempotent_end_to_end() {
    let mut tree = Parser::new("Program P { int x; x = (x + 1) * 2 } .")
        .parse()
        .expect("parse failed");

    tree.assign_ids();
    let first: Vec<Option<usize>> = (0..tree.len()).map(|id| tree.node(id).display_id()).collect();
    tree.assign_ids();
    let second: Vec<Option<usize>> = (0..tree.len()).map(|id| tree.node(id).display_id()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_dot_output_covers_the_whole_tree() {
    let mut tree = Parser::new("Program P { int x; x = x - 1 } .")
        .parse()
        .expect("parse failed");
    tree.assign_ids();

    let mut out = Vec::new();
    write_dot(&tree, &mut out).expect("rendering failed");
    let output = String::from_utf8(out).expect("DOT output was not UTF-8");

    assert!(output.starts_with("digraph ParseTree {"));
    assert!(output.contains("node0 [label=\"program\"];"));
    assert_eq!(output.matches("[label=").count(), tree.len());
    assert_eq!(output.matches(" -> ").count(), tree.len() - 1);
}
