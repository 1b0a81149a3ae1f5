use std::fmt::Write;

use crate::{
    NodeId, Tree,
    layout::{Node, NodeType},
};

pub fn node_label(node: &Node) -> &'static str {
    match node.node_type() {
        NodeType::Default => "Node",
        NodeType::Text => "Text",
    }
}

/// Renders the subtree under `root` one node per line, indented by depth.
pub fn dump_tree(tree: &Tree, root: NodeId) -> String {
    let mut out = String::new();
    let mut stack = vec![(root, 0usize)];
    while let Some((id, depth)) = stack.pop() {
        let Some(node) = tree.get(id) else {
            continue;
        };
        let frame = node.layout().frame();
        let _ = writeln!(
            out,
            "{:indent$}{} {:?} pos=({}, {}) size=({}, {}){}",
            "",
            node_label(node),
            id,
            frame.origin.x,
            frame.origin.y,
            frame.size.x,
            frame.size.y,
            if node.is_dirty() { " dirty" } else { "" },
            indent = depth * 2,
        );
        stack.extend(node.children().iter().rev().map(|child| (*child, depth + 1)));
    }
    out
}

pub fn log_tree(tree: &Tree, root: NodeId) {
    log::debug!("layout tree:\n{}", dump_tree(tree, root));
}
