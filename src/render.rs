//! Renders a tree as indented text for visual debugging.
//!
//! The drawing is the tree rotated a quarter turn: the right subtree sits
//! above its parent's line and the left subtree below, with corner
//! characters tracing the edges. Nothing in the crate depends on this
//! output; it exists for human inspection.

use std::fmt::Display;

use crate::tree::{Node, Tree};

/// Draws `tree` sideways, one node per line. The empty tree renders as an
/// empty string.
///
/// # Examples
///
/// ```
/// use balanced_bst::render::render;
/// use balanced_bst::tree::Tree;
///
/// let tree = Tree::new(vec![5, 10, 20]);
///
/// assert_eq!(render(&tree), "\
/// │   ┌── 20
/// └── 10
///     └── 5
/// ");
/// ```
pub fn render<T>(tree: &Tree<T>) -> String
where
    T: Display,
{
    let mut out = String::new();
    if let Some(root) = tree.root() {
        render_node(root, "", true, &mut out);
    }
    out
}

fn render_node<T>(node: &Node<T>, prefix: &str, is_left: bool, out: &mut String)
where
    T: Display,
{
    if let Some(right) = node.right() {
        let above = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        render_node(right, &above, false, out);
    }

    out.push_str(prefix);
    out.push_str(if is_left { "└── " } else { "┌── " });
    out.push_str(&node.value().to_string());
    out.push('\n');

    if let Some(left) = node.left() {
        let below = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        render_node(left, &below, true, out);
    }
}
