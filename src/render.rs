//! Depth-indented pre-order rendering.
//!
//! Binary mode uses the `Root:`/`L---`/`R---` glyphs, general mode uses the
//! child index as the glyph so every line shows its own path step.
//! Indentation always equals structural depth.

use termtree::Tree as TermTree;
use tracing::instrument;

use crate::node::{value_text, Node};
use crate::path::TreeMode;
use crate::tree::Tree;

/// Render the whole tree, one line per node.
#[instrument(level = "debug", skip(tree))]
pub fn render(tree: &Tree, mode: TreeMode) -> String {
    render_range(tree, mode, 0, usize::MAX)
}

/// Render only the nodes whose depth lies in `[min_depth, max_depth]`
/// (inclusive, root is depth 0). Nodes deeper than `max_depth` are never
/// visited.
#[instrument(level = "debug", skip(tree))]
pub fn render_range(tree: &Tree, mode: TreeMode, min_depth: usize, max_depth: usize) -> String {
    let mut out = String::new();
    if let Some(root) = tree.root() {
        render_node(root, mode, "Root:", 0, min_depth, max_depth, &mut out);
    }
    out
}

fn render_node(
    node: &Node,
    mode: TreeMode,
    glyph: &str,
    depth: usize,
    min_depth: usize,
    max_depth: usize,
    out: &mut String,
) {
    if depth > max_depth {
        return;
    }
    if depth >= min_depth {
        for _ in 0..depth {
            out.push(' ');
        }
        out.push_str(glyph);
        out.push_str(&value_text(&node.value));
        out.push('\n');
    }
    if depth == max_depth {
        return;
    }

    match mode {
        TreeMode::Binary => {
            if let Some(left) = node.left.as_deref() {
                render_node(left, mode, "L---", depth + 1, min_depth, max_depth, out);
            }
            if let Some(right) = node.right.as_deref() {
                render_node(right, mode, "R---", depth + 1, min_depth, max_depth, out);
            }
        }
        TreeMode::General => {
            for (idx, child) in node.children.iter().enumerate() {
                let child_glyph = format!("{}---", idx);
                render_node(child, mode, &child_glyph, depth + 1, min_depth, max_depth, out);
            }
        }
    }
}

pub trait TreeDisplay {
    fn to_tree_string(&self) -> TermTree<String>;
}

impl TreeDisplay for Tree {
    /// Convert to a `termtree` tree for box-drawing terminal display.
    fn to_tree_string(&self) -> TermTree<String> {
        match self.root() {
            Some(root) => build_term_tree(root),
            None => TermTree::new("Empty tree".to_string()),
        }
    }
}

fn build_term_tree(node: &Node) -> TermTree<String> {
    // Recursively construct the leaves
    let leaves: Vec<_> = node.child_nodes().map(build_term_tree).collect();
    TermTree::new(value_text(&node.value)).with_leaves(leaves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree_renders_nothing() {
        let tree = Tree::new();
        assert_eq!(render(&tree, TreeMode::Binary), "");
    }

    #[test]
    fn test_general_glyphs_carry_child_index() {
        let mut tree = Tree::with_root("CEO");
        tree.insert_by_path("0", "CTO", TreeMode::General).unwrap();
        tree.insert_by_path("1", "CFO", TreeMode::General).unwrap();

        let rendered = render(&tree, TreeMode::General);
        assert_eq!(rendered, "Root:CEO\n 0---CTO\n 1---CFO\n");
    }
}
