use serde_yaml::Value;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::node::Node;
use crate::path::{parse_path, Step, TreeMode};

/// A tree with an optional root, mutated in place by path-addressed operations.
///
/// Every operation is synchronous and local; the tree assumes exclusive
/// single-threaded ownership.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tree {
    root: Option<Node>,
}

impl Tree {
    /// An empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// A tree with a single root node holding `value`.
    pub fn with_root(value: impl Into<Value>) -> Self {
        Self {
            root: Some(Node::new(value)),
        }
    }

    /// Wrap an already-built node as the root.
    pub fn from_node(node: Node) -> Self {
        Self { root: Some(node) }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn depth(&self) -> usize {
        self.root.as_ref().map(Node::depth).unwrap_or(0)
    }

    pub fn count(&self) -> usize {
        self.root.as_ref().map(Node::count).unwrap_or(0)
    }

    /// Insert a node holding `value` at the slot addressed by `path`.
    ///
    /// Intermediate steps must resolve to existing nodes; only the final step
    /// may address an empty slot. An occupied final slot is destructively
    /// overwritten, discarding any subtree attached there. General-mode growth
    /// proceeds index-by-index: the final index may be at most the current
    /// children count.
    #[instrument(level = "debug", skip(self, value))]
    pub fn insert_by_path(
        &mut self,
        path: &str,
        value: impl Into<Value>,
        mode: TreeMode,
    ) -> TreeResult<()> {
        let steps = parse_path(path, mode)?;

        let mut current = self.root.as_mut().ok_or_else(|| TreeError::PathNotFound {
            path: path.to_string(),
            reason: "tree is empty, create the root first".to_string(),
        })?;

        // Navigate to the parent of the addressed slot
        for step in &steps[..steps.len() - 1] {
            current = match step {
                Step::Left => {
                    current
                        .left
                        .as_deref_mut()
                        .ok_or_else(|| TreeError::PathNotFound {
                            path: path.to_string(),
                            reason: "left child does not exist".to_string(),
                        })?
                }
                Step::Right => {
                    current
                        .right
                        .as_deref_mut()
                        .ok_or_else(|| TreeError::PathNotFound {
                            path: path.to_string(),
                            reason: "right child does not exist".to_string(),
                        })?
                }
                Step::Child(idx) => {
                    let len = current.children.len();
                    current
                        .children
                        .get_mut(*idx)
                        .ok_or_else(|| TreeError::PathNotFound {
                            path: path.to_string(),
                            reason: format!("child at index {} does not exist (have {})", idx, len),
                        })?
                }
            };
        }

        // Attach at the final slot, overwriting any existing subtree
        let node = Node::new(value);
        match steps[steps.len() - 1] {
            Step::Left => current.left = Some(Box::new(node)),
            Step::Right => current.right = Some(Box::new(node)),
            Step::Child(idx) => {
                let len = current.children.len();
                if idx < len {
                    current.children[idx] = node;
                } else if idx == len {
                    current.children.push(node);
                } else {
                    return Err(TreeError::PathNotFound {
                        path: path.to_string(),
                        reason: format!("index {} out of range, next free index is {}", idx, len),
                    });
                }
            }
        }
        Ok(())
    }

    /// First node whose value equals `value`, in pre-order. Absence is a
    /// normal outcome, not an error.
    #[instrument(level = "debug", skip(self, value))]
    pub fn find(&self, value: impl Into<Value>) -> Option<&Node> {
        let target = value.into();
        self.root
            .as_ref()
            .and_then(|root| root.iter().find(|node| node.value == target))
    }

    /// Replace the value of the first pre-order match in place.
    /// Returns false when `old_value` is not present.
    #[instrument(level = "debug", skip(self, old_value, new_value))]
    pub fn edit(&mut self, old_value: impl Into<Value>, new_value: impl Into<Value>) -> bool {
        let old = old_value.into();
        let new = new_value.into();

        let Some(root) = self.root.as_mut() else {
            return false;
        };
        let mut stack: Vec<&mut Node> = vec![root];
        while let Some(node) = stack.pop() {
            if node.value == old {
                node.value = new;
                return true;
            }
            // Push in reverse visit order for pre-order traversal
            for child in node.children.iter_mut().rev() {
                stack.push(child);
            }
            if let Some(right) = node.right.as_deref_mut() {
                stack.push(right);
            }
            if let Some(left) = node.left.as_deref_mut() {
                stack.push(left);
            }
        }
        false
    }

    /// Detach the first pre-order node whose value equals `value`.
    ///
    /// A leaf is simply removed. A node with one child is replaced by that
    /// child. A node with several children is replaced by its first child,
    /// with the remaining subtrees re-attached after the children that child
    /// already has (binary mode: down its right spine), preserving order.
    /// Deleting the root replaces the root itself. Returns false when the
    /// value is not present.
    #[instrument(level = "debug", skip(self, value))]
    pub fn delete(&mut self, value: impl Into<Value>) -> bool {
        let target = value.into();

        match self.root.take() {
            None => false,
            Some(root) if root.value == target => {
                self.root = promote(root);
                true
            }
            Some(mut root) => {
                let deleted = delete_below(&mut root, &target);
                self.root = Some(root);
                deleted
            }
        }
    }

    /// Detach everything reachable from the root. Idempotent.
    #[instrument(level = "debug", skip(self))]
    pub fn delete_all(&mut self) {
        self.root = None;
    }
}

/// Pre-order search below `node` for the deletion target; detaches and
/// promotes on match.
fn delete_below(node: &mut Node, target: &Value) -> bool {
    if node.left.as_deref().is_some_and(|c| c.value == *target) {
        if let Some(removed) = node.left.take() {
            node.left = promote(*removed).map(Box::new);
        }
        return true;
    }
    if let Some(left) = node.left.as_deref_mut() {
        if delete_below(left, target) {
            return true;
        }
    }

    if node.right.as_deref().is_some_and(|c| c.value == *target) {
        if let Some(removed) = node.right.take() {
            node.right = promote(*removed).map(Box::new);
        }
        return true;
    }
    if let Some(right) = node.right.as_deref_mut() {
        if delete_below(right, target) {
            return true;
        }
    }

    let mut idx = 0;
    while idx < node.children.len() {
        if node.children[idx].value == *target {
            let removed = node.children.remove(idx);
            if let Some(promoted) = promote(removed) {
                node.children.insert(idx, promoted);
            }
            return true;
        }
        if delete_below(&mut node.children[idx], target) {
            return true;
        }
        idx += 1;
    }

    false
}

/// Replacement for a detached node: none for a leaf, the single child when
/// there is one, otherwise the first child with its former siblings
/// re-attached behind its own children.
fn promote(removed: Node) -> Option<Node> {
    let Node {
        left,
        right,
        mut children,
        ..
    } = removed;

    if !children.is_empty() {
        let mut promoted = children.remove(0);
        promoted.children.extend(children);
        return Some(promoted);
    }

    match (left, right) {
        (None, None) => None,
        (Some(only), None) | (None, Some(only)) => Some(*only),
        (Some(first), Some(sibling)) => {
            let mut promoted = *first;
            attach_rightmost(&mut promoted, sibling);
            Some(promoted)
        }
    }
}

/// Attach `subtree` at the first vacant right slot down the right spine,
/// the binary analogue of appending after existing children.
fn attach_rightmost(node: &mut Node, subtree: Box<Node>) {
    let mut slot = &mut node.right;
    while let Some(next) = slot {
        slot = &mut next.right;
    }
    *slot = Some(subtree);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_binary_tree() -> Tree {
        let mut tree = Tree::with_root(10);
        tree.insert_by_path("L", 5, TreeMode::Binary).unwrap();
        tree.insert_by_path("R", 15, TreeMode::Binary).unwrap();
        tree.insert_by_path("LL", 3, TreeMode::Binary).unwrap();
        tree.insert_by_path("LR", 7, TreeMode::Binary).unwrap();
        tree
    }

    #[test]
    fn test_insert_then_find() {
        let tree = sample_binary_tree();
        assert_eq!(tree.find(7).map(|n| n.value.clone()), Some(Value::from(7)));
        assert!(tree.find(99).is_none());
    }

    #[test]
    fn test_insert_overwrites_occupied_slot() {
        let mut tree = sample_binary_tree();
        // overwriting L discards the subtree rooted there (3 and 7)
        tree.insert_by_path("L", 42, TreeMode::Binary).unwrap();
        assert!(tree.find(42).is_some());
        assert!(tree.find(3).is_none());
        assert!(tree.find(7).is_none());
        assert_eq!(tree.count(), 3);
    }

    #[test]
    fn test_intermediate_missing_slot_is_rejected() {
        let tree_error = Tree::with_root(10)
            .insert_by_path("LR", 7, TreeMode::Binary)
            .unwrap_err();
        assert!(matches!(tree_error, TreeError::PathNotFound { .. }));
    }

    #[test]
    fn test_insert_into_empty_tree_fails() {
        let mut tree = Tree::new();
        assert!(matches!(
            tree.insert_by_path("L", 1, TreeMode::Binary),
            Err(TreeError::PathNotFound { .. })
        ));
    }

    #[test]
    fn test_general_growth_is_index_by_index() {
        let mut tree = Tree::with_root("CEO");
        tree.insert_by_path("0", "CTO", TreeMode::General).unwrap();
        tree.insert_by_path("1", "CFO", TreeMode::General).unwrap();
        tree.insert_by_path("0-0", "Eng Mgr", TreeMode::General)
            .unwrap();

        assert!(tree.find("Eng Mgr").is_some());
        // index 3 would leave a gap
        assert!(matches!(
            tree.insert_by_path("3", "COO", TreeMode::General),
            Err(TreeError::PathNotFound { .. })
        ));
    }

    #[test]
    fn test_delete_leaf_detaches_it() {
        let mut tree = sample_binary_tree();
        assert!(tree.delete(3));
        assert!(tree.find(3).is_none());
        assert_eq!(tree.count(), 4);
    }

    #[test]
    fn test_delete_two_children_reattaches_sibling() {
        let mut tree = sample_binary_tree();
        // 5 has children 3 and 7: 3 is promoted, 7 re-attached on its right spine
        assert!(tree.delete(5));
        assert!(tree.find(5).is_none());
        for remaining in [10, 3, 7, 15] {
            assert!(tree.find(remaining).is_some(), "{} lost", remaining);
        }
    }

    #[test]
    fn test_delete_root_promotes_first_child() {
        let mut tree = sample_binary_tree();
        assert!(tree.delete(10));
        assert_eq!(
            tree.root().map(|r| r.value.clone()),
            Some(Value::from(5))
        );
        for remaining in [5, 3, 7, 15] {
            assert!(tree.find(remaining).is_some(), "{} lost", remaining);
        }
    }

    #[test]
    fn test_delete_missing_value_is_sentinel_not_error() {
        let mut tree = sample_binary_tree();
        assert!(!tree.delete(99));
        assert_eq!(tree.count(), 5);
    }

    #[test]
    fn test_delete_all_is_idempotent() {
        let mut tree = sample_binary_tree();
        tree.delete_all();
        assert!(tree.is_empty());
        tree.delete_all();
        assert!(tree.is_empty());
        assert_eq!(tree.depth(), 0);
    }
}
