use std::fmt;

use serde_yaml::Value;
use tracing::instrument;

/// Tree node usable for both binary and general trees.
///
/// Binary mode populates `left`/`right`; general mode populates `children`.
/// A well-formed tree uses exactly one mode per node, every edge is an
/// exclusive-ownership edge (no sharing, no cycles).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Opaque payload, compared by equality for find/edit/delete
    pub value: Value,
    /// Left child (binary mode)
    pub left: Option<Box<Node>>,
    /// Right child (binary mode)
    pub right: Option<Box<Node>>,
    /// Ordered children (general mode)
    pub children: Vec<Node>,
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", value_text(&self.value))
    }
}

impl Node {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            left: None,
            right: None,
            children: Vec::new(),
        }
    }

    /// Append a child in general mode.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none() && self.children.is_empty()
    }

    /// Child nodes in visit order: left, right, then the general-children list.
    /// A well-formed node populates only one of the two groups.
    pub fn child_nodes(&self) -> impl Iterator<Item = &Node> {
        self.left
            .as_deref()
            .into_iter()
            .chain(self.right.as_deref())
            .chain(self.children.iter())
    }

    /// Height of the subtree rooted here (a leaf has depth 1).
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 1)];

        while let Some((node, depth)) = stack.pop() {
            if depth > max_depth {
                max_depth = depth;
            }
            for child in node.child_nodes() {
                stack.push((child, depth + 1));
            }
        }

        max_depth
    }

    /// Number of nodes in the subtree rooted here.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Values of all leaf nodes, in pre-order.
    #[instrument(level = "trace", skip(self))]
    pub fn leaf_values(&self) -> Vec<Value> {
        self.iter()
            .filter(|node| node.is_leaf())
            .map(|node| node.value.clone())
            .collect()
    }

    /// Pre-order traversal: node first, then left, right, children in order.
    pub fn iter(&self) -> PreOrderIter<'_> {
        PreOrderIter { stack: vec![self] }
    }
}

/// Scalar text of a payload for display purposes.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => "~".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| "<unprintable>".to_string()),
    }
}

pub struct PreOrderIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push in reverse visit order for left-to-right traversal
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(node)
    }
}
