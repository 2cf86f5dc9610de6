//! Bridge between trees and their hierarchical YAML document form.
//!
//! A document node is a mapping with a required `value` key, plus either
//! `left`/`right` sub-mappings (binary mode) or a `children` sequence
//! (general mode). Mixing both key styles on one node is rejected.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::node::Node;
use crate::tree::Tree;

const KEY_VALUE: &str = "value";
const KEY_LEFT: &str = "left";
const KEY_RIGHT: &str = "right";
const KEY_CHILDREN: &str = "children";

/// Build a tree from a YAML file.
///
/// An empty document yields an empty tree. Missing files surface as
/// `FileNotFound`, malformed YAML as `Yaml`, structural problems as
/// `DocumentFormat`.
#[instrument(level = "debug")]
pub fn load(path: &Path) -> TreeResult<Tree> {
    if !path.exists() {
        return Err(TreeError::FileNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    let doc: Value = serde_yaml::from_str(&text)?;
    if doc.is_null() {
        return Ok(Tree::new());
    }
    Ok(Tree::from_node(from_value(&doc)?))
}

/// Write a tree to a YAML file.
///
/// The full document is built in memory before a single write; a failure
/// never leaves a partial file behind an earlier successful write.
#[instrument(level = "debug", skip(tree))]
pub fn save(tree: &Tree, path: &Path) -> TreeResult<()> {
    let doc = match tree.root() {
        Some(root) => to_value(root),
        None => Value::Null,
    };
    let text = serde_yaml::to_string(&doc)?;
    fs::write(path, text)?;
    Ok(())
}

/// Recursive descent from a nested mapping to a tree node.
pub fn from_value(doc: &Value) -> TreeResult<Node> {
    let Value::Mapping(map) = doc else {
        return Err(TreeError::DocumentFormat(
            "tree node must be a mapping".to_string(),
        ));
    };

    let payload = map.get(KEY_VALUE).ok_or_else(|| {
        TreeError::DocumentFormat(format!("missing required '{}' key", KEY_VALUE))
    })?;

    let has_binary = map.contains_key(KEY_LEFT) || map.contains_key(KEY_RIGHT);
    let has_general = map.contains_key(KEY_CHILDREN);
    if has_binary && has_general {
        return Err(TreeError::DocumentFormat(
            "node mixes 'left'/'right' with 'children'".to_string(),
        ));
    }

    let mut node = Node::new(payload.clone());

    if let Some(left) = map.get(KEY_LEFT) {
        node.left = Some(Box::new(from_value(left)?));
    }
    if let Some(right) = map.get(KEY_RIGHT) {
        node.right = Some(Box::new(from_value(right)?));
    }
    if let Some(children) = map.get(KEY_CHILDREN) {
        let Value::Sequence(entries) = children else {
            return Err(TreeError::DocumentFormat(
                "'children' must be a sequence".to_string(),
            ));
        };
        for entry in entries {
            node.children.push(from_value(entry)?);
        }
    }

    Ok(node)
}

/// Recursive descent from a tree node to a nested mapping, the inverse of
/// [`from_value`]. Absent children emit no keys.
pub fn to_value(node: &Node) -> Value {
    let mut map = Mapping::new();
    map.insert(Value::from(KEY_VALUE), node.value.clone());

    if let Some(left) = node.left.as_deref() {
        map.insert(Value::from(KEY_LEFT), to_value(left));
    }
    if let Some(right) = node.right.as_deref() {
        map.insert(Value::from(KEY_RIGHT), to_value(right));
    }
    if !node.children.is_empty() {
        let entries: Vec<Value> = node.children.iter().map(to_value).collect();
        map.insert(Value::from(KEY_CHILDREN), Value::Sequence(entries));
    }

    Value::Mapping(map)
}
