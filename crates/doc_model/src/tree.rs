//! Document tree structure and traversal

use crate::{DocModelError, NodePath, NodeType, PageBox, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form node properties supplied by the tree builder
pub type Props = serde_json::Map<String, Value>;

/// A node in the document tree.
///
/// Children are owned exclusively by their parent and kept in document
/// order. `page_box` is absent until page geometry has been resolved and is
/// serialized under the key `box`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentNode {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DocumentNode>,
    #[serde(default, skip_serializing_if = "Props::is_empty")]
    pub props: Props,
    #[serde(default, rename = "box", skip_serializing_if = "Option::is_none")]
    pub page_box: Option<PageBox>,
}

impl DocumentNode {
    /// Create a childless node without props
    pub fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            children: Vec::new(),
            props: Props::new(),
            page_box: None,
        }
    }

    pub fn root() -> Self {
        Self::new(NodeType::Root)
    }

    pub fn document() -> Self {
        Self::new(NodeType::Document)
    }

    pub fn page() -> Self {
        Self::new(NodeType::Page)
    }

    /// Builder: set a prop
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Builder: append a child
    pub fn with_child(mut self, child: DocumentNode) -> Self {
        self.children.push(child);
        self
    }

    /// Builder: append several children in order
    pub fn with_children(mut self, children: impl IntoIterator<Item = DocumentNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Look up a prop by key
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    pub fn is_page(&self) -> bool {
        self.node_type.is_page()
    }

    /// Node at `path` relative to this node
    pub fn node_at(&self, path: &NodePath) -> Option<&DocumentNode> {
        path.indices()
            .iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }

    /// Mutable node at `path` relative to this node
    pub fn node_at_mut(&mut self, path: &NodePath) -> Result<&mut DocumentNode> {
        let mut node = self;
        for &index in path.indices() {
            node = node
                .children
                .get_mut(index)
                .ok_or_else(|| DocModelError::PathNotFound(path.clone()))?;
        }
        Ok(node)
    }

    /// Depth-first, pre-order iterator over this node and all descendants
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![(NodePath::root(), self)],
        }
    }

    /// All `PAGE` nodes in document order, with their positions
    pub fn pages(&self) -> impl Iterator<Item = (NodePath, &DocumentNode)> {
        self.descendants().filter(|(_, node)| node.is_page())
    }

    /// First node of the given type in document order
    pub fn find_type(&self, node_type: &NodeType) -> Option<&DocumentNode> {
        self.descendants()
            .map(|(_, node)| node)
            .find(|node| &node.node_type == node_type)
    }

    /// Parse a tree from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a tree from an already parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Pre-order traversal yielding each node with its path
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<(NodePath, &'a DocumentNode)>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (NodePath, &'a DocumentNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.stack.pop()?;
        // Reversed so the first child is popped next
        for (index, child) in node.children.iter().enumerate().rev() {
            self.stack.push((path.child(index), child));
        }
        Some((path, node))
    }
}
