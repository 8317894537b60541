//! Node type tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumeration of the node tags a document tree can carry.
///
/// Tags serialize as their upper-case names (`"PAGE"`, `"TEXT_INSTANCE"`).
/// Tags this crate does not know about are kept verbatim in `Other` so that
/// trees from newer builders still round-trip and traverse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeType {
    Root,
    Document,
    Page,
    View,
    Text,
    TextInstance,
    Link,
    Image,
    Note,
    Canvas,
    Svg,
    Other(String),
}

impl NodeType {
    /// The tag as it appears in serialized trees
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Root => "ROOT",
            NodeType::Document => "DOCUMENT",
            NodeType::Page => "PAGE",
            NodeType::View => "VIEW",
            NodeType::Text => "TEXT",
            NodeType::TextInstance => "TEXT_INSTANCE",
            NodeType::Link => "LINK",
            NodeType::Image => "IMAGE",
            NodeType::Note => "NOTE",
            NodeType::Canvas => "CANVAS",
            NodeType::Svg => "SVG",
            NodeType::Other(tag) => tag,
        }
    }

    /// Parse a tag. Matching is exact; unknown tags become `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "ROOT" => NodeType::Root,
            "DOCUMENT" => NodeType::Document,
            "PAGE" => NodeType::Page,
            "VIEW" => NodeType::View,
            "TEXT" => NodeType::Text,
            "TEXT_INSTANCE" => NodeType::TextInstance,
            "LINK" => NodeType::Link,
            "IMAGE" => NodeType::Image,
            "NOTE" => NodeType::Note,
            "CANVAS" => NodeType::Canvas,
            "SVG" => NodeType::Svg,
            other => NodeType::Other(other.to_string()),
        }
    }

    /// Whether this tag marks a page. An `Other("PAGE")` built by hand
    /// counts too, since it serializes identically.
    pub fn is_page(&self) -> bool {
        match self {
            NodeType::Page => true,
            NodeType::Other(tag) => tag == "PAGE",
            _ => false,
        }
    }
}

impl From<String> for NodeType {
    fn from(tag: String) -> Self {
        match NodeType::from_tag(&tag) {
            NodeType::Other(_) => NodeType::Other(tag),
            known => known,
        }
    }
}

impl From<NodeType> for String {
    fn from(node_type: NodeType) -> Self {
        match node_type {
            NodeType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
