//! HTML node tree
//!
//! A document is a tree of two kinds of nodes: leaves carrying text and
//! parents carrying children. Each node owns its children.

use indexmap::IndexMap;

/// Element attributes, kept in insertion order so output is deterministic
pub type Attributes = IndexMap<String, String>;

/// A node in the HTML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Text with an optional wrapping element
    Leaf(LeafNode),
    /// Element wrapping child nodes
    Parent(ParentNode),
}

/// A textual node with no children.
///
/// A leaf without a tag renders its text verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub text: String,
    pub attributes: Attributes,
}

/// A structural node with children and no direct text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParentNode {
    pub tag: String,
    pub children: Vec<HtmlNode>,
    pub attributes: Attributes,
}

impl HtmlNode {
    /// Create an untagged text node
    pub fn text(content: &str) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: None,
            text: content.to_string(),
            attributes: Attributes::new(),
        })
    }

    /// Create a leaf element wrapping text
    pub fn leaf(tag: &str, text: &str) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: Some(tag.to_string()),
            text: text.to_string(),
            attributes: Attributes::new(),
        })
    }

    /// Create a leaf element with attributes
    pub fn leaf_with_attrs(tag: &str, text: &str, attrs: Vec<(&str, &str)>) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: Some(tag.to_string()),
            text: text.to_string(),
            attributes: collect_attrs(attrs),
        })
    }

    /// Create a parent element
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent(ParentNode {
            tag: tag.to_string(),
            children,
            attributes: Attributes::new(),
        })
    }

    /// Get the tag name, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => Some(parent.tag.as_str()),
        }
    }

    /// Get the child nodes (empty for leaves)
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => &parent.children,
        }
    }

    /// Get the attributes
    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.attributes,
            HtmlNode::Parent(parent) => &parent.attributes,
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes().get(name).map(String::as_str)
    }
}

fn collect_attrs(attrs: Vec<(&str, &str)>) -> Attributes {
    attrs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
