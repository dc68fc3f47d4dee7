//! HTML serialization
//!
//! Converts an [`HtmlNode`] tree into an HTML string.

use crate::node::{Attributes, HtmlNode, LeafNode, ParentNode};
use crate::utilities::is_void;
use crate::{RenderError, Result};

impl HtmlNode {
    /// Render this node and its descendants to HTML
    pub fn render(&self) -> Result<String> {
        let mut output = String::new();
        render_node(self, &mut output)?;
        Ok(output)
    }
}

/// Format attributes for an opening tag.
///
/// Returns an empty string for no attributes, otherwise a leading space
/// followed by `key="value"` pairs in insertion order. Values are written
/// as-is.
pub fn attrs_to_string(attrs: &Attributes) -> String {
    let mut result = String::new();
    for (key, value) in attrs {
        result.push(' ');
        result.push_str(key);
        result.push_str("=\"");
        result.push_str(value);
        result.push('"');
    }
    result
}

fn render_node(node: &HtmlNode, out: &mut String) -> Result<()> {
    match node {
        HtmlNode::Leaf(leaf) => render_leaf(leaf, out),
        HtmlNode::Parent(parent) => render_parent(parent, out),
    }
}

fn render_leaf(leaf: &LeafNode, out: &mut String) -> Result<()> {
    let Some(tag) = leaf.tag.as_deref() else {
        if leaf.text.is_empty() {
            return Err(RenderError::MissingValue { tag: String::new() });
        }
        out.push_str(&leaf.text);
        return Ok(());
    };

    if is_void(tag) {
        open_tag(tag, &leaf.attributes, out);
        return Ok(());
    }

    if leaf.text.is_empty() {
        return Err(RenderError::MissingValue {
            tag: tag.to_string(),
        });
    }

    open_tag(tag, &leaf.attributes, out);
    out.push_str(&leaf.text);
    close_tag(tag, out);
    Ok(())
}

fn render_parent(parent: &ParentNode, out: &mut String) -> Result<()> {
    if parent.tag.is_empty() {
        return Err(RenderError::MissingTag);
    }
    if parent.children.is_empty() {
        return Err(RenderError::EmptyChildren {
            tag: parent.tag.clone(),
        });
    }

    open_tag(&parent.tag, &parent.attributes, out);
    for child in &parent.children {
        render_node(child, out)?;
    }
    close_tag(&parent.tag, out);
    Ok(())
}

fn open_tag(tag: &str, attrs: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&attrs_to_string(attrs));
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_to_string() {
        let node = HtmlNode::leaf_with_attrs(
            "a",
            "value",
            vec![("href", "https://www.google.com"), ("target", "_blank")],
        );
        assert_eq!(
            attrs_to_string(node.attributes()),
            " href=\"https://www.google.com\" target=\"_blank\""
        );
        assert_eq!(attrs_to_string(&Attributes::new()), "");
    }

    #[test]
    fn test_attr_values_are_not_escaped() {
        let node = HtmlNode::leaf_with_attrs("a", "x", vec![("title", "say \"hi\"")]);
        assert_eq!(node.render().unwrap(), "<a title=\"say \"hi\"\">x</a>");
    }

    #[test]
    fn test_render_leaf() {
        let p = HtmlNode::leaf("p", "This is a paragraph of text.");
        let a = HtmlNode::leaf_with_attrs(
            "a",
            "Click me!",
            vec![("href", "https://www.google.com")],
        );

        assert_eq!(p.render().unwrap(), "<p>This is a paragraph of text.</p>");
        assert_eq!(
            a.render().unwrap(),
            "<a href=\"https://www.google.com\">Click me!</a>"
        );
    }

    #[test]
    fn test_render_untagged_leaf() {
        assert_eq!(HtmlNode::text("plain <b>").render().unwrap(), "plain <b>");
    }

    #[test]
    fn test_render_leaf_missing_value() {
        assert_eq!(
            HtmlNode::leaf("b", "").render(),
            Err(RenderError::MissingValue {
                tag: "b".to_string()
            })
        );
        assert!(HtmlNode::text("").render().is_err());
    }

    #[test]
    fn test_render_void_leaf() {
        let img = HtmlNode::leaf_with_attrs("img", "", vec![("src", "test.png"), ("alt", "Test")]);
        assert_eq!(img.render().unwrap(), "<img src=\"test.png\" alt=\"Test\">");
    }

    #[test]
    fn test_render_parent() {
        let node = HtmlNode::parent(
            "p",
            vec![
                HtmlNode::leaf("b", "Bold text"),
                HtmlNode::text("Normal text"),
                HtmlNode::leaf("i", "italic text"),
                HtmlNode::text("Normal text"),
            ],
        );

        assert_eq!(
            node.render().unwrap(),
            "<p><b>Bold text</b>Normal text<i>italic text</i>Normal text</p>"
        );
    }

    #[test]
    fn test_render_nested_parent_with_attrs() {
        let node = HtmlNode::Parent(ParentNode {
            tag: "div".to_string(),
            children: vec![HtmlNode::parent("pre", vec![HtmlNode::leaf("code", "x = 1")])],
            attributes: Attributes::from([("class".to_string(), "content".to_string())]),
        });

        assert_eq!(
            node.render().unwrap(),
            "<div class=\"content\"><pre><code>x = 1</code></pre></div>"
        );
    }

    #[test]
    fn test_render_parent_missing_tag() {
        let node = HtmlNode::parent("", vec![HtmlNode::text("x")]);
        assert_eq!(node.render(), Err(RenderError::MissingTag));
    }

    #[test]
    fn test_render_parent_empty_children() {
        let node = HtmlNode::parent("ul", Vec::new());
        assert_eq!(
            node.render(),
            Err(RenderError::EmptyChildren {
                tag: "ul".to_string()
            })
        );
    }

    #[test]
    fn test_child_error_propagates() {
        let node = HtmlNode::parent("p", vec![HtmlNode::text("ok"), HtmlNode::leaf("i", "")]);
        assert_eq!(
            node.render(),
            Err(RenderError::MissingValue {
                tag: "i".to_string()
            })
        );
    }
}
