//! Convert classified blocks to HTML subtrees
//!
//! Each block type maps to one builder. Inline content is tokenized with
//! [`inline_nodes`]; code blocks are kept literal.

use mdtree_core::HtmlNode;
use tracing::debug;

use crate::block::{classify, BlockType};
use crate::inline::inline_nodes;
use crate::utilities::{ordered_marker, BULLET_MARKERS, FENCE, HEADING_MARKER, QUOTE_MARKER};
use crate::Result;

/// Classify a block and build its HTML subtree
pub fn convert_block(block: &str) -> Result<HtmlNode> {
    let block_type = classify(block);
    debug!(?block_type, "converting block");

    match block_type {
        BlockType::Heading(level) => convert_heading(block, level),
        BlockType::Code => Ok(convert_code(block)),
        BlockType::Quote => convert_quote(block),
        BlockType::UnorderedList => convert_unordered_list(block),
        BlockType::OrderedList => convert_ordered_list(block),
        BlockType::Paragraph => convert_paragraph(block),
    }
}

fn convert_heading(block: &str, level: u8) -> Result<HtmlNode> {
    let content = block
        .trim_start_matches(HEADING_MARKER)
        .strip_prefix(' ')
        .unwrap_or_default();

    Ok(HtmlNode::parent(&format!("h{}", level), inline_nodes(content)?))
}

fn convert_code(block: &str) -> HtmlNode {
    let code = block
        .strip_prefix(FENCE)
        .and_then(|rest| rest.strip_suffix(FENCE))
        .unwrap_or_default();

    HtmlNode::parent("pre", vec![HtmlNode::leaf("code", code)])
}

fn convert_quote(block: &str) -> Result<HtmlNode> {
    let paragraphs = block
        .split(QUOTE_MARKER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| Ok(HtmlNode::parent("p", inline_nodes(segment)?)))
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent("blockquote", paragraphs))
}

fn convert_unordered_list(block: &str) -> Result<HtmlNode> {
    let items = block
        .lines()
        .map(|line| list_item(line.strip_prefix(BULLET_MARKERS).unwrap_or(line)))
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent("ul", items))
}

fn convert_ordered_list(block: &str) -> Result<HtmlNode> {
    let items = block
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let marker = ordered_marker(i);
            list_item(line.strip_prefix(marker.as_str()).unwrap_or(line))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent("ol", items))
}

fn list_item(content: &str) -> Result<HtmlNode> {
    Ok(HtmlNode::parent("li", inline_nodes(content.trim())?))
}

fn convert_paragraph(block: &str) -> Result<HtmlNode> {
    Ok(HtmlNode::parent("p", inline_nodes(block)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MdTreeError;

    fn convert_and_render(block: &str) -> String {
        convert_block(block).unwrap().render().unwrap()
    }

    #[test]
    fn test_heading() {
        let node = convert_block("###### Heading").unwrap();
        assert_eq!(
            node,
            HtmlNode::parent("h6", vec![HtmlNode::text("Heading")])
        );
    }

    #[test]
    fn test_heading_with_inline() {
        assert_eq!(
            convert_and_render("## A **bold** title"),
            "<h2>A <b>bold</b> title</h2>"
        );
    }

    #[test]
    fn test_code() {
        let node = convert_block("```code block```").unwrap();
        assert_eq!(
            node,
            HtmlNode::parent("pre", vec![HtmlNode::leaf("code", "code block")])
        );
    }

    #[test]
    fn test_code_is_literal() {
        assert_eq!(
            convert_and_render("```\nlet x = *p * 2;\n```"),
            "<pre><code>\nlet x = *p * 2;\n</code></pre>"
        );
    }

    #[test]
    fn test_quote() {
        let node = convert_block(">quote\n>quote").unwrap();
        assert_eq!(
            node,
            HtmlNode::parent(
                "blockquote",
                vec![
                    HtmlNode::parent("p", vec![HtmlNode::text("quote")]),
                    HtmlNode::parent("p", vec![HtmlNode::text("quote")]),
                ]
            )
        );
    }

    #[test]
    fn test_quote_with_inline() {
        assert_eq!(
            convert_and_render("> to *be*"),
            "<blockquote><p>to <i>be</i></p></blockquote>"
        );
    }

    #[test]
    fn test_unordered_list() {
        let node = convert_block("* unordered list\n- unorderedlist").unwrap();
        assert_eq!(
            node,
            HtmlNode::parent(
                "ul",
                vec![
                    HtmlNode::parent("li", vec![HtmlNode::text("unordered list")]),
                    HtmlNode::parent("li", vec![HtmlNode::text("unorderedlist")]),
                ]
            )
        );
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            convert_and_render("1. ordered list\n2. ordered list\n3. ordered list"),
            "<ol><li>ordered list</li><li>ordered list</li><li>ordered list</li></ol>"
        );
    }

    #[test]
    fn test_list_item_with_link() {
        assert_eq!(
            convert_and_render("- see [docs](https://example.com)"),
            "<ul><li>see <a href=\"https://example.com\">docs</a></li></ul>"
        );
    }

    #[test]
    fn test_paragraph() {
        let node = convert_block("########## normal paragraph").unwrap();
        assert_eq!(
            node,
            HtmlNode::parent("p", vec![HtmlNode::text("########## normal paragraph")])
        );
    }

    #[test]
    fn test_paragraph_keeps_newlines() {
        assert_eq!(
            convert_and_render("> not q quote\n not a quote\n > not a quote"),
            "<p>> not q quote\n not a quote\n > not a quote</p>"
        );
    }

    #[test]
    fn test_ordered_list_with_two_digit_markers() {
        let block = (1..=11)
            .map(|n| format!("{}. item {}", n, n))
            .collect::<Vec<_>>()
            .join("\n");
        let node = convert_block(&block).unwrap();

        assert_eq!(node.tag(), Some("ol"));
        assert_eq!(node.children().len(), 11);
        assert_eq!(
            node.children()[9],
            HtmlNode::parent("li", vec![HtmlNode::text("item 10")])
        );
        assert_eq!(
            node.children()[10],
            HtmlNode::parent("li", vec![HtmlNode::text("item 11")])
        );
    }

    #[test]
    fn test_leading_bold_reads_as_list_item() {
        assert_eq!(
            convert_block("**Bold** start"),
            Err(MdTreeError::UnbalancedDelimiter {
                delimiter: "**".to_string(),
                fragment: "*Bold** start".to_string(),
            })
        );
    }

    #[test]
    fn test_unbalanced_delimiter_propagates() {
        assert!(convert_block("- an *open item").is_err());
    }
}
