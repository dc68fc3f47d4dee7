//! Converter - the main entry point for Markdown to HTML conversion.

use mdtree_core::HtmlNode;
use tracing::debug;

use crate::block::{classify, segment, BlockType};
use crate::convert::convert_block;
use crate::options::Options;
use crate::{MdTreeError, Result};

/// Prefix of the block used as the document title
const TITLE_PREFIX: &str = "# ";

/// The main service for converting Markdown to an HTML tree
pub struct Converter {
    options: Options,
}

impl Converter {
    /// Create a new Converter with default options
    pub fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Create a Converter with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Build the HTML tree for a Markdown document.
    ///
    /// Every block becomes one child of the root element, in document order.
    pub fn build(&self, markdown: &str) -> Result<HtmlNode> {
        let children = segment(markdown)
            .iter()
            .map(|block| convert_block(block))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            root = %self.options.root_tag,
            children = children.len(),
            "built document"
        );
        Ok(HtmlNode::parent(&self.options.root_tag, children))
    }

    /// Convert a Markdown document to an HTML string
    pub fn to_html(&self, markdown: &str) -> Result<String> {
        Ok(self.build(markdown)?.render()?)
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the HTML tree for a Markdown document with default options
pub fn build_document(markdown: &str) -> Result<HtmlNode> {
    Converter::new().build(markdown)
}

/// Find the text of the first level-1 heading
pub fn extract_title(markdown: &str) -> Result<String> {
    segment(markdown)
        .iter()
        .filter(|block| matches!(classify(block), BlockType::Heading(_)))
        .find_map(|block| block.strip_prefix(TITLE_PREFIX))
        .map(|title| title.trim().to_string())
        .ok_or(MdTreeError::NoTitle)
}
