//! # mdtree
//!
//! Convert Markdown documents to HTML node trees.
//!
//! A document is split into blocks on blank lines (fenced code is kept
//! whole), each block is classified and turned into an HTML subtree, and
//! inline spans inside headings, quotes, list items and paragraphs become
//! leaves. The subtrees are wrapped in a single root element.
//!
//! ## Design
//!
//! The converter favours a small, predictable rule set over CommonMark
//! compliance:
//!
//! - **No nesting**: inline emphasis does not nest, and delimiters cannot be escaped
//! - **Strict pairing**: an odd number of `**`, `*` or `` ` `` in a fragment is an error
//! - **Literal code**: fenced code is copied verbatim
//!
//! ## Example
//!
//! ```rust
//! use mdtree::{build_document, extract_title};
//!
//! let markdown = "# Title\n\nSome *text*";
//!
//! let html = build_document(markdown).unwrap().render().unwrap();
//! assert_eq!(html, "<div><h1>Title</h1><p>Some <i>text</i></p></div>");
//!
//! assert_eq!(extract_title(markdown).unwrap(), "Title");
//! ```

pub mod block;
mod convert;
pub mod inline;
mod options;
mod service;
mod utilities;

pub use block::{classify, segment, BlockType};
pub use convert::convert_block;
pub use inline::{tokenize, SpanKind, TextSpan};
pub use mdtree_core::{HtmlNode, RenderError};
pub use options::Options;
pub use service::{build_document, extract_title, Converter};
pub use utilities::*;

/// Error type for mdtree operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MdTreeError {
    #[error("Unbalanced delimiter {delimiter:?} in {fragment:?}")]
    UnbalancedDelimiter { delimiter: String, fragment: String },

    #[error("No level-1 heading found for the document title")]
    NoTitle,

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, MdTreeError>;
