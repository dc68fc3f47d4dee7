//! mdtree-core - HTML node tree and rendering
//!
//! This crate provides the HTML tree produced by the `mdtree` Markdown
//! converter, along with the rules for turning that tree into an HTML string.
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──mdtree──▶ ┌───────────────┐
//!                             │               │
//!                             │ HtmlNode tree │ ──render──▶ HTML String
//!                             │               │
//!                             └───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use mdtree_core::HtmlNode;
//!
//! let node = HtmlNode::parent(
//!     "p",
//!     vec![
//!         HtmlNode::leaf("b", "Bold text"),
//!         HtmlNode::text("Normal text"),
//!     ],
//! );
//!
//! assert_eq!(node.render().unwrap(), "<p><b>Bold text</b>Normal text</p>");
//! ```

mod node;
mod render;
mod utilities;

pub use node::{Attributes, HtmlNode, LeafNode, ParentNode};
pub use render::attrs_to_string;
pub use utilities::{is_void, VOID_ELEMENTS};

/// Error raised when a node tree violates its structural rules during rendering
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Parent node has no tag")]
    MissingTag,

    #[error("Parent node <{tag}> has no children")]
    EmptyChildren { tag: String },

    #[error("Leaf node <{tag}> has no text")]
    MissingValue { tag: String },
}

pub type Result<T> = std::result::Result<T, RenderError>;
