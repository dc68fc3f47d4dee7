//! Configuration options for document conversion

/// Options for building a document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Tag of the root element wrapping every block
    pub root_tag: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            root_tag: "div".to_string(),
        }
    }
}
