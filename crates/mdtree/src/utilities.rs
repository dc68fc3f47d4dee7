//! Markdown markers recognized by the converter.

/// Code fence marker
pub const FENCE: &str = "```";

/// Bold delimiter
pub const BOLD_DELIMITER: &str = "**";

/// Italic delimiter
pub const ITALIC_DELIMITER: &str = "*";

/// Inline code delimiter
pub const CODE_DELIMITER: &str = "`";

/// Blockquote line marker
pub const QUOTE_MARKER: &str = ">";

/// Heading marker character
pub const HEADING_MARKER: char = '#';

/// Unordered list item markers
pub const BULLET_MARKERS: [char; 2] = ['*', '-'];

/// Blank-line block separator
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Marker for the ordered list item at `index` (0-based), e.g. `"1."`
pub fn ordered_marker(index: usize) -> String {
    format!("{}.", index + 1)
}
