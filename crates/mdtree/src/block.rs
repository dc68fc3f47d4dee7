//! Block segmentation and classification.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::utilities::{
    ordered_marker, BLOCK_SEPARATOR, BULLET_MARKERS, FENCE, HEADING_MARKER, QUOTE_MARKER,
};

static HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,6} ").expect("heading pattern is valid"));

/// Type of a Markdown block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// Heading with level (1-6)
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// Split a document into block strings.
///
/// Fenced code is kept whole, fences included. Everything else is split on
/// blank lines. Blocks are trimmed and empty blocks are dropped.
pub fn segment(document: &str) -> Vec<String> {
    let pieces: Vec<&str> = document.split(FENCE).collect();
    // An even piece count means the last fence was never closed
    let unterminated = pieces.len() % 2 == 0;
    let last = pieces.len() - 1;

    let mut blocks = Vec::new();
    for (i, piece) in pieces.iter().enumerate() {
        if i % 2 == 0 {
            split_blank_lines(piece, &mut blocks);
        } else if unterminated && i == last {
            split_blank_lines(&format!("{FENCE}{piece}"), &mut blocks);
        } else {
            blocks.push(format!("{FENCE}{piece}{FENCE}"));
        }
    }

    debug!(blocks = blocks.len(), "segmented document");
    blocks
}

fn split_blank_lines(text: &str, blocks: &mut Vec<String>) {
    blocks.extend(
        text.split(BLOCK_SEPARATOR)
            .map(str::trim)
            .filter(|block| !block.is_empty())
            .map(str::to_string),
    );
}

/// Classify a block. The first matching rule wins.
pub fn classify(block: &str) -> BlockType {
    if HEADING_PATTERN.is_match(block) {
        let level = block.chars().take_while(|c| *c == HEADING_MARKER).count();
        return BlockType::Heading(level as u8);
    }

    if block.len() >= 2 * FENCE.len() && block.starts_with(FENCE) && block.ends_with(FENCE) {
        return BlockType::Code;
    }

    if block.is_empty() {
        return BlockType::Paragraph;
    }

    let lines: Vec<&str> = block.lines().collect();

    if lines.iter().all(|line| line.starts_with(QUOTE_MARKER)) {
        return BlockType::Quote;
    }

    if lines.iter().all(|line| line.starts_with(BULLET_MARKERS)) {
        return BlockType::UnorderedList;
    }

    if lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(ordered_marker(i).as_str()))
    {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}
