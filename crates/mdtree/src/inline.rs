//! Inline span tokenizer
//!
//! Turns a fragment of Markdown text into typed spans. Passes run in a fixed
//! order (bold, italic, code, images, links); each pass only rewrites spans
//! that are still plain text.

use mdtree_core::HtmlNode;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::utilities::{BOLD_DELIMITER, CODE_DELIMITER, ITALIC_DELIMITER};
use crate::{MdTreeError, Result};

static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("image pattern is valid"));

static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("link pattern is valid"));

/// Kind of an inline span
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link { url: String },
    Image { url: String },
}

/// A run of inline text with its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub kind: SpanKind,
}

impl TextSpan {
    pub fn new(text: &str, kind: SpanKind) -> Self {
        Self {
            text: text.to_string(),
            kind,
        }
    }

    pub fn plain(text: &str) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn bold(text: &str) -> Self {
        Self::new(text, SpanKind::Bold)
    }

    pub fn italic(text: &str) -> Self {
        Self::new(text, SpanKind::Italic)
    }

    pub fn code(text: &str) -> Self {
        Self::new(text, SpanKind::Code)
    }

    pub fn link(text: &str, url: &str) -> Self {
        Self::new(
            text,
            SpanKind::Link {
                url: url.to_string(),
            },
        )
    }

    pub fn image(alt: &str, url: &str) -> Self {
        Self::new(
            alt,
            SpanKind::Image {
                url: url.to_string(),
            },
        )
    }

    /// Check if this span is still unclassified text
    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    /// Target URL of a link or image
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Link { url } | SpanKind::Image { url } => Some(url),
            _ => None,
        }
    }

    /// Convert this span into an HTML leaf
    pub fn into_node(self) -> HtmlNode {
        match self.kind {
            SpanKind::Plain => HtmlNode::text(&self.text),
            SpanKind::Bold => HtmlNode::leaf("b", &self.text),
            SpanKind::Italic => HtmlNode::leaf("i", &self.text),
            SpanKind::Code => HtmlNode::leaf("code", &self.text),
            SpanKind::Link { url } => {
                HtmlNode::leaf_with_attrs("a", &self.text, vec![("href", url.as_str())])
            }
            // img is void: alt text goes into the attribute, not the body
            SpanKind::Image { url } => HtmlNode::leaf_with_attrs(
                "img",
                "",
                vec![("src", url.as_str()), ("alt", self.text.as_str())],
            ),
        }
    }
}

/// Tokenize a fragment of text into inline spans.
///
/// An empty fragment yields no spans.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>> {
    let spans = if text.is_empty() {
        Vec::new()
    } else {
        vec![TextSpan::plain(text)]
    };

    let spans = split_delimiter(spans, BOLD_DELIMITER, SpanKind::Bold)?;
    let spans = split_delimiter(spans, ITALIC_DELIMITER, SpanKind::Italic)?;
    let spans = split_delimiter(spans, CODE_DELIMITER, SpanKind::Code)?;
    let spans = split_images(spans);
    let spans = split_links(spans);

    trace!(spans = spans.len(), "tokenized fragment");
    Ok(spans)
}

/// Tokenize a fragment and convert every span into an HTML leaf
pub fn inline_nodes(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(tokenize(text)?
        .into_iter()
        .map(TextSpan::into_node)
        .collect())
}

/// Split plain spans on a paired delimiter.
///
/// Segments alternate between outside (plain) and inside (`kind`). Empty
/// segments are dropped. Non-plain spans pass through untouched.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    spans.into_iter().try_fold(Vec::new(), |mut result, span| {
        if !span.is_plain() {
            result.push(span);
            return Ok(result);
        }

        if span.text.matches(delimiter).count() % 2 != 0 {
            return Err(MdTreeError::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                fragment: span.text,
            });
        }

        let segments = span
            .text
            .split(delimiter)
            .enumerate()
            .filter(|(_, segment)| !segment.is_empty())
            .map(|(i, segment)| {
                if i % 2 == 0 {
                    TextSpan::plain(segment)
                } else {
                    TextSpan::new(segment, kind.clone())
                }
            });
        result.extend(segments);
        Ok(result)
    })
}

/// Find all `![alt](url)` images in text, as `(alt, url)` pairs
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    extract_pairs(&IMAGE_PATTERN, text)
}

/// Find all `[label](url)` links in text, as `(label, url)` pairs
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    extract_pairs(&LINK_PATTERN, text)
}

/// Split plain spans around image markers
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_pattern(spans, &IMAGE_PATTERN, TextSpan::image)
}

/// Split plain spans around link markers
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_pattern(spans, &LINK_PATTERN, TextSpan::link)
}

fn extract_pairs(pattern: &Regex, text: &str) -> Vec<(String, String)> {
    pattern
        .captures_iter(text)
        .map(|caps| {
            let (_, [label, url]) = caps.extract();
            (label.to_string(), url.to_string())
        })
        .collect()
}

fn split_pattern(
    spans: Vec<TextSpan>,
    pattern: &Regex,
    make: fn(&str, &str) -> TextSpan,
) -> Vec<TextSpan> {
    spans
        .into_iter()
        .flat_map(|span| {
            if span.is_plain() {
                split_text(&span.text, pattern, make)
            } else {
                vec![span]
            }
        })
        .collect()
}

fn split_text(text: &str, pattern: &Regex, make: fn(&str, &str) -> TextSpan) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in pattern.captures_iter(text) {
        let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        push_residual(&text[last..whole.start()], &mut spans);
        spans.push(make(label.as_str(), url.as_str()));
        last = whole.end();
    }

    push_residual(&text[last..], &mut spans);
    spans
}

/// Keep text between matches unless it is empty or only newlines
fn push_residual(text: &str, spans: &mut Vec<TextSpan>) {
    if !text.trim_matches('\n').is_empty() {
        spans.push(TextSpan::plain(text));
    }
}
