//! Link extractor - finds inline markdown links in text
//!
//! Extraction is a shallow pattern match, not a markdown parse. Only the
//! inline form `[label](destination)` is recognized:
//!
//! - the label must be non-empty and cannot contain `]`
//! - the destination runs up to the next `)`
//!
//! Reference-style links (`[label][ref]`), HTML anchors (`<a href>`) and
//! fenced code blocks are not understood: links inside code fences are
//! reported like any other, and the other two forms are never seen.

use std::sync::LazyLock;

use regex::{CaptureMatches, Regex};

use crate::core::models::Link;

static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("inline link pattern is a valid regex")
});

/// Lazy iterator over the links of a markdown document, in document order
#[derive(Debug)]
pub struct Links<'a> {
    captures: CaptureMatches<'static, 'a>,
}

impl<'a> Iterator for Links<'a> {
    type Item = Link<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.captures.next()?;
        // Both groups are mandatory in the pattern
        let text = caps.get(1).map_or("", |m| m.as_str());
        let target = caps.get(2).map_or("", |m| m.as_str());
        Some(Link::new(text, target))
    }
}

/// Extract all inline markdown links from content
#[must_use]
pub fn extract_links(content: &str) -> Links<'_> {
    Links {
        captures: LINK_PATTERN.captures_iter(content),
    }
}
