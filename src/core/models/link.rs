//! Link models
//!
//! A [`Link`] borrows its text and target from the markdown it was found in
//! and only lives while that file is processed. Failures that survive into
//! the report are owned: [`BrokenLink`] and [`SkippedFile`].

use std::path::PathBuf;

use serde::Serialize;

/// An inline markdown link, `[text](target)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link<'a> {
    /// The link label between the brackets
    pub text: &'a str,

    /// The raw destination between the parentheses
    pub target: &'a str,
}

impl<'a> Link<'a> {
    /// Create a link from its label and destination
    #[must_use]
    pub const fn new(text: &'a str, target: &'a str) -> Self {
        Self { text, target }
    }

    /// The path portion of the target, without any `#fragment`
    #[must_use]
    pub fn path(&self) -> &'a str {
        self.target.split('#').next().unwrap_or_default()
    }
}

impl std::fmt::Display for Link<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]({})", self.text, self.target)
    }
}

/// An internal link whose resolved target does not exist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenLink {
    /// Markdown file containing the link (relative to the project root)
    pub source: PathBuf,

    /// The link label
    pub text: String,

    /// The raw link target as written
    pub link: String,

    /// The resolved absolute path that was expected to exist
    pub target: PathBuf,

    /// The resolved path as shown to users (root-relative when possible)
    pub expected: PathBuf,
}

impl BrokenLink {
    /// Build a broken-link record from the link that failed to resolve
    #[must_use]
    pub fn new(source: PathBuf, link: &Link<'_>, target: PathBuf, expected: PathBuf) -> Self {
        Self {
            source,
            text: link.text.to_string(),
            link: link.target.to_string(),
            target,
            expected,
        }
    }

    /// The link as originally written, `[text](link)`
    #[must_use]
    pub fn markdown(&self) -> String {
        format!("[{}]({})", self.text, self.link)
    }
}

/// A markdown file excluded from the audit because it could not be read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    /// The file (relative to the project root)
    pub path: PathBuf,

    /// Why it was skipped
    pub reason: String,
}
