//! Output formatting for human and JSON modes
//!
//! The audit produces an [`AuditReport`]; this module turns it into either
//! human-readable text or machine-parseable JSON.

use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{BrokenLink, SkippedFile};

/// Width of the `=` rules framing the human report
const RULE_WIDTH: usize = 60;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a link audit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    /// Canonical project root
    pub root: PathBuf,
    /// Markdown files read and scanned
    pub files_scanned: usize,
    /// Internal links resolved and checked
    pub links_checked: usize,
    /// Links whose target does not exist, in scan order
    pub broken_links: Vec<BrokenLink>,
    /// Files excluded because they could not be read
    pub skipped: Vec<SkippedFile>,
}

/// JSON shape of a report
#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    root: &'a Path,
    files_scanned: usize,
    links_checked: usize,
    broken_count: usize,
    broken_links: &'a [BrokenLink],
    skipped: &'a [SkippedFile],
}

impl AuditReport {
    /// Create an empty report for a root
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self {
            root,
            files_scanned: 0,
            links_checked: 0,
            broken_links: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Number of broken links
    #[must_use]
    pub fn broken_count(&self) -> usize {
        self.broken_links.len()
    }

    /// Whether every checked link resolved
    #[must_use]
    pub fn passed(&self) -> bool {
        self.broken_links.is_empty()
    }

    /// Process exit status: 0 when no link is broken, 1 otherwise
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.passed() { 0 } else { 1 }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => println!("{}", self.to_json()),
        }
    }

    /// Format the human-readable report
    #[must_use]
    pub fn to_human(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut lines = vec![
            "🔍 Documentation Link Audit".bold().to_string(),
            rule.clone(),
            String::new(),
        ];

        for skipped in &self.skipped {
            lines.push(
                format!("⚠️  Could not read {}: {}", skipped.path.display(), skipped.reason)
                    .yellow()
                    .to_string(),
            );
        }
        if !self.skipped.is_empty() {
            lines.push(String::new());
        }

        if !self.broken_links.is_empty() {
            lines.push("❌ BROKEN LINKS FOUND:".red().bold().to_string());
            lines.push(String::new());
            for broken in &self.broken_links {
                lines.push(format!("  File: {}", broken.source.display()));
                lines.push(format!("  Link: {}", broken.markdown()));
                lines.push(format!("  Expected: {}", broken.expected.display()));
                lines.push(String::new());
            }
        }

        lines.push(rule);
        lines.push("📊 Summary:".bold().to_string());
        lines.push(format!("  Files scanned: {}", self.files_scanned));
        lines.push(format!("  Links checked: {}", self.links_checked));
        lines.push(format!("  Broken links: {}", self.broken_count()));
        lines.push(String::new());

        if self.passed() {
            lines.push("✅ All links are valid!".green().to_string());
        } else {
            lines.push(
                format!("⚠️  Found {} broken link(s)", self.broken_count())
                    .yellow()
                    .to_string(),
            );
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Format the report as pretty-printed JSON
    #[must_use]
    pub fn to_json(&self) -> String {
        let report = JsonReport {
            passed: self.passed(),
            root: &self.root,
            files_scanned: self.files_scanned,
            links_checked: self.links_checked,
            broken_count: self.broken_count(),
            broken_links: &self.broken_links,
            skipped: &self.skipped,
        };
        serde_json::to_string_pretty(&report).unwrap_or_default()
    }
}
