//! The link audit
//!
//! [`Auditor::run`] makes a single pass over the markdown file set and
//! returns an [`AuditReport`]. It prints nothing; rendering belongs to
//! [`crate::output`].

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::config::Config;
use crate::core::models::{BrokenLink, SkippedFile};
use crate::core::services::{classify, extract_links};
use crate::discovery::{Discovery, DiscoveryError};
use crate::output::AuditReport;
use crate::resolver::{ResolveError, Resolver};

/// Errors that abort an audit
#[derive(Debug, Error)]
pub enum AuditError {
    /// Root setup or link normalization failed
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The markdown file set could not be built
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
}

/// Audits the internal links of a project's markdown files
#[derive(Debug, Clone)]
pub struct Auditor {
    resolver: Resolver,
    discovery: Discovery,
}

impl Auditor {
    /// Create an auditor from its parts
    #[must_use]
    pub const fn new(resolver: Resolver, discovery: Discovery) -> Self {
        Self {
            resolver,
            discovery,
        }
    }

    /// Create an auditor for `root` using the given configuration
    pub fn from_config(root: impl AsRef<Path>, config: &Config) -> Result<Self, AuditError> {
        let resolver = Resolver::new(root)?;
        let discovery = Discovery::from_config(resolver.root(), &config.scan)?;
        Ok(Self::new(resolver, discovery))
    }

    /// The canonical project root
    #[must_use]
    pub fn root(&self) -> &Path {
        self.resolver.root()
    }

    /// Run the audit over every discovered markdown file
    pub fn run(&self) -> Result<AuditReport, AuditError> {
        let files = self.discovery.find_markdown_files()?;
        let mut report = AuditReport::new(self.root().to_path_buf());

        for file in &files {
            let relative = self.resolver.display_path(file);

            let content = match fs::read_to_string(file) {
                Ok(content) => content,
                Err(err) => {
                    let reason = if err.kind() == io::ErrorKind::NotFound {
                        "file no longer exists".to_string()
                    } else {
                        err.to_string()
                    };
                    log::debug!("skipping {}: {reason}", relative.display());
                    report.skipped.push(SkippedFile {
                        path: relative,
                        reason,
                    });
                    continue;
                },
            };

            report.files_scanned += 1;
            self.check_content(file, &relative, &content, &mut report)?;
        }

        Ok(report)
    }

    /// Check the links of one file's content, recording results in `report`
    fn check_content(
        &self,
        file: &Path,
        relative: &Path,
        content: &str,
        report: &mut AuditReport,
    ) -> Result<(), AuditError> {
        log::debug!("scanning {}", relative.display());

        for link in extract_links(content) {
            if !classify(link.target).is_checked() {
                continue;
            }

            report.links_checked += 1;

            let Some(target) = self.resolver.resolve(file, link.target)? else {
                continue;
            };

            if target.exists() {
                log::debug!("  ok {link} -> {}", target.display());
                continue;
            }

            log::debug!("  broken {link} -> {}", target.display());
            let expected = self.resolver.display_path(&target);
            report.broken_links.push(BrokenLink::new(relative.to_path_buf(), &link, target, expected));
        }

        Ok(())
    }
}
