//! Markdown file discovery
//!
//! Builds the set of markdown files to audit: every regular file matched by
//! an include glob, minus those matched by an exclude glob. Globs are
//! relative to the project root. The result is deduplicated and sorted so
//! repeated runs see files in the same order.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use thiserror::Error;

use crate::config::ScanConfig;

/// Errors that can occur while discovering files
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// An include or exclude glob is malformed
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Underlying failure
        #[source]
        source: glob::PatternError,
    },

    /// The root cannot be expressed as a glob
    #[error("root path is not valid UTF-8: {0}")]
    NonUtf8Root(PathBuf),
}

/// `*` stays within one path component; `**` crosses directories
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Finds the markdown files under a root
#[derive(Debug, Clone)]
pub struct Discovery {
    root: PathBuf,
    include: Vec<String>,
    exclude: Vec<Pattern>,
}

impl Discovery {
    /// Create a discovery for `root` from include and exclude globs
    pub fn new(
        root: impl Into<PathBuf>,
        include: &[String],
        exclude: &[String],
    ) -> Result<Self, DiscoveryError> {
        let exclude = exclude
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|source| DiscoveryError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            root: root.into(),
            include: include.to_vec(),
            exclude,
        })
    }

    /// Create a discovery from the `[scan]` configuration
    pub fn from_config(root: impl Into<PathBuf>, scan: &ScanConfig) -> Result<Self, DiscoveryError> {
        Self::new(root, &scan.include, &scan.exclude)
    }

    /// Get the root path
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find all markdown files, sorted and without duplicates
    pub fn find_markdown_files(&self) -> Result<Vec<PathBuf>, DiscoveryError> {
        let root = self
            .root
            .to_str()
            .ok_or_else(|| DiscoveryError::NonUtf8Root(self.root.clone()))?;
        let escaped_root = Pattern::escape(root);

        let mut files = BTreeSet::new();

        for include in &self.include {
            let pattern = format!("{}/{}", escaped_root.trim_end_matches('/'), include);
            let paths = glob::glob_with(&pattern, MATCH_OPTIONS).map_err(|source| {
                DiscoveryError::InvalidPattern {
                    pattern: include.clone(),
                    source,
                }
            })?;

            for entry in paths {
                let path = match entry {
                    Ok(path) => path,
                    Err(err) => {
                        log::warn!("skipping {}: {}", err.path().display(), err.error());
                        continue;
                    },
                };

                if !path.is_file() {
                    continue;
                }
                if self.is_excluded(&path) {
                    log::debug!("excluded {}", path.display());
                    continue;
                }
                files.insert(path);
            }
        }

        log::debug!("discovered {} markdown file(s)", files.len());
        Ok(files.into_iter().collect())
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        self.exclude.iter().any(|pattern| pattern.matches_path_with(relative, MATCH_OPTIONS))
    }
}
