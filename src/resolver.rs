//! Resolver - resolves link targets to filesystem paths
//!
//! The Resolver is anchored at the project root. Root-relative links
//! (`/docs/guide.md`) are joined onto the root; every other link is joined
//! onto the directory of the file that contains it and normalized.
//!
//! # Examples
//!
//! ```no_run
//! use linkaudit::resolver::Resolver;
//!
//! let resolver = Resolver::new(".").unwrap();
//! let source = resolver.root().join("docs/a.md");
//! let target = resolver.resolve(&source, "../README.md#usage").unwrap();
//! assert_eq!(target, Some(resolver.root().join("README.md")));
//! ```

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Errors that can occur during resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Root path does not exist
    #[error("root path does not exist: {0}")]
    RootNotFound(PathBuf),

    /// Path is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// IO error while preparing the root
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// A link produced a path that cannot be normalized
    #[error("cannot resolve {path}: {source}")]
    Normalize {
        /// The joined path that failed
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: io::Error,
    },
}

/// Resolver for link targets
#[derive(Debug, Clone)]
pub struct Resolver {
    /// Canonical root directory
    root: PathBuf,
}

impl Resolver {
    /// Create a new resolver rooted at the given directory
    pub fn new(root: impl AsRef<Path>) -> Result<Self, ResolveError> {
        let root = root.as_ref().to_path_buf();

        if !root.exists() {
            return Err(ResolveError::RootNotFound(root));
        }
        if !root.is_dir() {
            return Err(ResolveError::NotADirectory(root));
        }

        Ok(Self {
            root: fs::canonicalize(&root)?,
        })
    }

    /// Create a resolver at the current working directory
    pub fn current_dir() -> Result<Self, ResolveError> {
        let cwd = std::env::current_dir()?;
        Self::new(cwd)
    }

    /// Get the root path
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a link found in `source` to an absolute path
    ///
    /// Returns `Ok(None)` when nothing is left once the `#fragment` is
    /// removed. Fails only if the joined path cannot be normalized at all.
    pub fn resolve(&self, source: &Path, link: &str) -> Result<Option<PathBuf>, ResolveError> {
        let link_path = link.split('#').next().unwrap_or_default();

        if link_path.is_empty() {
            return Ok(None);
        }

        if link_path.starts_with('/') {
            return Ok(Some(self.root.join(link_path.trim_start_matches('/'))));
        }

        let source_dir = source.parent().unwrap_or(&self.root);
        normalize(&source_dir.join(link_path)).map(Some)
    }

    /// Path as shown to users: relative to the root when inside it
    #[must_use]
    pub fn display_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root).map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
    }
}

/// Normalize an absolute path the way a non-strict `realpath` does
///
/// Components are walked left to right. Symbolic links among the existing
/// components are followed, `..` pops the path built so far, and components
/// that do not exist are kept as written.
fn normalize(path: &Path) -> Result<PathBuf, ResolveError> {
    let fail = |source: io::Error| ResolveError::Normalize {
        path: path.to_path_buf(),
        source,
    };

    let mut resolved = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component),
            Component::CurDir => {},
            Component::ParentDir => {
                resolved.pop();
            },
            Component::Normal(name) => {
                let candidate = resolved.join(name);
                match fs::symlink_metadata(&candidate) {
                    Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(&candidate) {
                        Ok(real) => resolved = real,
                        // Dangling symlink: keep the name, as with a missing file
                        Err(err) if err.kind() == io::ErrorKind::NotFound => resolved = candidate,
                        Err(err) => return Err(fail(err)),
                    },
                    Ok(_) => resolved = candidate,
                    Err(err) if err.kind() == io::ErrorKind::InvalidInput => return Err(fail(err)),
                    Err(_) => resolved = candidate,
                }
            },
        }
    }

    Ok(resolved)
}
