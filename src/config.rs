//! Project configuration
//!
//! An optional `.linkaudit.toml` at the project root controls which markdown
//! files are audited:
//!
//! ```toml
//! [scan]
//! include = ["docs/**/*.md", "*.md"]
//! exclude = ["docs/archive/**"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Project configuration filename
pub const CONFIG_FILE: &str = ".linkaudit.toml";

/// Errors loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// The config file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: toml::de::Error,
    },
}

/// linkaudit configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Which files are scanned
    #[serde(default)]
    pub scan: ScanConfig,
}

/// File selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Globs (relative to the root) selecting markdown files
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    /// Globs (relative to the root) removing files from the selection
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_include() -> Vec<String> {
    vec!["docs/**/*.md".to_string(), "*.md".to_string()]
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include: default_include(),
            exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration for a project root
    ///
    /// An explicit path must exist. Without one, `<root>/.linkaudit.toml` is
    /// used when present and the defaults otherwise.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) if !path.is_file() => Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Self::load_file(path),
            None => {
                let path = root.join(CONFIG_FILE);
                if path.is_file() {
                    Self::load_file(&path)
                } else {
                    log::debug!("no {CONFIG_FILE} in {}, using defaults", root.display());
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load configuration from a specific file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Append extra exclude globs (e.g. from the command line)
    pub fn add_excludes(&mut self, patterns: impl IntoIterator<Item = String>) {
        self.scan.exclude.extend(patterns);
    }
}
