//! linkaudit - A CLI tool that audits relative links in markdown documentation
//!
//! This library discovers a project's markdown files, extracts inline links,
//! resolves the internal ones against the filesystem and reports every target
//! that does not exist.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod audit;
pub mod config;
pub mod core;
pub mod discovery;
pub mod output;
pub mod resolver;
