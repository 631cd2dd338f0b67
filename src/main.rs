//! linkaudit - A CLI tool that audits relative links in markdown documentation
//!
//! Scans a project's markdown files, resolves every internal link and
//! reports the ones whose target does not exist on disk.

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

mod cli;

/// Exit status for errors that abort the audit
const EXIT_ERROR: i32 = 2;

/// Main entry point for the linkaudit CLI
fn main() {
    let code = match cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            EXIT_ERROR
        },
    };

    std::process::exit(code);
}
