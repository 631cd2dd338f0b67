//! Domain models for linkaudit
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Link`] - A `[text](target)` pair found in a markdown file
//! - [`BrokenLink`] - An internal link whose target does not exist
//! - [`SkippedFile`] - A markdown file that could not be read

mod link;

pub use link::{BrokenLink, Link, SkippedFile};
