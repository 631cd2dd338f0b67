//! Core services - pure link logic
//!
//! These services contain no I/O. They operate on markdown text and link
//! targets only.

mod classifier;
mod extractor;

pub use classifier::{LinkKind, classify, is_anchor_only, is_external};
pub use extractor::{Links, extract_links};
