//! Core domain logic for linkaudit
//!
//! This module contains pure logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Link, `BrokenLink`, `SkippedFile`)
//! - `services/` - Link classification and extraction

pub mod models;
pub mod services;
