//! Common utilities for sprig.
//!
//! This crate provides shared infrastructure used by the selector builder and the CLI:
//! - **Warning System** - colored, deduplicated terminal output for questionable input

pub mod warning;
