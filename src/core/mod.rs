//! Core utilities for the F1 CLI.
//!
//! - `cache`: file system caching for settled session position payloads

pub mod cache;

pub use cache::{positions_cache_path, try_read_to_string, write_string};
