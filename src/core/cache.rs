//! File system caching for OpenF1 position payloads.
//!
//! Position feeds for sessions that finished long ago never change, so they
//! are cached as JSON under the user's cache directory and re-read on later
//! runs instead of hitting the API again.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

/// Path: ~/.cache/f1-cli/positions_{season}_{session_key}.json
pub fn positions_cache_path(season: u16, session_key: u32) -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("f1-cli")
        .join(format!("positions_{}_{}.json", season, session_key))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
