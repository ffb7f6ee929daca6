//! Test-only helpers for creating fixture files.

use std::fs;
use std::path::{Path, PathBuf};

/// Create an empty file named `name` under `dir` and return its path.
pub fn touch(dir: &Path, name: &str) -> PathBuf {
    touch_with(dir, name, "")
}

/// Create a file with `contents`, for tests that check data survives a
/// transfer.
pub fn touch_with(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("create fixture file");
    path
}
