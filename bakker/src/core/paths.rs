//! Derivation of the unmarked/marked path pair from a single filename.

use std::path::PathBuf;

use crate::error::BakkerError;

/// Both name variants derived from one input filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPair {
    /// The filename with the extension stripped.
    pub unmarked: PathBuf,
    /// The filename with the extension appended.
    pub marked: PathBuf,
}

/// Derive both variants from `filename`, which may already carry
/// `extension` or not.
///
/// The extension is matched as a literal suffix, not a glob. A filename
/// consisting of nothing but the extension strips to an empty unmarked
/// path; an empty path never exists on disk, so the decision table treats
/// that input like any other missing unmarked file.
pub fn derive_pair(filename: &str, extension: &str) -> Result<PathPair, BakkerError> {
    if filename.is_empty() {
        return Err(BakkerError::InvalidArgument(
            "filename must not be empty".to_string(),
        ));
    }
    if extension.is_empty() {
        return Err(BakkerError::InvalidArgument(
            "extension must not be empty".to_string(),
        ));
    }
    let unmarked = filename.strip_suffix(extension).unwrap_or(filename);
    let marked = format!("{unmarked}{extension}");
    Ok(PathPair {
        unmarked: PathBuf::from(unmarked),
        marked: PathBuf::from(marked),
    })
}
