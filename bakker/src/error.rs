//! Closed error taxonomy for toggle processing.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::core::types::Action;

/// Everything that can go wrong while toggling a single file.
#[derive(Debug)]
pub enum BakkerError {
    /// Empty filename/extension, or a mode/action token outside the
    /// enumerated set. Raised before any filesystem access.
    InvalidArgument(String),
    /// Both candidate paths exist; the caller must resolve manually.
    Conflict { unmarked: PathBuf, marked: PathBuf },
    /// Neither candidate path exists.
    NotFound { unmarked: PathBuf, marked: PathBuf },
    /// The move/copy primitive failed. Not retried; a copy that failed
    /// midway may leave a partial destination for the caller to clean up.
    TransferFailed {
        action: Action,
        src: PathBuf,
        dst: PathBuf,
        source: io::Error,
    },
}

impl fmt::Display for BakkerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BakkerError::InvalidArgument(msg) => write!(f, "{msg}"),
            BakkerError::Conflict { unmarked, marked } => write!(
                f,
                "both {} and {} already exist",
                unmarked.display(),
                marked.display()
            ),
            BakkerError::NotFound { unmarked, marked } => write!(
                f,
                "neither {} nor {} found",
                unmarked.display(),
                marked.display()
            ),
            BakkerError::TransferFailed {
                action,
                src,
                dst,
                source,
            } => write!(
                f,
                "{action} {} -> {} failed: {source}",
                src.display(),
                dst.display()
            ),
        }
    }
}

impl std::error::Error for BakkerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BakkerError::TransferFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
