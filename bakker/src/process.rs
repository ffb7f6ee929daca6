//! Orchestration of one toggle: derive the pair, observe existence, decide,
//! transfer.
//!
//! Each invocation is independent and performs at most two existence checks
//! and one filesystem mutation. The gap between the observation and the
//! transfer is not locked; see `io::fs`.

use std::path::PathBuf;

use tracing::debug;

use crate::core::decision::{Plan, plan};
use crate::core::paths::derive_pair;
use crate::core::types::{Action, Mode};
use crate::error::BakkerError;
use crate::io::config::Settings;
use crate::io::fs::{observe, transfer};

/// Toggle `filename` between its unmarked and marked form.
///
/// `filename` may be given in either form; both candidates are derived from
/// it. Returns the path matching the mode's desired final state, having
/// performed exactly one move/copy or none.
///
/// # Errors
///
/// - [`BakkerError::InvalidArgument`]: empty filename or extension.
/// - [`BakkerError::Conflict`]: both candidate paths exist.
/// - [`BakkerError::NotFound`]: neither candidate path exists.
/// - [`BakkerError::TransferFailed`]: the move/copy primitive failed.
pub fn process(
    filename: &str,
    extension: &str,
    mode: Mode,
    action: Action,
) -> Result<PathBuf, BakkerError> {
    let pair = derive_pair(filename, extension)?;
    let existence = observe(&pair);
    debug!(
        unmarked = %pair.unmarked.display(),
        marked = %pair.marked.display(),
        ?existence,
        %mode,
        "observed candidate pair"
    );

    match plan(&pair, existence, mode)? {
        Plan::Transfer { src, dst } => {
            transfer(action, &src, &dst)?;
            debug!(src = %src.display(), dst = %dst.display(), %action, "transferred");
            Ok(dst)
        }
        Plan::Keep(path) => Ok(path),
    }
}

/// [`process`] with all knobs taken from a [`Settings`] record.
pub fn process_with(filename: &str, settings: &Settings) -> Result<PathBuf, BakkerError> {
    process(
        filename,
        &settings.extension,
        settings.mode,
        settings.action,
    )
}
