//! Filesystem primitives consumed by the toggle processor.
//!
//! No locking is performed: the window between an existence observation and
//! the transfer is an accepted race. `transfer` re-checks its preconditions
//! immediately before acting, so a lost race surfaces as a transfer failure
//! rather than a silent overwrite.

use std::fs;
use std::io;
use std::path::Path;

use crate::core::paths::PathPair;
use crate::core::types::{Action, Existence};
use crate::error::BakkerError;

/// Observe which of the two derived paths currently exists.
pub fn observe(pair: &PathPair) -> Existence {
    Existence {
        unmarked: pair.unmarked.exists(),
        marked: pair.marked.exists(),
    }
}

/// Move or copy `src` to `dst`.
///
/// Fails if `src` is missing or `dst` already exists. Exactly one
/// filesystem mutation is attempted; a copy that fails midway may leave a
/// partial `dst` behind, which is reported, not cleaned up.
pub fn transfer(action: Action, src: &Path, dst: &Path) -> Result<(), BakkerError> {
    let fail = |source: io::Error| BakkerError::TransferFailed {
        action,
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        source,
    };

    // `fs::rename` would happily overwrite dst on unix; guard first.
    if !src.exists() {
        return Err(fail(io::Error::new(
            io::ErrorKind::NotFound,
            "source does not exist",
        )));
    }
    if dst.exists() {
        return Err(fail(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "destination already exists",
        )));
    }

    match action {
        Action::Move => fs::rename(src, dst).map_err(fail),
        Action::Copy => fs::copy(src, dst).map(|_| ()).map_err(fail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{touch, touch_with};

    #[test]
    fn move_renames_the_source() {
        let temp = tempfile::tempdir().expect("tempdir");
        let src = touch(temp.path(), "abc");
        let dst = temp.path().join("abc.bak");

        transfer(Action::Move, &src, &dst).expect("transfer");

        assert!(!src.exists());
        assert!(dst.exists());
    }

    #[test]
    fn copy_duplicates_the_source_contents() {
        let temp = tempfile::tempdir().expect("tempdir");
        let src = touch_with(temp.path(), "abc", "payload");
        let dst = temp.path().join("abc.bak");

        transfer(Action::Copy, &src, &dst).expect("transfer");

        assert!(src.exists());
        let copied = fs::read_to_string(&dst).expect("read copy");
        assert_eq!(copied, "payload");
    }

    #[test]
    fn existing_destination_fails_without_overwriting() {
        let temp = tempfile::tempdir().expect("tempdir");
        let src = touch_with(temp.path(), "abc", "new");
        let dst = touch_with(temp.path(), "abc.bak", "old");

        let err = transfer(Action::Move, &src, &dst).unwrap_err();

        assert!(matches!(err, BakkerError::TransferFailed { .. }));
        assert_eq!(fs::read_to_string(&dst).expect("read dst"), "old");
        assert!(src.exists());
    }

    #[test]
    fn missing_source_fails() {
        let temp = tempfile::tempdir().expect("tempdir");
        let src = temp.path().join("missing");
        let dst = temp.path().join("missing.bak");

        let err = transfer(Action::Copy, &src, &dst).unwrap_err();

        assert!(matches!(err, BakkerError::TransferFailed { .. }));
        assert!(!dst.exists());
    }

    #[test]
    fn observe_reports_both_sides() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch(temp.path(), "abc.bak");
        let pair = crate::core::paths::derive_pair(
            temp.path().join("abc").to_str().expect("utf-8"),
            ".bak",
        )
        .expect("derive");

        let existence = observe(&pair);

        assert!(!existence.unmarked);
        assert!(existence.marked);
    }
}
