//! The decision table at the heart of toggle processing.

use std::path::PathBuf;

use crate::core::paths::PathPair;
use crate::core::types::{Existence, Mode};
use crate::error::BakkerError;

/// What the processor should do, decided purely from the observed
/// existence pair and the mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Move or copy `src` to `dst`; `dst` is the resulting path.
    Transfer { src: PathBuf, dst: PathBuf },
    /// No filesystem mutation; the file already matches the mode's desired
    /// final state.
    Keep(PathBuf),
}

/// Decide whether a transfer happens and in which direction.
///
/// | unmarked | marked | toggle | add | remove |
/// |---|---|---|---|---|
/// | yes | no | unmarked→marked | unmarked→marked | keep unmarked |
/// | no | yes | marked→unmarked | keep marked | marked→unmarked |
/// | yes | yes | conflict | conflict | conflict |
/// | no | no | not found | not found | not found |
pub fn plan(pair: &PathPair, existence: Existence, mode: Mode) -> Result<Plan, BakkerError> {
    match (existence.unmarked, existence.marked) {
        (true, true) => Err(BakkerError::Conflict {
            unmarked: pair.unmarked.clone(),
            marked: pair.marked.clone(),
        }),
        (false, false) => Err(BakkerError::NotFound {
            unmarked: pair.unmarked.clone(),
            marked: pair.marked.clone(),
        }),
        (true, false) => Ok(match mode {
            Mode::Toggle | Mode::Add => Plan::Transfer {
                src: pair.unmarked.clone(),
                dst: pair.marked.clone(),
            },
            Mode::Remove => Plan::Keep(pair.unmarked.clone()),
        }),
        (false, true) => Ok(match mode {
            Mode::Toggle | Mode::Remove => Plan::Transfer {
                src: pair.marked.clone(),
                dst: pair.unmarked.clone(),
            },
            Mode::Add => Plan::Keep(pair.marked.clone()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::paths::derive_pair;

    fn pair() -> PathPair {
        derive_pair("abc", ".bak").expect("derive")
    }

    fn exists(unmarked: bool, marked: bool) -> Existence {
        Existence { unmarked, marked }
    }

    fn transfer(src: &str, dst: &str) -> Plan {
        Plan::Transfer {
            src: PathBuf::from(src),
            dst: PathBuf::from(dst),
        }
    }

    #[test]
    fn unmarked_only_transfers_forward_unless_removing() {
        let pair = pair();
        let existence = exists(true, false);
        for mode in [Mode::Toggle, Mode::Add] {
            let plan = plan(&pair, existence, mode).expect("plan");
            assert_eq!(plan, transfer("abc", "abc.bak"));
        }
        let plan = plan(&pair, existence, Mode::Remove).expect("plan");
        assert_eq!(plan, Plan::Keep(PathBuf::from("abc")));
    }

    #[test]
    fn marked_only_transfers_back_unless_adding() {
        let pair = pair();
        let existence = exists(false, true);
        for mode in [Mode::Toggle, Mode::Remove] {
            let plan = plan(&pair, existence, mode).expect("plan");
            assert_eq!(plan, transfer("abc.bak", "abc"));
        }
        let plan = plan(&pair, existence, Mode::Add).expect("plan");
        assert_eq!(plan, Plan::Keep(PathBuf::from("abc.bak")));
    }

    #[test]
    fn both_existing_is_a_conflict_in_every_mode() {
        let pair = pair();
        for mode in [Mode::Toggle, Mode::Add, Mode::Remove] {
            let err = plan(&pair, exists(true, true), mode).unwrap_err();
            assert!(matches!(err, BakkerError::Conflict { .. }));
        }
    }

    #[test]
    fn neither_existing_is_not_found_in_every_mode() {
        let pair = pair();
        for mode in [Mode::Toggle, Mode::Add, Mode::Remove] {
            let err = plan(&pair, exists(false, false), mode).unwrap_err();
            assert!(matches!(err, BakkerError::NotFound { .. }));
        }
    }
}
