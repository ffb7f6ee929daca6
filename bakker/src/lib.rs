//! Toggle a file between its plain and extension-marked name
//! (`report.txt` ↔ `report.txt.bak`) by moving or copying it, for quick
//! manual backups.
//!
//! The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (path-pair derivation, the
//!   decision table). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (existence checks, move/copy,
//!   settings loading).
//!
//! [`process`] coordinates core logic with I/O to implement the single
//! toggle operation the CLI invokes once per filename.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod process;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
