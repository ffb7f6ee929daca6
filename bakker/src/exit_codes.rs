//! Stable exit codes for the bakker CLI.

/// All files processed.
pub const OK: i32 = 0;
/// At least one file failed to process; the rest were still attempted.
pub const TOGGLE_FAILED: i32 = 1;
/// Invalid usage or settings; nothing was processed. Matches the code clap
/// itself uses for usage errors.
pub const INVALID: i32 = 2;
