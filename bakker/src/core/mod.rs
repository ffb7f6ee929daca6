//! Pure, deterministic toggle logic.
//!
//! Nothing in this module touches the filesystem; existence is passed in as
//! an observed value so every decision path is testable without fixtures.

pub mod decision;
pub mod paths;
pub mod types;
