//! Side-effecting operations: existence checks, the move/copy primitives,
//! and settings loading.

pub mod config;
pub mod fs;
