//! Shared value types for toggle processing.
//!
//! `Mode` and `Action` are closed sets: anything outside them is rejected at
//! parse time, before any filesystem access.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BakkerError;

/// Whether a transfer happens for a given existence state.
///
/// `toggle` always transfers, `add` only marks an unmarked file, `remove`
/// only unmarks a marked one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Toggle,
    Add,
    Remove,
}

/// How a transfer is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Rename the source to the destination.
    Move,
    /// Duplicate the source at the destination, leaving the source in place.
    Copy,
}

impl FromStr for Mode {
    type Err = BakkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toggle" => Ok(Mode::Toggle),
            "add" => Ok(Mode::Add),
            "remove" => Ok(Mode::Remove),
            _ => Err(BakkerError::InvalidArgument(format!(
                "unknown mode '{s}' (expected toggle, add or remove)"
            ))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let token = match self {
            Mode::Toggle => "toggle",
            Mode::Add => "add",
            Mode::Remove => "remove",
        };
        f.write_str(token)
    }
}

impl FromStr for Action {
    type Err = BakkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "move" => Ok(Action::Move),
            "copy" => Ok(Action::Copy),
            _ => Err(BakkerError::InvalidArgument(format!(
                "unknown action '{s}' (expected move or copy)"
            ))),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let token = match self {
            Action::Move => "move",
            Action::Copy => "copy",
        };
        f.write_str(token)
    }
}

/// The runtime-observed existence of both derived paths.
///
/// Exactly one side being true is the only valid precondition for a
/// transfer; the decision table turns the other two states into errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Existence {
    pub unmarked: bool,
    pub marked: bool,
}
