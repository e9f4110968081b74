//! # Program Exchange Module
//!
//! This module defines the instruction structure the external block editor
//! hands to the executor. The editor generates a JSON document describing
//! the authored program; we deserialize it into an explicit instruction tree
//! and interpret that tree directly. Generated program text is never
//! evaluated as code.
//!
//! ## Exchange Format
//!
//! The program is serialized as JSON with externally tagged variants:
//!
//! ```json
//! {
//!   "instructions": [
//!     { "while": { "condition": "path_clear", "body": ["move_forward"] } },
//!     "turn_right",
//!     { "while": { "condition": "path_clear", "body": ["move_forward"] } }
//!   ]
//! }
//! ```
//!
//! Sensor queries (`path_clear`, `sample_ahead`) appear only as conditions of
//! the editor's own control-flow blocks; together with the four motion
//! instructions they form the entire contract the editor may invoke.

use serde::{Serialize, Deserialize};

use crate::types::SensorKind;

/// One authored instruction, either a motion command or one of the block
/// editor's control-flow constructs carrying a sensor condition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instruction {
    MoveForward,
    TurnLeft,
    TurnRight,
    TurnAround,
    If {
        condition: SensorKind,
        #[serde(default)]
        then: Vec<Instruction>,
        #[serde(default)]
        otherwise: Vec<Instruction>,
    },
    While {
        condition: SensorKind,
        #[serde(default)]
        body: Vec<Instruction>,
    },
    Repeat {
        times: u32,
        #[serde(default)]
        body: Vec<Instruction>,
    },
}

/// A complete authored program as delivered by the block editor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub instructions: Vec<Instruction>,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Parses the block editor's generated JSON.
    ///
    /// Any malformed document is a generic syntax failure; no partial
    /// recovery is attempted and no run starts.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
