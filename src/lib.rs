// ROVEX library root
// Exposes every module for use by the mission binary and integration tests

pub mod types;    // Core types (Cell, Direction, TurnAction, SensorKind)
pub mod grid;     // Mission grid and fixed terrain layout
pub mod rover;    // Rover state (position, facing, sample inventory)
pub mod engine;   // Simulation engine (advance, turn, sense)
pub mod program;  // Instruction tree and JSON exchange with the block editor
pub mod console;  // Append-only mission log sink
pub mod display;  // Terminal rendering of the mission state
pub mod executor; // Async tree-walking program executor

// Re-export the main types for convenient importing
pub use types::*;
pub use grid::Grid;
pub use rover::Rover;
pub use engine::{AdvanceEvent, DriveError, SimContext, advance, sense, turn};
pub use program::{Instruction, Program};
pub use console::MissionLog;
pub use display::{Headless, Renderer, TerminalDisplay};
pub use executor::{Executor, RunOutcome};
