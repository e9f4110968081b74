//! # ROVEX Types Module
//!
//! This module defines all the core data types used throughout the ROVEX
//! (Rover Operations & Visual EXecution) mission simulation. These types
//! represent the fundamental building blocks of the sample-return puzzle.
//!
//! ## Key Components
//!
//! - **Cell**: Represents the terrain kinds on the mission grid
//! - **Direction**: The four cardinal headings the rover can face
//! - **TurnAction**: Rotation commands accepted by the simulation engine
//! - **SensorKind**: Non-mutating lookahead queries usable in programs
//! - **GRID_SIZE**: Global constant defining the dimensions of the grid
//!
//! All types are serializable so authored programs arriving from the block
//! editor can name them in JSON.

use serde::{Serialize, Deserialize};

/// NOTE - Enum for all possible cell types on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty, // NOTE - Traversable empty cell
    Rock,  // NOTE - Impassable terrain, driving into it crashes the run
    Gem,   // NOTE - The sample, becomes Empty once collected
    Base,  // NOTE - Mission goal, success requires arriving with the sample
}

/// NOTE - Enum for the rover's facing direction, encoded 0-3 clockwise
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North, // NOTE - Towards decreasing y
    East,  // NOTE - Towards increasing x
    South, // NOTE - Towards increasing y
    West,  // NOTE - Towards decreasing x
}

impl Direction {
    /// Clockwise encoding used for modular turning arithmetic.
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Direction::North,
            1 => Direction::East,
            2 => Direction::South,
            _ => Direction::West,
        }
    }

    /// Grid offset of one step in this direction.
    ///
    /// Single source of truth for "what lies ahead": both movement and
    /// sensing derive their target cell from it, so the two never disagree.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Facing after applying a turn action, modulo the four headings.
    pub fn turned(self, action: TurnAction) -> Self {
        let steps = match action {
            TurnAction::Left => 3,
            TurnAction::Right => 1,
            TurnAction::Around => 2,
        };
        Self::from_index(self.index() + steps)
    }
}

/// NOTE - Enum for rotation commands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnAction {
    Left,   // NOTE - Rotate -90 degrees
    Right,  // NOTE - Rotate +90 degrees
    Around, // NOTE - Rotate 180 degrees
}

/// NOTE - Enum for sensor queries evaluated against the cell ahead
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    PathClear,   // NOTE - True unless the cell ahead is Rock or out of bounds
    SampleAhead, // NOTE - True only if the cell ahead is Gem
}

/// NOTE - Global constant for grid size (square grid)
pub const GRID_SIZE: usize = 5;
