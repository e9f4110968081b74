use crate::types::Direction;

/// Start cell of every run, bottom-left corner of the grid.
pub const START_X: usize = 0;
pub const START_Y: usize = 4;

/// The player-controlled rover: position, facing, and sample inventory.
pub struct Rover {
    pub x: usize,
    pub y: usize,
    pub facing: Direction,
    pub has_sample: bool,
}

impl Rover {
    /// A fresh rover at the fixed start cell, facing north, hold empty.
    pub fn new() -> Self {
        Self {
            x: START_X,
            y: START_Y,
            facing: Direction::North,
            has_sample: false,
        }
    }

    /// Directional marker used by the terminal renderer.
    pub fn display_char(&self) -> &str {
        match self.facing {
            Direction::North => "▲",
            Direction::East => "▶",
            Direction::South => "▼",
            Direction::West => "◀",
        }
    }
}

impl Default for Rover {
    fn default() -> Self {
        Self::new()
    }
}
