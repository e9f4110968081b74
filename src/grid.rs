use crate::types::{Cell, GRID_SIZE};

/// Hand-authored mission terrain, row-major (`LAYOUT[y][x]`).
///
/// The sample sits at (0,0), the base at (4,0), and a handful of rocks force
/// the player to route around them. Column x=0 is kept clear so a program
/// can drive straight north from the start cell to the sample.
const LAYOUT: [[Cell; GRID_SIZE]; GRID_SIZE] = {
    use Cell::{Base, Empty, Gem, Rock};
    [
        [Gem, Empty, Empty, Empty, Base],
        [Empty, Rock, Empty, Empty, Empty],
        [Empty, Empty, Empty, Rock, Empty],
        [Empty, Rock, Rock, Empty, Empty],
        [Empty, Empty, Empty, Empty, Empty],
    ]
};

/// The 5x5 mission grid. Owns all terrain state for one run.
///
/// Coordinates are not validated here; callers are responsible for staying
/// in bounds (the simulation engine bounds-checks before every access).
pub struct Grid {
    tiles: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// A fresh grid with the fixed initial layout.
    pub fn new() -> Self {
        Self { tiles: LAYOUT }
    }

    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.tiles[y][x]
    }

    /// Clears a collected sample back to empty terrain.
    ///
    /// The only mutation the grid supports: terrain is immutable once placed,
    /// except that a Gem disappears when the rover picks it up.
    pub fn consume_gem(&mut self, x: usize, y: usize) {
        self.tiles[y][x] = Cell::Empty;
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
