//! Simulation engine: movement, turning, and sensor checks over one
//! grid/rover pair. All state lives in an explicit [`SimContext`] owned by
//! the caller; there are no ambient globals.

use thiserror::Error;

use crate::grid::Grid;
use crate::rover::Rover;
use crate::types::{Cell, GRID_SIZE, SensorKind, TurnAction};

/// Mutable simulation state for a single run.
///
/// Rebuilt from scratch at the start of every run so no mutation from a
/// previous attempt can leak into the next one.
pub struct SimContext {
    pub grid: Grid,
    pub rover: Rover,
}

impl SimContext {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            rover: Rover::new(),
        }
    }
}

impl Default for SimContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fatal-to-the-run movement failures. The rover does not move when these
/// are raised; the executor abandons the rest of the program in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DriveError {
    #[error("wall boundary ahead")]
    OutOfBounds,
    #[error("rock in the path")]
    Blocked,
}

/// What a successful forward step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceEvent {
    /// Plain move onto empty terrain.
    Moved,
    /// Moved onto the sample and picked it up; the cell is now empty.
    SampleCollected,
    /// Arrived at base carrying the sample. Mission accomplished.
    MissionComplete,
    /// Arrived at base empty-handed. Informational, the run continues.
    AtBaseWithoutSample,
}

/// The cell one step ahead of the rover, or `None` at the grid edge.
///
/// Shared by [`advance`] and [`sense`] so acting and sensing always agree
/// about what lies ahead.
pub fn target_position(rover: &Rover) -> Option<(usize, usize)> {
    let (dx, dy) = rover.facing.offset();
    let nx = rover.x as isize + dx;
    let ny = rover.y as isize + dy;

    if nx < 0 || nx >= GRID_SIZE as isize || ny < 0 || ny >= GRID_SIZE as isize {
        None
    } else {
        Some((nx as usize, ny as usize))
    }
}

/// Drives the rover one cell forward in its current facing.
///
/// Fails with [`DriveError::OutOfBounds`] at the grid edge and
/// [`DriveError::Blocked`] against a rock, leaving the rover where it was.
/// Collecting the sample and reporting base arrival happen as side effects
/// of the move.
pub fn advance(ctx: &mut SimContext) -> Result<AdvanceEvent, DriveError> {
    let (nx, ny) = target_position(&ctx.rover).ok_or(DriveError::OutOfBounds)?;

    if ctx.grid.cell(nx, ny) == Cell::Rock {
        return Err(DriveError::Blocked);
    }

    ctx.rover.x = nx;
    ctx.rover.y = ny;

    match ctx.grid.cell(nx, ny) {
        Cell::Gem => {
            ctx.rover.has_sample = true;
            ctx.grid.consume_gem(nx, ny);
            Ok(AdvanceEvent::SampleCollected)
        }
        Cell::Base if ctx.rover.has_sample => Ok(AdvanceEvent::MissionComplete),
        Cell::Base => Ok(AdvanceEvent::AtBaseWithoutSample),
        _ => Ok(AdvanceEvent::Moved),
    }
}

/// Rotates the rover in place. Never fails.
pub fn turn(ctx: &mut SimContext, action: TurnAction) {
    ctx.rover.facing = ctx.rover.facing.turned(action);
}

/// Evaluates a sensor query against the cell ahead without mutating state.
///
/// An out-of-bounds target answers `false` for every query rather than
/// raising an error.
pub fn sense(ctx: &SimContext, kind: SensorKind) -> bool {
    match target_position(&ctx.rover) {
        None => false,
        Some((x, y)) => match kind {
            SensorKind::PathClear => ctx.grid.cell(x, y) != Cell::Rock,
            SensorKind::SampleAhead => ctx.grid.cell(x, y) == Cell::Gem,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn context_at(x: usize, y: usize, facing: Direction) -> SimContext {
        let mut ctx = SimContext::new();
        ctx.rover.x = x;
        ctx.rover.y = y;
        ctx.rover.facing = facing;
        ctx
    }

    #[test]
    fn each_facing_targets_the_correct_neighbour() {
        let cases = [
            (Direction::North, (2, 1)),
            (Direction::East, (3, 2)),
            (Direction::South, (2, 3)),
            (Direction::West, (1, 2)),
        ];
        for (facing, expected) in cases {
            let ctx = context_at(2, 2, facing);
            assert_eq!(target_position(&ctx.rover), Some(expected), "facing {facing:?}");
        }
    }

    #[test]
    fn advance_moves_onto_the_targeted_cell() {
        let mut ctx = context_at(2, 2, Direction::North);
        assert_eq!(advance(&mut ctx), Ok(AdvanceEvent::Moved));
        assert_eq!((ctx.rover.x, ctx.rover.y), (2, 1));
    }

    #[test]
    fn advance_off_the_edge_fails_and_stays_put() {
        let mut ctx = context_at(0, 4, Direction::West);
        assert_eq!(advance(&mut ctx), Err(DriveError::OutOfBounds));
        assert_eq!((ctx.rover.x, ctx.rover.y), (0, 4));
    }

    #[test]
    fn advance_into_rock_fails_and_stays_put() {
        // (1,3) is a rock; approach from (0,3) facing east.
        let mut ctx = context_at(0, 3, Direction::East);
        assert_eq!(advance(&mut ctx), Err(DriveError::Blocked));
        assert_eq!((ctx.rover.x, ctx.rover.y), (0, 3));
    }

    #[test]
    fn collecting_the_sample_clears_the_cell() {
        // Approach the gem at (0,0) from (0,1).
        let mut ctx = context_at(0, 1, Direction::North);
        assert!(sense(&ctx, SensorKind::SampleAhead));

        assert_eq!(advance(&mut ctx), Ok(AdvanceEvent::SampleCollected));
        assert!(ctx.rover.has_sample);
        assert_eq!(ctx.grid.cell(0, 0), Cell::Empty);

        // Sensing the same coordinate again reports no sample.
        let mut observer = context_at(0, 1, Direction::North);
        observer.grid.consume_gem(0, 0);
        assert!(!sense(&observer, SensorKind::SampleAhead));
    }

    #[test]
    fn base_arrival_depends_on_the_sample_flag() {
        // Approach the base at (4,0) from (3,0).
        let mut empty_handed = context_at(3, 0, Direction::East);
        assert_eq!(advance(&mut empty_handed), Ok(AdvanceEvent::AtBaseWithoutSample));

        let mut carrying = context_at(3, 0, Direction::East);
        carrying.rover.has_sample = true;
        assert_eq!(advance(&mut carrying), Ok(AdvanceEvent::MissionComplete));
    }

    #[test]
    fn sensors_answer_false_at_the_grid_edge() {
        let ctx = context_at(0, 4, Direction::South);
        assert!(!sense(&ctx, SensorKind::PathClear));
        assert!(!sense(&ctx, SensorKind::SampleAhead));
    }

    #[test]
    fn path_clear_distinguishes_rock_from_terrain() {
        let blocked = context_at(0, 3, Direction::East);
        assert!(!sense(&blocked, SensorKind::PathClear));

        let open = context_at(0, 4, Direction::North);
        assert!(sense(&open, SensorKind::PathClear));

        // Base counts as passable terrain for the path sensor.
        let before_base = context_at(3, 0, Direction::East);
        assert!(sense(&before_base, SensorKind::PathClear));
    }
}
