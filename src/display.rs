use std::io::{Result, Write, stdout};

use crossterm::{
    ExecutableCommand,
    cursor::MoveTo,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::console::MissionLog;
use crate::engine::SimContext;
use crate::types::{Cell, Direction, GRID_SIZE};

/// Fixed Y-coordinate positions for the terminal user interface layout.
/// Each UI section is anchored to a row so full redraws always land in the
/// same place.

/// Header section at the top of the screen
const HEADER_Y: u16 = 0;
/// Starting Y position for the mission grid display
const GRID_START_Y: u16 = 2;
/// Left margin for the grid display (X offset)
const GRID_LEFT: u16 = 2;
/// Rover status line (position, facing, sample flag)
const STATUS_Y: u16 = GRID_START_Y + GRID_SIZE as u16 + 1;
/// Mission log section (recent narration)
const LOGS_Y: u16 = STATUS_Y + 2;
/// Number of log lines kept visible in the panel
const LOG_PANEL_LINES: usize = 8;
/// Legend section at the bottom (symbol explanations)
const LEGEND_Y: u16 = LOGS_Y + LOG_PANEL_LINES as u16 + 1;

/// Read-only projection of simulation state onto some output surface.
///
/// The executor redraws through this seam after every mutating step; tests
/// plug in [`Headless`] to run without a terminal.
pub trait Renderer {
    fn draw(&mut self, ctx: &SimContext, log: &MissionLog) -> Result<()>;
}

/// Renderer that draws nothing. Used by tests and scripted runs.
pub struct Headless;

impl Renderer for Headless {
    fn draw(&mut self, _ctx: &SimContext, _log: &MissionLog) -> Result<()> {
        Ok(())
    }
}

/// Full-redraw terminal renderer. Holds no state between frames; every draw
/// projects the current grid, rover, and log window from scratch.
pub struct TerminalDisplay;

impl TerminalDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TerminalDisplay {
    fn draw(&mut self, ctx: &SimContext, log: &MissionLog) -> Result<()> {
        let mut stdout = stdout();

        stdout.execute(Clear(ClearType::All))?;

        // NOTE - Header
        stdout.execute(MoveTo(0, HEADER_Y))?;
        stdout.execute(SetForegroundColor(Color::Cyan))?;
        stdout.execute(Print("ROVEX - Sample Return Mission"))?;
        stdout.execute(ResetColor)?;

        // NOTE - Mission grid, rover marker takes precedence over terrain
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                stdout.execute(MoveTo(GRID_LEFT + x as u16 * 2, GRID_START_Y + y as u16))?;

                if x == ctx.rover.x && y == ctx.rover.y {
                    stdout.execute(SetForegroundColor(Color::Red))?;
                    stdout.execute(Print(format!("{} ", ctx.rover.display_char())))?;
                } else {
                    match ctx.grid.cell(x, y) {
                        Cell::Empty => {
                            stdout.execute(SetForegroundColor(Color::White))?;
                            stdout.execute(Print("· "))?;
                        }
                        Cell::Rock => {
                            stdout.execute(SetForegroundColor(Color::DarkGrey))?;
                            stdout.execute(Print("██"))?;
                        }
                        Cell::Gem => {
                            stdout.execute(SetForegroundColor(Color::Magenta))?;
                            stdout.execute(Print("♦ "))?;
                        }
                        Cell::Base => {
                            stdout.execute(SetForegroundColor(Color::Yellow))?;
                            stdout.execute(Print("[]"))?;
                        }
                    }
                }
                stdout.execute(ResetColor)?;
            }
        }

        // NOTE - Rover status line
        let facing = match ctx.rover.facing {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        };
        let hold = if ctx.rover.has_sample { "sample aboard" } else { "hold empty" };
        stdout.execute(MoveTo(0, STATUS_Y))?;
        stdout.execute(SetForegroundColor(Color::Green))?;
        stdout.execute(Print(format!(
            "Rover ({}, {}) facing {} | {}",
            ctx.rover.x, ctx.rover.y, facing, hold
        )))?;
        stdout.execute(ResetColor)?;

        // NOTE - Rolling mission log panel
        stdout.execute(MoveTo(0, LOGS_Y - 1))?;
        stdout.execute(Print("Mission log:"))?;
        for (i, line) in log.recent(LOG_PANEL_LINES).iter().enumerate() {
            stdout.execute(MoveTo(0, LOGS_Y + i as u16))?;
            stdout.execute(SetForegroundColor(Color::DarkGrey))?;
            stdout.execute(Print(format!("> {line}")))?;
            stdout.execute(ResetColor)?;
        }

        // NOTE - Legend
        stdout.execute(MoveTo(0, LEGEND_Y))?;
        stdout.execute(SetForegroundColor(Color::DarkGrey))?;
        stdout.execute(Print("Legend: [] Base | ██ Rock | ♦ Sample | · Empty | ▲▶▼◀ Rover"))?;
        stdout.execute(ResetColor)?;

        stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}
