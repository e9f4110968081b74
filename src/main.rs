// ROVEX mission binary
// Parses an authored program, drives the rover through it, and renders every
// step in the terminal

use std::time::Duration;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use rovex::executor::{Executor, RunOutcome};
use rovex::display::TerminalDisplay;
use rovex::program::Program;

/// Generated output of the block editor for the bundled mission: drive north
/// while the path is clear (collecting the sample on the way), turn east,
/// then drive while clear until the base.
const AUTHORED_PROGRAM: &str = r#"{
    "instructions": [
        { "while": { "condition": "path_clear", "body": ["move_forward"] } },
        "turn_right",
        { "while": { "condition": "path_clear", "body": ["move_forward"] } }
    ]
}"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // NOTE - Reject malformed programs before touching the terminal
    let program = match Program::from_json(AUTHORED_PROGRAM) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Syntax error: {e}");
            return Ok(());
        }
    };

    // NOTE - Enable raw terminal mode for UI
    enable_raw_mode()?;

    let mut executor = Executor::new(TerminalDisplay::new());
    let outcome = executor.run(&program).await;

    // NOTE - Hold the final frame before restoring the terminal
    tokio::time::sleep(Duration::from_secs(3)).await;
    disable_raw_mode()?;
    println!();

    match outcome? {
        RunOutcome::MissionComplete => println!("Mission success! Sample returned to base."),
        RunOutcome::ProgramEnded => println!("Program finished without completing the mission."),
        RunOutcome::Aborted(err) => println!("Run aborted: {err}."),
        RunOutcome::Stalled => println!("Run stopped: the program never terminated."),
    }

    Ok(())
}
