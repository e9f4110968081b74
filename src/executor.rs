//! Program executor: a tree-walking interpreter that drives the simulation
//! engine one instruction at a time. Each motion instruction suspends on a
//! typed delay before acting, so the terminal animation paces itself without
//! any extra coordination.

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::time::Duration;

use tokio::time::sleep;

use crate::console::MissionLog;
use crate::display::Renderer;
use crate::engine::{self, AdvanceEvent, DriveError, SimContext};
use crate::program::{Instruction, Program};
use crate::types::TurnAction;

/// Travel time simulated before each forward step.
pub const MOVE_DELAY: Duration = Duration::from_millis(400);
/// Travel time simulated before each turn.
pub const TURN_DELAY: Duration = Duration::from_millis(200);

/// Ceiling on evaluated steps per run. Authored `while` loops can spin
/// forever (an empty body with a true condition never progresses), so the
/// executor stops runaway programs instead of hanging the mission.
pub const STEP_CEILING: usize = 10_000;

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The rover reached base carrying the sample.
    MissionComplete,
    /// The instruction list ran out without completing the mission.
    ProgramEnded,
    /// A fatal drive failure abandoned the rest of the program in place.
    Aborted(DriveError),
    /// The step ceiling cut off a runaway program.
    Stalled,
}

/// Signal threaded up through nested instruction blocks.
enum Flow {
    Continue,
    Abort(DriveError),
    Stall,
}

/// Owns the simulation context, the log sink, and the renderer for the
/// lifetime of the session. Each run reconstructs the context from scratch;
/// nothing survives from one run to the next.
pub struct Executor<R: Renderer> {
    ctx: SimContext,
    log: MissionLog,
    renderer: R,
    steps: usize,
    mission_complete: bool,
}

impl<R: Renderer> Executor<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            ctx: SimContext::new(),
            log: MissionLog::new(),
            renderer,
            steps: 0,
            mission_complete: false,
        }
    }

    pub fn context(&self) -> &SimContext {
        &self.ctx
    }

    pub fn log(&self) -> &MissionLog {
        &self.log
    }

    /// Runs one authored program to completion or first fatal failure.
    ///
    /// Errors bubble up only from the renderer; simulation failures are part
    /// of the returned [`RunOutcome`].
    pub async fn run(&mut self, program: &Program) -> io::Result<RunOutcome> {
        // Fresh state every run, discarding all prior mutations.
        self.ctx = SimContext::new();
        self.log = MissionLog::new();
        self.steps = 0;
        self.mission_complete = false;

        self.log.log("System ready. Executing mission program...");
        self.renderer.draw(&self.ctx, &self.log)?;

        let flow = self.run_block(&program.instructions).await?;

        let outcome = match flow {
            Flow::Abort(err) => RunOutcome::Aborted(err),
            Flow::Stall => RunOutcome::Stalled,
            Flow::Continue if self.mission_complete => RunOutcome::MissionComplete,
            Flow::Continue => {
                self.log.log("Program finished. Mission incomplete.");
                RunOutcome::ProgramEnded
            }
        };
        self.renderer.draw(&self.ctx, &self.log)?;
        Ok(outcome)
    }

    /// Interprets one block of instructions sequentially. Boxed because the
    /// authored control flow nests and async recursion needs a pinned future.
    fn run_block<'a>(
        &'a mut self,
        block: &'a [Instruction],
    ) -> Pin<Box<dyn Future<Output = io::Result<Flow>> + 'a>> {
        Box::pin(async move {
            for instruction in block {
                match instruction {
                    Instruction::MoveForward => {
                        if !self.consume_step() {
                            return self.stall();
                        }
                        sleep(MOVE_DELAY).await;
                        match engine::advance(&mut self.ctx) {
                            Ok(event) => self.narrate_advance(event),
                            Err(err) => {
                                self.narrate_failure(err);
                                self.renderer.draw(&self.ctx, &self.log)?;
                                return Ok(Flow::Abort(err));
                            }
                        }
                        self.renderer.draw(&self.ctx, &self.log)?;
                    }
                    Instruction::TurnLeft => self.perform_turn(TurnAction::Left).await?,
                    Instruction::TurnRight => self.perform_turn(TurnAction::Right).await?,
                    Instruction::TurnAround => self.perform_turn(TurnAction::Around).await?,
                    Instruction::If { condition, then, otherwise } => {
                        let branch = if engine::sense(&self.ctx, *condition) {
                            then
                        } else {
                            otherwise
                        };
                        match self.run_block(branch).await? {
                            Flow::Continue => {}
                            other => return Ok(other),
                        }
                    }
                    Instruction::While { condition, body } => {
                        loop {
                            if !self.consume_step() {
                                return self.stall();
                            }
                            if !engine::sense(&self.ctx, *condition) {
                                break;
                            }
                            match self.run_block(body).await? {
                                Flow::Continue => {}
                                other => return Ok(other),
                            }
                        }
                    }
                    Instruction::Repeat { times, body } => {
                        for _ in 0..*times {
                            match self.run_block(body).await? {
                                Flow::Continue => {}
                                other => return Ok(other),
                            }
                        }
                    }
                }
            }
            Ok(Flow::Continue)
        })
    }

    async fn perform_turn(&mut self, action: TurnAction) -> io::Result<()> {
        // Turns never fail, but they still pace the animation and count
        // against the step ceiling like every other evaluated step.
        self.consume_step();
        sleep(TURN_DELAY).await;
        engine::turn(&mut self.ctx, action);
        self.renderer.draw(&self.ctx, &self.log)
    }

    fn consume_step(&mut self) -> bool {
        self.steps += 1;
        self.steps <= STEP_CEILING
    }

    fn stall(&mut self) -> io::Result<Flow> {
        self.log.log("Error: program stalled, execution stopped.");
        self.renderer.draw(&self.ctx, &self.log)?;
        Ok(Flow::Stall)
    }

    fn narrate_advance(&mut self, event: AdvanceEvent) {
        match event {
            AdvanceEvent::Moved => {}
            AdvanceEvent::SampleCollected => self.log.log("Sample collected!"),
            AdvanceEvent::MissionComplete => {
                self.mission_complete = true;
                self.log.log("SUCCESS: Mission accomplished!");
            }
            AdvanceEvent::AtBaseWithoutSample => {
                self.log.log("Info: at base, sample still missing.");
            }
        }
    }

    fn narrate_failure(&mut self, err: DriveError) {
        match err {
            DriveError::OutOfBounds => self.log.log("Error: wall boundary!"),
            DriveError::Blocked => self.log.log("CRASH: hit a rock!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Headless;
    use crate::types::{Cell, Direction, SensorKind};

    fn mov() -> Instruction {
        Instruction::MoveForward
    }

    #[tokio::test(start_paused = true)]
    async fn blocked_move_aborts_and_leaves_the_rover_in_place() {
        // North once, then east into the rock at (1,3).
        let program = Program::new(vec![mov(), Instruction::TurnRight, mov(), mov()]);
        let mut executor = Executor::new(Headless);

        let outcome = executor.run(&program).await.unwrap();

        assert_eq!(outcome, RunOutcome::Aborted(DriveError::Blocked));
        let rover = &executor.context().rover;
        assert_eq!((rover.x, rover.y), (0, 3));
        assert!(executor.log().contains("CRASH"));
    }

    #[tokio::test(start_paused = true)]
    async fn driving_off_the_edge_aborts_the_run() {
        let program = Program::new(vec![Instruction::TurnAround, mov()]);
        let mut executor = Executor::new(Headless);

        let outcome = executor.run(&program).await.unwrap();

        assert_eq!(outcome, RunOutcome::Aborted(DriveError::OutOfBounds));
        let rover = &executor.context().rover;
        assert_eq!((rover.x, rover.y), (0, 4));
        assert_eq!(rover.facing, Direction::South);
        assert!(executor.log().contains("wall boundary"));
    }

    #[tokio::test(start_paused = true)]
    async fn base_without_sample_is_informational_and_the_run_continues() {
        // Straight to base along the east edge: right, 4 east, left, 4 north.
        let program = Program::new(vec![
            Instruction::TurnRight,
            Instruction::Repeat { times: 4, body: vec![mov()] },
            Instruction::TurnLeft,
            Instruction::Repeat { times: 4, body: vec![mov()] },
            Instruction::TurnLeft,
        ]);
        let mut executor = Executor::new(Headless);

        let outcome = executor.run(&program).await.unwrap();

        // The run kept going after the informational base arrival.
        assert_eq!(outcome, RunOutcome::ProgramEnded);
        assert!(executor.log().contains("sample still missing"));
        let rover = &executor.context().rover;
        assert_eq!((rover.x, rover.y), (4, 0));
        assert_eq!(rover.facing, Direction::West);
    }

    #[tokio::test(start_paused = true)]
    async fn sensor_driven_program_completes_the_mission() {
        // North while clear (collects the sample at (0,0)), then east while
        // clear (arrives at base). Exercises the while/sensor contract.
        let program = Program::new(vec![
            Instruction::While {
                condition: SensorKind::PathClear,
                body: vec![mov()],
            },
            Instruction::TurnRight,
            Instruction::While {
                condition: SensorKind::PathClear,
                body: vec![mov()],
            },
        ]);
        let mut executor = Executor::new(Headless);

        let outcome = executor.run(&program).await.unwrap();

        assert_eq!(outcome, RunOutcome::MissionComplete);
        let ctx = executor.context();
        assert!(ctx.rover.has_sample);
        assert_eq!((ctx.rover.x, ctx.rover.y), (4, 0));
        assert_eq!(ctx.grid.cell(0, 0), Cell::Empty);
        assert!(executor.log().contains("Sample collected"));
        assert!(executor.log().contains("Mission accomplished"));
    }

    #[tokio::test(start_paused = true)]
    async fn conditional_branches_follow_the_sensors() {
        // Sample is not ahead at the start, so the otherwise branch turns.
        let program = Program::new(vec![Instruction::If {
            condition: SensorKind::SampleAhead,
            then: vec![mov()],
            otherwise: vec![Instruction::TurnLeft],
        }]);
        let mut executor = Executor::new(Headless);

        executor.run(&program).await.unwrap();

        let rover = &executor.context().rover;
        assert_eq!((rover.x, rover.y), (0, 4));
        assert_eq!(rover.facing, Direction::West);
    }

    #[tokio::test(start_paused = true)]
    async fn runaway_loops_hit_the_step_ceiling() {
        // True condition, empty body: never progresses.
        let program = Program::new(vec![Instruction::While {
            condition: SensorKind::PathClear,
            body: Vec::new(),
        }]);
        let mut executor = Executor::new(Headless);

        let outcome = executor.run(&program).await.unwrap();

        assert_eq!(outcome, RunOutcome::Stalled);
        assert!(executor.log().contains("stalled"));
    }

    #[tokio::test(start_paused = true)]
    async fn each_run_reconstructs_the_grid_and_rover() {
        // First run collects the sample, second run must find it again.
        let collect = Program::new(vec![Instruction::Repeat { times: 4, body: vec![mov()] }]);
        let mut executor = Executor::new(Headless);

        executor.run(&collect).await.unwrap();
        assert!(executor.context().rover.has_sample);
        assert_eq!(executor.context().grid.cell(0, 0), Cell::Empty);

        let idle = Program::new(vec![Instruction::TurnLeft]);
        executor.run(&idle).await.unwrap();
        assert!(!executor.context().rover.has_sample);
        assert_eq!(executor.context().grid.cell(0, 0), Cell::Gem);
        assert_eq!((executor.context().rover.x, executor.context().rover.y), (0, 4));
    }
}
