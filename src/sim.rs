use std::{
    fmt, io,
    path::PathBuf,
    sync::mpsc::{self, RecvTimeoutError},
    time::{Duration, Instant},
};

use crate::{view::InputCmd, Boundary, Engine, Grid, World};

pub const MIN_DELAY: Duration = Duration::from_millis(10);
pub const MAX_DELAY: Duration = Duration::from_secs(10);

/// what advances the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// one generation every delay.
    Timed(Duration),
    /// one generation per keystroke.
    Step,
}

/// the info panel shown under the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub height: usize,
    pub width: usize,
    pub generation: u64,
    pub population: usize,
    pub mode: Mode,
    pub boundary: Boundary,
    pub pattern: PathBuf,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = format!("{}x{}", self.width, self.height);
        let trigger = match self.mode {
            Mode::Timed(delay) => format!("{} ms", delay.as_millis()),
            Mode::Step => "STEP".to_string(),
        };
        let clip = match self.boundary {
            Boundary::Clip => "*",
            Boundary::Wrap => "",
        };
        let population = format!("pop {}", self.population);
        writeln!(f, "{size:<10} {trigger:<10} {}", self.pattern.display())?;
        write!(f, "{:<10} {population:<10} {clip}", self.generation)
    }
}

enum Flow {
    Advance,
    Redraw,
    Exit,
}

pub struct Sim {
    engine: Engine,
    mode: Mode,
    pattern: PathBuf,
    paused: Option<Duration>,
    /// when the pending timed generation is due, kept across redraws.
    deadline: Option<Instant>,
}

impl Sim {
    pub fn new(engine: Engine, mode: Mode, pattern: PathBuf) -> Self {
        Self {
            engine,
            mode,
            pattern,
            paused: None,
            deadline: None,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[cfg(test)]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn status(&self) -> Status {
        let grid = self.engine.grid();
        Status {
            height: grid.height(),
            width: grid.width(),
            generation: self.engine.generation(),
            population: grid.population(),
            mode: self.mode,
            boundary: self.engine.boundary(),
            pattern: self.pattern.clone(),
        }
    }

    /// renders, waits for the trigger, advances; until the user exits or
    /// the input channel closes.
    pub fn run<F>(&mut self, inputs: &mpsc::Receiver<InputCmd>, mut render: F) -> io::Result<()>
    where
        F: FnMut(&Grid, &Status) -> io::Result<()>,
    {
        loop {
            render(self.engine.grid(), &self.status())?;
            match self.wait(inputs) {
                Flow::Advance => {
                    self.deadline = None;
                    self.engine.step();
                }
                Flow::Redraw => (),
                Flow::Exit => return Ok(()),
            }
        }
    }

    fn wait(&mut self, inputs: &mpsc::Receiver<InputCmd>) -> Flow {
        match self.mode {
            Mode::Step => match inputs.recv() {
                Ok(cmd) => self.handle(cmd),
                Err(_) => Flow::Exit,
            },
            Mode::Timed(delay) => {
                let deadline = *self.deadline.get_or_insert_with(|| Instant::now() + delay);
                loop {
                    let remaining = deadline.saturating_duration_since(Instant::now());
                    if remaining.is_zero() {
                        return Flow::Advance;
                    }
                    match inputs.recv_timeout(remaining) {
                        Ok(InputCmd::Step) => continue,
                        Ok(cmd) => return self.handle(cmd),
                        Err(RecvTimeoutError::Timeout) => return Flow::Advance,
                        Err(RecvTimeoutError::Disconnected) => return Flow::Exit,
                    }
                }
            }
        }
    }

    fn handle(&mut self, cmd: InputCmd) -> Flow {
        match (cmd, self.mode) {
            (InputCmd::Exit, _) => Flow::Exit,
            (InputCmd::Step, _) => Flow::Advance,
            (InputCmd::Pause, Mode::Timed(delay)) => {
                self.paused = Some(delay);
                self.deadline = None;
                self.mode = Mode::Step;
                Flow::Redraw
            }
            (InputCmd::Pause, Mode::Step) => {
                if let Some(delay) = self.paused.take() {
                    self.mode = Mode::Timed(delay);
                }
                Flow::Redraw
            }
            (InputCmd::Accelerate, Mode::Timed(delay)) => self.set_delay(delay / 2),
            (InputCmd::Decelerate, Mode::Timed(delay)) => self.set_delay(delay * 2),
            (InputCmd::Accelerate | InputCmd::Decelerate, Mode::Step) => Flow::Redraw,
        }
    }

    fn set_delay(&mut self, delay: Duration) -> Flow {
        let delay = delay.clamp(MIN_DELAY, MAX_DELAY);
        log::debug!("delay set to {delay:?}");
        self.deadline = self.deadline.map(|due| due.min(Instant::now() + delay));
        self.mode = Mode::Timed(delay);
        Flow::Redraw
    }
}
