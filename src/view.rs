use std::{
    io::{self, stdin, stdout, Stdout, Write},
    sync::mpsc,
    thread::{self, JoinHandle},
};

use termion::{
    event::Key,
    input::TermRead,
    raw::{IntoRawMode, RawTerminal},
    screen::AlternateScreen,
};

use crate::{pos, sim::Status, Pos, World};

pub use canvas::Canvas;
mod canvas;

pub const LIVE_GLYPH: char = 'O';
pub const DEAD_GLYPH: char = '.';

/// the grid starts one row and one column in from the corner.
const GRID_ORIGIN: Pos = Pos { x: 1, y: 1 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCmd {
    Exit,
    Step,
    Pause,
    Accelerate,
    Decelerate,
}

impl InputCmd {
    pub fn from_key(key: Key) -> Self {
        match key {
            Key::Char('q') | Key::Ctrl('c') | Key::Esc => InputCmd::Exit,
            Key::Char('+') | Key::Char('=') => InputCmd::Accelerate,
            Key::Char('-') => InputCmd::Decelerate,
            Key::Char('p') => InputCmd::Pause,
            _ => InputCmd::Step,
        }
    }
}

/// reads keystrokes until stdin closes or nobody listens anymore.
pub fn spawn_input(sender: mpsc::Sender<InputCmd>) -> JoinHandle<()> {
    thread::spawn(move || {
        for key in stdin().keys() {
            let command = match key {
                Ok(key) => InputCmd::from_key(key),
                Err(err) => {
                    log::error!("could not read key: {err}");
                    break;
                }
            };
            if sender.send(command).is_err() {
                break;
            }
        }
    })
}

/// the raw-mode alternate screen, restored when dropped.
pub struct View {
    out: AlternateScreen<RawTerminal<Stdout>>,
}

impl View {
    pub fn open() -> io::Result<Self> {
        let mut out = AlternateScreen::from(stdout().into_raw_mode()?);
        write!(out, "{}", termion::cursor::Hide)?;
        out.flush()?;
        Ok(Self { out })
    }

    pub fn display(&mut self, world: &impl World, status: &Status) -> io::Result<()> {
        let mut canvas = Canvas::from_screen()?;
        draw(&mut canvas, world, status);
        canvas.display(&mut self.out)
    }
}

impl Drop for View {
    fn drop(&mut self) {
        let _ = write!(self.out, "{}", termion::cursor::Show);
        let _ = self.out.flush();
    }
}

/// one glyph per cell with a blank column between cells, the status panel
/// one row under the grid.
pub fn draw(canvas: &mut Canvas, world: &impl World, status: &Status) {
    let (width, height) = (world.width() as i32, world.height() as i32);
    canvas.layer(|p| {
        let local = p - GRID_ORIGIN;
        let on_cell = local.x % 2 == 0
            && (0..width * 2).contains(&local.x)
            && (0..height).contains(&local.y);
        if !on_cell {
            return None;
        }
        let cell = world.get(pos!(local.x / 2, local.y));
        Some(if cell.is_active() {
            LIVE_GLYPH
        } else {
            DEAD_GLYPH
        })
    });
    canvas.text(GRID_ORIGIN + pos!(0, height + 1), &status.to_string());
}
