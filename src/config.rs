use std::{path::PathBuf, time::Duration};

use clap::Parser;
use thiserror::Error;

use crate::{
    sim::{Mode, MAX_DELAY, MIN_DELAY},
    Boundary,
};

/// terminal rows taken by the border and the two status lines.
const RESERVED_ROWS: u16 = 5;
/// terminal columns taken by the border.
const RESERVED_COLS: u16 = 2;
/// longest side a grid may have, cells are addressed with `i32` and drawn
/// two columns wide.
const MAX_SIDE: usize = i32::MAX as usize / 2;

/// Run conway's game of life in the terminal.
#[derive(Debug, Parser)]
#[command(name = "lifeterm", version, about)]
pub struct Args {
    /// Plaintext `.cells` pattern to start from.
    pub path: PathBuf,

    /// Treat cells past the edges as dead instead of wrapping around.
    #[arg(long)]
    pub clip: bool,

    /// Advance every DELAY milliseconds instead of once per keystroke.
    #[arg(short, long, value_name = "DELAY")]
    pub delay: Option<u64>,

    /// Grid rows, defaults to what fits the terminal.
    #[arg(long)]
    pub height: Option<usize>,

    /// Grid columns, defaults to what fits the terminal.
    #[arg(long)]
    pub width: Option<usize>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid would be {height}x{width}, both dimensions must be positive")]
    EmptyGrid { height: usize, width: usize },
    #[error("grid would be {height}x{width}, neither side may exceed {} cells", MAX_SIDE)]
    GridTooLarge { height: usize, width: usize },
    #[error(
        "delay of {ms} ms is outside of {}..={} ms",
        MIN_DELAY.as_millis(),
        MAX_DELAY.as_millis()
    )]
    DelayOutOfRange { ms: u64 },
}

/// settings of one run, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub height: usize,
    pub width: usize,
    pub boundary: Boundary,
    pub mode: Mode,
}

impl Config {
    /// the largest grid the terminal can draw, two columns per cell.
    pub fn fitting(cols: u16, rows: u16) -> (usize, usize) {
        let height = rows.saturating_sub(RESERVED_ROWS) as usize;
        let width = (cols.saturating_sub(RESERVED_COLS) / 2) as usize;
        (height, width)
    }

    /// `terminal` is the `(columns, rows)` size of the screen.
    pub fn resolve(args: Args, terminal: (u16, u16)) -> Result<Self, ConfigError> {
        let (cols, rows) = terminal;
        let (fit_height, fit_width) = Self::fitting(cols, rows);
        let height = args.height.unwrap_or(fit_height);
        let width = args.width.unwrap_or(fit_width);
        if height == 0 || width == 0 {
            return Err(ConfigError::EmptyGrid { height, width });
        }
        if height > MAX_SIDE || width > MAX_SIDE || height.checked_mul(width).is_none() {
            return Err(ConfigError::GridTooLarge { height, width });
        }
        if height > fit_height || width > fit_width {
            log::warn!(
                "{height}x{width} grid exceeds the {fit_height}x{fit_width} that fits the terminal, it will be cropped"
            );
        }

        let mode = match args.delay.map(|ms| (ms, Duration::from_millis(ms))) {
            Some((_, delay)) if (MIN_DELAY..=MAX_DELAY).contains(&delay) => Mode::Timed(delay),
            Some((ms, _)) => return Err(ConfigError::DelayOutOfRange { ms }),
            None => Mode::Step,
        };
        let boundary = if args.clip {
            Boundary::Clip
        } else {
            Boundary::Wrap
        };

        Ok(Self {
            path: args.path,
            height,
            width,
            boundary,
            mode,
        })
    }
}
