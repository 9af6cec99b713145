use std::sync::mpsc;

use anyhow::Context;
use clap::Parser;
use log::{info, LevelFilter};

pub use utils::Pos;
mod utils;

pub use world::{Cell, Grid, World};
pub mod world;

pub use engine::{Boundary, Engine};
mod engine;

mod config;
mod pattern;

pub use sim::Sim;
mod sim;

pub use view::View;
mod view;

use config::{Args, Config};

pub fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let terminal = termion::terminal_size().context("could not query the terminal size")?;
    let config = Config::resolve(args, terminal)?;
    info!("starting with {config:?}");

    let mut grid = Grid::new(config.height, config.width);
    pattern::read_pattern(&config.path, &mut grid)?;
    info!("loaded {} live cells", grid.population());

    let engine = Engine::new(grid, config.boundary);
    let mut sim = Sim::new(engine, config.mode, config.path);

    let mut view = View::open().context("could not set up the terminal")?;
    let (sender, receiver) = mpsc::channel();
    let _input_handle = view::spawn_input(sender);
    sim.run(&receiver, |grid, status| view.display(grid, status))?;
    drop(view);

    info!("stopped at generation {}", sim.engine().generation());
    Ok(())
}
