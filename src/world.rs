use crate::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    active: bool,
}

impl Cell {
    pub fn active() -> Self {
        Self { active: true }
    }

    pub fn inactive() -> Self {
        Self { active: false }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// read access to a bounded generation, as seen by the renderer.
pub trait World {
    fn height(&self) -> usize;
    fn width(&self) -> usize;
    fn get(&self, pos: Pos) -> Cell;
}

pub use grid::Grid;
mod grid;
