use crate::{Cell, Pos, World};

/// fixed-size generation, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// an all-dead grid. callers reject empty dimensions beforehand.
    pub fn new(height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0, "grid dimensions must be positive");
        assert!(
            i32::try_from(height).is_ok() && i32::try_from(width).is_ok(),
            "grid dimensions must fit an i32"
        );
        let len = height
            .checked_mul(width)
            .unwrap_or_else(|| panic!("{height}x{width} grid overflows"));
        let cells = vec![Cell::inactive(); len];
        Self {
            height,
            width,
            cells,
        }
    }

    pub fn contains(&self, Pos { x, y }: Pos) -> bool {
        (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y)
    }

    fn offset(&self, pos: Pos) -> usize {
        assert!(
            self.contains(pos),
            "{pos:?} outside of {}x{} grid",
            self.width,
            self.height
        );
        pos.y as usize * self.width + pos.x as usize
    }

    pub fn set(&mut self, pos: Pos, cell: Cell) {
        let offset = self.offset(pos);
        self.cells[offset] = cell;
    }

    #[cfg(test)]
    pub fn actives(&self) -> impl Iterator<Item = Pos> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.is_active()
                .then_some(crate::pos!((i % width) as i32, (i / width) as i32))
        })
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_active()).count()
    }
}

impl World for Grid {
    fn height(&self) -> usize {
        self.height
    }

    fn width(&self) -> usize {
        self.width
    }

    fn get(&self, pos: Pos) -> Cell {
        self.cells[self.offset(pos)]
    }
}
