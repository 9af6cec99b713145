use std::mem;

use crate::{Cell, Grid, Pos, World};

/// what lies beyond the edges of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// the grid is a torus, every cell has eight neighbors.
    Wrap,
    /// cells outside the grid do not exist.
    Clip,
}

/// double-buffered B3/S23 stepper over a fixed grid.
#[derive(Debug, Clone)]
pub struct Engine {
    current: Grid,
    scratch: Grid,
    boundary: Boundary,
    generation: u64,
}

impl Engine {
    pub fn new(grid: Grid, boundary: Boundary) -> Self {
        let scratch = Grid::new(grid.height(), grid.width());
        Self {
            current: grid,
            scratch,
            boundary,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn neighbor_count(&self, pos: Pos) -> usize {
        let grid = &self.current;
        Pos::neighborhood()
            .map(|offset| pos + offset)
            .filter_map(|p| match self.boundary {
                Boundary::Wrap => Some(p.wrap(grid.width(), grid.height())),
                Boundary::Clip => grid.contains(p).then_some(p),
            })
            .filter(|&p| grid.get(p).is_active())
            .count()
    }

    /// computes the next generation into the scratch buffer, then swaps.
    pub fn step(&mut self) {
        for y in 0..self.current.height() as i32 {
            for x in 0..self.current.width() as i32 {
                let pos = Pos { x, y };
                let is_active = self.current.get(pos).is_active();
                let next = next_state(is_active, self.neighbor_count(pos));
                self.scratch.set(pos, next);
            }
        }
        mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
        log::trace!(
            "generation {} population {}",
            self.generation,
            self.current.population()
        );
    }
}

fn next_state(is_active: bool, neighbor_count: usize) -> Cell {
    match (is_active, neighbor_count) {
        (false, 3) => Cell::active(),    // birth
        (true, 2 | 3) => Cell::active(), // survival
        _ => Cell::inactive(),           // dies or stays dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pattern::load_pattern, pos};

    fn engine(boundary: Boundary, height: usize, width: usize, pattern: &str) -> Engine {
        let mut grid = Grid::new(height, width);
        load_pattern(&mut grid, pattern.lines());
        Engine::new(grid, boundary)
    }

    fn actives(engine: &Engine) -> Vec<Pos> {
        engine.grid().actives().collect()
    }

    #[test]
    fn rule() {
        assert!(next_state(false, 3).is_active());
        assert!(next_state(true, 2).is_active());
        assert!(next_state(true, 3).is_active());
        for count in [0, 1, 4, 5, 8] {
            assert!(!next_state(true, count).is_active());
        }
        for count in [0, 2, 4, 8] {
            assert!(!next_state(false, count).is_active());
        }
    }

    #[test]
    fn empty_grid_stays_empty() {
        for boundary in [Boundary::Wrap, Boundary::Clip] {
            let mut engine = engine(boundary, 4, 5, "");
            engine.step();
            assert_eq!(engine.grid().population(), 0);
            assert_eq!(engine.generation(), 1);
        }
    }

    #[test]
    fn block_is_still() {
        let mut engine = engine(Boundary::Clip, 4, 4, "....\n.OO.\n.OO.\n....");
        let before = engine.grid().clone();
        engine.step();
        assert_eq!(engine.grid(), &before);
    }

    #[test]
    fn block_in_corner_is_still_when_clipped() {
        let mut engine = engine(Boundary::Clip, 4, 4, "OO\nOO");
        engine.step();
        assert_eq!(
            actives(&engine),
            [pos!(0, 0), pos!(1, 0), pos!(0, 1), pos!(1, 1)]
        );
    }

    #[test]
    fn blinker_oscillates() {
        let mut engine = engine(Boundary::Clip, 5, 5, "\n\n.OOO.");
        let horizontal = actives(&engine);
        assert_eq!(horizontal, [pos!(1, 2), pos!(2, 2), pos!(3, 2)]);

        engine.step();
        assert_eq!(actives(&engine), [pos!(2, 1), pos!(2, 2), pos!(2, 3)]);

        engine.step();
        assert_eq!(actives(&engine), horizontal);
    }

    #[test]
    fn wrap_counts_across_both_edges() {
        // every neighbor of the origin sits on a wrapped edge
        let mut grid = Grid::new(5, 6);
        for p in [
            pos!(5, 4),
            pos!(0, 4),
            pos!(1, 4),
            pos!(5, 0),
            pos!(1, 0),
            pos!(5, 1),
            pos!(0, 1),
            pos!(1, 1),
        ] {
            grid.set(p, Cell::active());
        }
        let engine = Engine::new(grid.clone(), Boundary::Wrap);
        assert_eq!(engine.neighbor_count(pos!(0, 0)), 8);

        let clipped = Engine::new(grid, Boundary::Clip);
        assert_eq!(clipped.neighbor_count(pos!(0, 0)), 3);
    }

    #[test]
    fn lone_origin_cell_is_seen_from_far_corner() {
        let mut grid = Grid::new(5, 6);
        grid.set(pos!(0, 0), Cell::active());
        let wrapped = Engine::new(grid.clone(), Boundary::Wrap);
        let clipped = Engine::new(grid, Boundary::Clip);
        for p in [pos!(5, 4), pos!(0, 4), pos!(1, 4), pos!(5, 0), pos!(5, 1)] {
            assert_eq!(wrapped.neighbor_count(p), 1, "{p:?}");
            assert_eq!(clipped.neighbor_count(p), 0, "{p:?}");
        }
        assert_eq!(wrapped.neighbor_count(pos!(3, 2)), 0);
    }

    #[test]
    fn blinker_wraps_around_the_edge() {
        let pattern = "\n\nOO..O";
        let mut wrapped = engine(Boundary::Wrap, 5, 5, pattern);
        wrapped.step();
        assert_eq!(actives(&wrapped), [pos!(0, 1), pos!(0, 2), pos!(0, 3)]);

        let mut clipped = engine(Boundary::Clip, 5, 5, pattern);
        clipped.step();
        assert_eq!(clipped.grid().population(), 0);
    }

    #[test]
    fn stepping_is_deterministic() {
        let glider = ".O\n..O\nOOO";
        let start = engine(Boundary::Wrap, 6, 7, glider);
        let twice = |mut engine: Engine| {
            engine.step();
            engine.step();
            engine.grid().clone()
        };
        let expected = twice(start.clone());
        for _ in 0..3 {
            assert_eq!(twice(start.clone()), expected);
        }
        assert_eq!(start.generation(), 0);
    }

    #[test]
    fn glider_returns_home_on_torus() {
        let glider = ".O\n..O\nOOO";
        let mut engine = engine(Boundary::Wrap, 6, 6, glider);
        let start = engine.grid().clone();
        // a glider moves one cell diagonally every four generations
        for _ in 0..24 {
            engine.step();
        }
        assert_eq!(engine.grid(), &start);
        assert_eq!(engine.generation(), 24);
    }
}
