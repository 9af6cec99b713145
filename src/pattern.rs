use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{pos, Cell, Grid, Pos, World};

pub const COMMENT_MARKER: char = '!';
pub const LIVE_MARKER: char = 'O';

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("could not read pattern file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn read_pattern(path: &Path, grid: &mut Grid) -> Result<(), PatternError> {
    let content = fs::read_to_string(path).map_err(|source| PatternError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_pattern(grid, content.lines());
    Ok(())
}

/// marks the cells of a plaintext `.cells` pattern alive, starting at the
/// top-left corner. only ever sets cells, so run it against a fresh grid.
pub fn load_pattern<'a>(grid: &mut Grid, lines: impl IntoIterator<Item = &'a str>) {
    let rows = lines
        .into_iter()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.starts_with(COMMENT_MARKER))
        .take(grid.height());

    for (y, line) in rows.enumerate() {
        for (x, char) in line.chars().take(grid.width()).enumerate() {
            if char == LIVE_MARKER {
                grid.set(pos!(x as i32, y as i32), Cell::active());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(height: usize, width: usize, text: &str) -> Grid {
        let mut grid = Grid::new(height, width);
        load_pattern(&mut grid, text.lines());
        grid
    }

    #[test]
    fn marks_live_cells() {
        let grid = loaded(3, 3, ".O.\n..O\nOOO\n");
        let actives: Vec<_> = grid.actives().collect();
        assert_eq!(
            actives,
            [pos!(1, 0), pos!(2, 1), pos!(0, 2), pos!(1, 2), pos!(2, 2)]
        );
    }

    #[test]
    fn comments_consume_no_row() {
        let grid = loaded(2, 2, "!Name: test\n!\nO.\n!inline\n.O\n");
        assert_eq!(grid.actives().collect::<Vec<_>>(), [pos!(0, 0), pos!(1, 1)]);
    }

    #[test]
    fn blank_line_skips_a_row() {
        let grid = loaded(3, 2, "O\n\nO\n");
        assert_eq!(grid.actives().collect::<Vec<_>>(), [pos!(0, 0), pos!(0, 2)]);
    }

    #[test]
    fn only_live_marker_counts() {
        let grid = loaded(1, 6, "O.x*oO");
        assert_eq!(grid.actives().collect::<Vec<_>>(), [pos!(0, 0), pos!(5, 0)]);
    }

    #[test]
    fn oversized_pattern_is_cropped() {
        let grid = loaded(2, 3, "OOOOOO\nOOOOOO\nOOOOOO\nOOOOOO\n");
        assert_eq!(grid.population(), 6);
        assert!(grid.get(pos!(2, 1)).is_active());
    }

    #[test]
    fn crlf_lines() {
        let grid = loaded(2, 2, "!comment\r\nO.\r\n\r\n");
        assert_eq!(grid.actives().collect::<Vec<_>>(), [pos!(0, 0)]);
    }

    #[test]
    fn keeps_previous_cells() {
        let mut grid = loaded(2, 2, "O.");
        load_pattern(&mut grid, ["", ".O"]);
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn missing_file() {
        let mut grid = Grid::new(2, 2);
        let err = read_pattern(Path::new("/nonexistent/pattern.cells"), &mut grid).unwrap_err();
        assert!(matches!(err, PatternError::Read { .. }));
        assert!(err.to_string().contains("pattern.cells"));
    }
}
