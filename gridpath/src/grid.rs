use serde::{Deserialize, Serialize};

use crate::ParseError;

/// The kind of a single grid position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Wall,
}

/// A position on the grid, `x` being the column and `y` the row.
///
/// The derived ordering is lexicographic on `(x, y)`, which the search relies
/// on to break ties between queue entries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A rectangular grid of cells, stored row by row.
//
// Every row has exactly `width` cells, so the cells live in one flat vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid from a list of rows.
    ///
    /// Fails if there are no rows, if the rows are empty, or if they are not
    /// all of the same length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, ParseError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(ParseError::Empty);
        }
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(ParseError::NotRectangular {
                    row: row_idx,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Returns the cell at `coord`, or `None` if it is out of bounds.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if coord.x < self.width && coord.y < self.height {
            Some(self.cells[coord.y * self.width + coord.x])
        } else {
            None
        }
    }

    pub fn is_open(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Cell::Open)
    }

    /// Iterates over all coordinates and their cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (Coord::new(idx % width, idx / width), cell))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Grid::from_rows(vec![vec![Cell::Open; 3], vec![Cell::Open; 2]]).unwrap_err();
        assert_eq!(
            err,
            ParseError::NotRectangular {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert_eq!(Grid::from_rows(vec![]).unwrap_err(), ParseError::Empty);
        assert_eq!(Grid::from_rows(vec![vec![]]).unwrap_err(), ParseError::Empty);
    }

    #[test]
    fn lookup_is_row_major() {
        let grid = Grid::from_rows(vec![
            vec![Cell::Open, Cell::Wall, Cell::Open],
            vec![Cell::Wall, Cell::Open, Cell::Open],
        ])
        .unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(Coord::new(1, 0)), Some(Cell::Wall));
        assert_eq!(grid.get(Coord::new(0, 1)), Some(Cell::Wall));
        assert_eq!(grid.get(Coord::new(3, 0)), None);
        assert_eq!(grid.get(Coord::new(0, 2)), None);
        assert!(grid.contains(2, 1));
        assert!(!grid.contains(-1, 0));

        let walls: Vec<Coord> = grid
            .iter()
            .filter(|&(_, cell)| cell == Cell::Wall)
            .map(|(coord, _)| coord)
            .collect();
        assert_eq!(walls, vec![Coord::new(1, 0), Coord::new(0, 1)]);
    }
}
