use std::collections::HashSet;

use crate::{Cell, Coord, Grid};

/// Draws the grid as text, with `*` on every cell of the path.
///
/// Walls are `B` and all other cells `.`; every row ends with a newline.
pub fn solution_string(grid: &Grid, path: &[Coord]) -> String {
    let on_path: HashSet<Coord> = path.iter().copied().collect();
    let mut result = String::with_capacity((grid.width() + 1) * grid.height());
    for (coord, cell) in grid.iter() {
        result.push(match cell {
            Cell::Wall => 'B',
            Cell::Open if on_path.contains(&coord) => '*',
            Cell::Open => '.',
        });
        if coord.x + 1 == grid.width() {
            result.push('\n');
        }
    }
    result
}
