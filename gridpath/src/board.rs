use tracing::debug;

use crate::{Cell, Coord, Grid, ParseError, PathfindingError};

pub const OPEN_CHAR: char = '.';
pub const WALL_CHAR: char = 'B';
pub const START_CHAR: char = 'S';
pub const GOAL_CHAR: char = 'X';

/// A parsed board: the grid plus the start and goal positions.
///
/// Both `start` and `goal` are always open cells of `grid`, and distinct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub grid: Grid,
    pub start: Coord,
    pub goal: Coord,
}

impl Board {
    /// Parses a board where rows are separated by line breaks.
    ///
    /// `.` is an open cell, `B` a wall and `S` the start. Short rows are
    /// padded with open cells up to the length of the longest row.
    ///
    /// The text must contain exactly one `S` and exactly one `X`. Any
    /// character besides `.`, `B` and `S` is taken as the goal, and if there
    /// are several such characters, the first one in row-major order wins.
    /// Use [`Self::parse_strict()`] to only accept `X` as the goal.
    ///
    /// Whitespace is not special: a trailing space in a row counts as a goal
    /// candidate like any other stray character, so callers taking pasted
    /// text should trim the rows first.
    pub fn parse(text: &str) -> Result<Self, PathfindingError> {
        Self::parse_impl(text, false)
    }

    /// Like [`Self::parse()`], but rejects every character other than
    /// `.`, `B`, `S` and `X`.
    pub fn parse_strict(text: &str) -> Result<Self, PathfindingError> {
        Self::parse_impl(text, true)
    }

    fn parse_impl(text: &str, strict: bool) -> Result<Self, PathfindingError> {
        let mut char_rows: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();

        let max_len = char_rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut char_rows {
            row.resize(max_len, OPEN_CHAR);
        }

        let starts = text.chars().filter(|&c| c == START_CHAR).count();
        let goals = text.chars().filter(|&c| c == GOAL_CHAR).count();
        if starts != 1 || goals != 1 {
            return Err(PathfindingError::MarkerCount { starts, goals });
        }

        let mut start = None;
        let mut goal = None;
        let mut rows = Vec::with_capacity(char_rows.len());
        for (y, char_row) in char_rows.into_iter().enumerate() {
            let mut row = Vec::with_capacity(char_row.len());
            for (x, character) in char_row.into_iter().enumerate() {
                let cell = match character {
                    OPEN_CHAR => Cell::Open,
                    WALL_CHAR => Cell::Wall,
                    START_CHAR => {
                        start = Some(Coord::new(x, y));
                        Cell::Open
                    }
                    other => {
                        if strict && other != GOAL_CHAR {
                            return Err(ParseError::UnexpectedCharacter {
                                character: other,
                                x,
                                y,
                            }
                            .into());
                        }
                        if goal.is_none() {
                            goal = Some(Coord::new(x, y));
                        }
                        Cell::Open
                    }
                };
                row.push(cell);
            }
            rows.push(row);
        }
        let grid = Grid::from_rows(rows)?;

        let (Some(start), Some(goal)) = (start, goal) else {
            return Err(PathfindingError::MarkerCount { starts, goals });
        };
        debug!(width = grid.width(), height = grid.height(), %start, %goal, "Parsed board");

        Ok(Self { grid, start, goal })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (coord, cell) in self.grid.iter() {
            let c = if coord == self.start {
                START_CHAR
            } else if coord == self.goal {
                GOAL_CHAR
            } else if cell == Cell::Wall {
                WALL_CHAR
            } else {
                OPEN_CHAR
            };
            write!(f, "{}", c)?;
            if coord.x + 1 == self.grid.width() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
