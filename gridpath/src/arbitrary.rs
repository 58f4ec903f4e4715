use quickcheck::{Arbitrary, Gen};

use crate::Board;

/// Board text with rows of random, unequal lengths and exactly one
/// start and one goal marker.
#[derive(Clone, Debug)]
pub struct RaggedText {
    pub text: String,
}

impl Arbitrary for RaggedText {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_rows = (u8::arbitrary(g) % 6 + 1) as usize;
        let mut rows: Vec<Vec<char>> = (0..num_rows)
            .map(|_| {
                let len = (u8::arbitrary(g) % 8) as usize;
                (0..len).map(|_| *g.choose(&['.', '.', 'B']).unwrap()).collect()
            })
            .collect();
        for marker in ['S', 'X'] {
            let row = &mut rows[usize::arbitrary(g) % num_rows];
            let pos = usize::arbitrary(g) % (row.len() + 1);
            row.insert(pos, marker);
        }
        let text = rows
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        RaggedText { text }
    }
}

/// A valid rectangular board, roughly a third of it walls.
#[derive(Clone, Debug)]
pub struct ArbitraryBoard {
    pub board: Board,
}

impl Arbitrary for ArbitraryBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        // At least two cells, so that start and goal can be distinct
        let width = (u8::arbitrary(g) % 8 + 2) as usize;
        let height = (u8::arbitrary(g) % 8 + 1) as usize;
        let num_cells = width * height;

        let mut cells: Vec<char> = (0..num_cells)
            .map(|_| if u8::arbitrary(g) % 10 < 3 { 'B' } else { '.' })
            .collect();
        let start_idx = usize::arbitrary(g) % num_cells;
        let goal_idx = (start_idx + 1 + usize::arbitrary(g) % (num_cells - 1)) % num_cells;
        cells[start_idx] = 'S';
        cells[goal_idx] = 'X';

        let text = cells
            .chunks(width)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        let board = Board::parse(&text).unwrap();
        ArbitraryBoard { board }
    }
}
