//! Line extraction for pattern scanning
//!
//! Derives the full set of scan lines from the grid: 5 row lines
//! (length 6), 6 column lines (length 5), and every maximal diagonal in
//! both orientations (10 per family, lengths 1-5). Short diagonals are
//! harmless to keep: a probe window longer than the line never matches.

use crate::board::{Board, Cell, COLS, ROWS};

/// A single line of cells along one scan direction.
pub type Line = Vec<Cell>;

/// All row lines, top to bottom.
pub fn rows(board: &Board) -> Vec<Line> {
    (0..ROWS)
        .map(|r| (0..COLS).map(|c| board.cell(r, c)).collect())
        .collect()
}

/// All column lines, left to right.
pub fn columns(board: &Board) -> Vec<Line> {
    (0..COLS)
        .map(|c| (0..ROWS).map(|r| board.cell(r, c)).collect())
        .collect()
}

/// Every maximal top-left to bottom-right diagonal.
pub fn diagonals_down(board: &Board) -> Vec<Line> {
    let mut diagonals = Vec::with_capacity(ROWS + COLS - 1);

    // Diagonals starting on the first row
    for col_start in 0..COLS {
        let mut line = Line::new();
        let (mut r, mut c) = (0, col_start);
        while r < ROWS && c < COLS {
            line.push(board.cell(r, c));
            r += 1;
            c += 1;
        }
        diagonals.push(line);
    }

    // Diagonals starting on the first column, below the main one
    for row_start in 1..ROWS {
        let mut line = Line::new();
        let (mut r, mut c) = (row_start, 0);
        while r < ROWS && c < COLS {
            line.push(board.cell(r, c));
            r += 1;
            c += 1;
        }
        diagonals.push(line);
    }

    diagonals
}

/// Every maximal top-right to bottom-left diagonal.
pub fn diagonals_up(board: &Board) -> Vec<Line> {
    let mut diagonals = Vec::with_capacity(ROWS + COLS - 1);

    // Diagonals starting on the first row
    for col_start in 0..COLS {
        let mut line = Line::new();
        let mut r = 0;
        let mut c = col_start as i32;
        while r < ROWS && c >= 0 {
            line.push(board.cell(r, c as usize));
            r += 1;
            c -= 1;
        }
        diagonals.push(line);
    }

    // Diagonals starting on the last column, below the corner one
    for row_start in 1..ROWS {
        let mut line = Line::new();
        let mut r = row_start;
        let mut c = (COLS - 1) as i32;
        while r < ROWS && c >= 0 {
            line.push(board.cell(r, c as usize));
            r += 1;
            c -= 1;
        }
        diagonals.push(line);
    }

    diagonals
}

/// The full set of lines scanned by the evaluator.
pub fn all_lines(board: &Board) -> Vec<Line> {
    let mut lines = rows(board);
    lines.extend(columns(board));
    lines.extend(diagonals_down(board));
    lines.extend(diagonals_up(board));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_row_and_column_shapes() {
        let board = Board::new();

        let rows = rows(&board);
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|line| line.len() == 6));

        let cols = columns(&board);
        assert_eq!(cols.len(), 6);
        assert!(cols.iter().all(|line| line.len() == 5));
    }

    #[test]
    fn test_diagonal_family_shapes() {
        let board = Board::new();

        for family in [diagonals_down(&board), diagonals_up(&board)] {
            assert_eq!(family.len(), 10);
            // Each family covers every cell exactly once
            assert_eq!(family.iter().map(Vec::len).sum::<usize>(), 30);
            assert_eq!(family.iter().map(Vec::len).max(), Some(5));
            assert_eq!(family.iter().map(Vec::len).min(), Some(1));
        }
    }

    #[test]
    fn test_all_lines_count() {
        let board = Board::new();
        assert_eq!(all_lines(&board).len(), 5 + 6 + 10 + 10);
    }

    #[test]
    fn test_down_diagonal_contents() {
        let mut board = Board::new();
        board.set(Pos::new(0, 1), Cell::X);
        board.set(Pos::new(1, 2), Cell::X);
        board.set(Pos::new(2, 3), Cell::O);

        // Diagonal starting at (0,1): cells (0,1),(1,2),(2,3),(3,4),(4,5)
        let diag = &diagonals_down(&board)[1];
        assert_eq!(
            diag,
            &vec![Cell::X, Cell::X, Cell::O, Cell::Empty, Cell::Empty]
        );
    }

    #[test]
    fn test_up_diagonal_contents() {
        let mut board = Board::new();
        board.set(Pos::new(0, 2), Cell::O);
        board.set(Pos::new(1, 1), Cell::X);
        board.set(Pos::new(2, 0), Cell::O);

        // Diagonal starting at (0,2): cells (0,2),(1,1),(2,0)
        let diag = &diagonals_up(&board)[2];
        assert_eq!(diag, &vec![Cell::O, Cell::X, Cell::O]);
    }
}
