//! Board structure with turn state and move primitives

use super::{Cell, Player, Pos, COLS, ROWS, TOTAL_CELLS};

/// Line-scan directions: right, down, down-right, down-left.
/// Each direction is checked once from every candidate start cell.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Game board: a 5x6 grid of cells plus the player to move.
///
/// `place`/`unplace` are the raw mutation primitives shared by real moves
/// and search probing. They guard only against double occupancy; adjacency
/// legality is the job of [`Board::is_legal`] and [`Board::legal_moves`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    current_player: Player,
}

impl Board {
    /// Create an empty board with X to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
            current_player: Player::X,
        }
    }

    /// Build a board by replaying alternating placements, X first.
    ///
    /// Intended for tests, benches, and scripted openings; placements are
    /// not adjacency-checked.
    #[must_use]
    pub fn from_moves(moves: &[(u8, u8)]) -> Self {
        let mut board = Self::new();
        for &(row, col) in moves {
            let placed = board.place(Pos::new(row, col));
            debug_assert!(placed, "duplicate placement at ({row}, {col})");
        }
        board
    }

    /// Get the cell at a position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Get the cell at raw coordinates (for rendering)
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// The player whose turn it is
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Check if a position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Place the current player's mark at `pos` and pass the turn.
    ///
    /// Returns false without mutating if the cell is occupied. Adjacency is
    /// deliberately not re-checked here: the search only probes moves that
    /// already passed `legal_moves`.
    pub fn place(&mut self, pos: Pos) -> bool {
        if !self.is_empty(pos) {
            return false;
        }
        self.cells[pos.row as usize][pos.col as usize] = self.current_player.to_cell();
        self.current_player = self.current_player.other();
        true
    }

    /// Undo a `place` at `pos`: clear the cell and give the turn back.
    ///
    /// Search-only. Every exploratory `place` must be paired with exactly
    /// one `unplace` before the calling frame returns.
    pub fn unplace(&mut self, pos: Pos) {
        debug_assert!(!self.is_empty(pos));
        self.cells[pos.row as usize][pos.col as usize] = Cell::Empty;
        self.current_player = self.current_player.other();
    }

    /// Check whether any of the 8 surrounding cells is occupied.
    pub fn has_neighbor(&self, pos: Pos) -> bool {
        for dr in -1i32..=1 {
            for dc in -1i32..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = i32::from(pos.row) + dr;
                let c = i32::from(pos.col) + dc;
                if Pos::is_valid(r, c) && !self.is_empty(Pos::new(r as u8, c as u8)) {
                    return true;
                }
            }
        }
        false
    }

    /// A move is legal if the cell is empty and touches an existing mark.
    /// On an empty board there is nothing to touch, so every cell is legal.
    pub fn is_legal(&self, pos: Pos) -> bool {
        self.is_empty(pos) && (self.is_board_empty() || self.has_neighbor(pos))
    }

    /// All legal moves, ordered by column ascending then row ascending.
    ///
    /// The order is load-bearing: the search explores candidates in this
    /// exact order and breaks score ties toward the earliest one.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Pos> {
        let mut moves = Vec::with_capacity(TOTAL_CELLS);
        for col in 0..COLS {
            for row in 0..ROWS {
                let pos = Pos::new(row as u8, col as u8);
                if self.is_legal(pos) {
                    moves.push(pos);
                }
            }
        }
        moves
    }

    /// Check if `player` has four consecutive marks in any direction.
    pub fn has_line_of_four(&self, player: Player) -> bool {
        let cell = player.to_cell();
        for row in 0..ROWS {
            for col in 0..COLS {
                if self.cells[row][col] != cell {
                    continue;
                }
                for &(dr, dc) in &DIRECTIONS {
                    if self.run_of_four(row as i32, col as i32, dr, dc, cell) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Four same-colored cells starting at (row, col) along (dr, dc).
    fn run_of_four(&self, row: i32, col: i32, dr: i32, dc: i32, cell: Cell) -> bool {
        for i in 0..4 {
            let r = row + i * dr;
            let c = col + i * dc;
            if !Pos::is_valid(r, c) || self.cells[r as usize][c as usize] != cell {
                return false;
            }
        }
        true
    }

    /// No empty cells remain
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    /// Total marks on the board
    pub fn stone_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Check if the board has no marks at all
    pub fn is_board_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell == Cell::Empty))
    }

    /// Directly set a cell without touching the turn (test setup helper).
    #[cfg(test)]
    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
