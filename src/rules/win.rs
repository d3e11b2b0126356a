//! Win and draw detection

use crate::board::{Board, Player};

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// The player with four in a row, if any.
#[must_use]
pub fn check_winner(board: &Board) -> Option<Player> {
    if board.has_line_of_four(Player::X) {
        Some(Player::X)
    } else if board.has_line_of_four(Player::O) {
        Some(Player::O)
    } else {
        None
    }
}

/// Outcome if the game is over: a winner, or a draw on a full board.
#[must_use]
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    if let Some(winner) = check_winner(board) {
        Some(GameOutcome::Winner(winner))
    } else if board.is_full() {
        Some(GameOutcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Pos};

    fn board_from_rows(rows: &[&str]) -> Board {
        let mut board = Board::new();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'X' => Cell::X,
                    'O' => Cell::O,
                    _ => Cell::Empty,
                };
                board.set(Pos::new(r as u8, c as u8), cell);
            }
        }
        board
    }

    #[test]
    fn test_no_winner_in_progress() {
        let board = Board::from_moves(&[(2, 3), (2, 2), (3, 3)]);
        assert_eq!(check_winner(&board), None);
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn test_winner_horizontal() {
        let board = board_from_rows(&["XXXX  ", "OOO   "]);
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(outcome(&board), Some(GameOutcome::Winner(Player::X)));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_from_rows(&[
            "O     ", //
            " O    ",
            "  O   ",
            "   O  ",
            "XXX   ",
        ]);
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_draw_on_full_board() {
        // Full board, longest run anywhere is 3
        let board = board_from_rows(&[
            "XXOOXX", //
            "OOXXOO",
            "XXOOXX",
            "OOXXOO",
            "XXOOXX",
        ]);
        assert!(board.is_full());
        assert_eq!(check_winner(&board), None);
        assert_eq!(outcome(&board), Some(GameOutcome::Draw));
    }
}
