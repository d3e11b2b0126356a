//! Depth-limited minimax with alpha-beta pruning
//!
//! The engine maximizes for the root player on even plies and minimizes on
//! odd plies; leaves are always scored from the root player's perspective,
//! which is why this is plain minimax rather than negamax. Candidate moves
//! are explored in the fixed (column, row) order produced by
//! [`Board::legal_moves`] and the running best only updates on strict
//! improvement, so equal-scoring moves resolve deterministically to the
//! earliest one.
//!
//! # Example
//!
//! ```
//! use fourline::board::{Board, Player, Pos};
//! use fourline::search::search;
//!
//! let mut board = Board::new();
//! board.place(Pos::new(2, 3));
//!
//! let result = search(&mut board, 4, Player::O);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use crate::board::{Board, Player, Pos};
use crate::eval::{evaluate, PatternWeight};

/// Infinity bound for the alpha-beta window
const INF: i32 = PatternWeight::WIN + 1;

/// Search result: the extremal score, the move that achieves it, and the
/// number of nodes visited (every call counts itself once).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Evaluation score from the root player's perspective
    pub score: i32,
    /// Best move found; `None` on terminal nodes or when no move exists
    pub best_move: Option<Pos>,
    /// Total nodes visited in this subtree
    pub nodes: u64,
}

/// Find the best move for `player`, searching `depth` plies ahead.
///
/// The search maximizes for `player` at the root regardless of whose turn
/// it is on `board`. The board is mutated while exploring and restored
/// exactly before returning: every probe `place` is paired with one
/// `unplace` on all exit paths, including pruning cuts.
///
/// A `best_move` of `None` means no legal continuation exists; callers
/// should treat the game as drawn.
#[must_use]
pub fn search(board: &mut Board, depth: u8, player: Player) -> SearchResult {
    minimax(board, depth, -INF, INF, true, player)
}

/// Score a node the search has classified as terminal.
///
/// A decided board gets the fixed win/loss value; otherwise (depth
/// exhausted, or a full drawn board) the pattern evaluator runs.
fn terminal_score(board: &Board, player: Player) -> i32 {
    if board.has_line_of_four(player) {
        PatternWeight::WIN
    } else if board.has_line_of_four(player.other()) {
        -PatternWeight::WIN
    } else {
        evaluate(board, player)
    }
}

fn minimax(
    board: &mut Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    player: Player,
) -> SearchResult {
    let mut nodes: u64 = 1;

    // Terminal test: depth exhausted, a decided game, or a full board
    if depth == 0
        || board.has_line_of_four(Player::X)
        || board.has_line_of_four(Player::O)
        || board.is_full()
    {
        return SearchResult {
            score: terminal_score(board, player),
            best_move: None,
            nodes,
        };
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        return SearchResult {
            score: terminal_score(board, player),
            best_move: None,
            nodes,
        };
    }

    let mut best_score = if maximizing { -INF } else { INF };
    let mut best_move = None;

    for mov in moves {
        board.place(mov);
        let child = minimax(board, depth - 1, alpha, beta, !maximizing, player);
        // Restore before any bookkeeping so no exit path leaves the
        // board dirty
        board.unplace(mov);
        nodes += child.nodes;

        if maximizing {
            if child.score > best_score {
                best_score = child.score;
                best_move = Some(mov);
            }
            alpha = alpha.max(child.score);
        } else {
            if child.score < best_score {
                best_score = child.score;
                best_move = Some(mov);
            }
            beta = beta.min(child.score);
        }

        if beta <= alpha {
            break;
        }
    }

    SearchResult {
        score: best_score,
        best_move,
        nodes,
    }
}
