//! Game-facing engine wrapping the search with per-move statistics
//!
//! The engine holds the search depth for each side and reports the move
//! together with node counts and wall-clock time, so a driver can print
//! progress without knowing anything about the search internals.
//!
//! # Example
//!
//! ```
//! use fourline::{AIEngine, Board, Player, Pos};
//!
//! let mut board = Board::new();
//! board.place(Pos::new(2, 3));
//!
//! let engine = AIEngine::with_depths(2, 4);
//! let result = engine.get_move_with_stats(&mut board, Player::O);
//! println!("Best move: {:?}", result.best_move);
//! println!("Nodes: {}", result.nodes);
//! ```

use crate::board::{Board, Player, Pos};
use crate::search::{search, SearchResult};
use std::time::Instant;

/// Result of a move computation with search statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any legal move remains
    pub best_move: Option<Pos>,
    /// Evaluation score of the chosen line
    pub score: i32,
    /// Number of nodes visited
    pub nodes: u64,
    /// Wall-clock time taken in milliseconds
    pub time_ms: u64,
}

/// AI engine with a fixed search depth per player.
///
/// Depths are set at construction; giving the two sides different depths
/// creates handicap matches (the bundled CLI drives X at depth 2 and O at
/// depth 4).
pub struct AIEngine {
    depth_x: u8,
    depth_o: u8,
}

impl AIEngine {
    /// Create an engine searching depth 4 for both sides.
    #[must_use]
    pub fn new() -> Self {
        Self::with_depths(4, 4)
    }

    /// Create an engine with a separate search depth for each side.
    #[must_use]
    pub fn with_depths(depth_x: u8, depth_o: u8) -> Self {
        Self { depth_x, depth_o }
    }

    /// The configured search depth for a player
    #[inline]
    pub fn depth_for(&self, player: Player) -> u8 {
        match player {
            Player::X => self.depth_x,
            Player::O => self.depth_o,
        }
    }

    /// Best move for `player`, or `None` when no legal move remains.
    ///
    /// The board is borrowed mutably for the duration of the search and
    /// restored exactly before this returns.
    pub fn get_move(&self, board: &mut Board, player: Player) -> Option<Pos> {
        self.get_move_with_stats(board, player).best_move
    }

    /// Best move for `player` with node count and timing.
    pub fn get_move_with_stats(&self, board: &mut Board, player: Player) -> MoveResult {
        let start = Instant::now();
        let SearchResult {
            score,
            best_move,
            nodes,
        } = search(board, self.depth_for(player), player);

        MoveResult {
            best_move,
            score,
            nodes,
            time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
