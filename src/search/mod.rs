//! Adversarial search for move selection
//!
//! Depth-limited minimax with alpha-beta pruning over in-place board
//! mutation. Pruning only reduces the node count; it never changes the
//! returned score or move.

pub mod minimax;

pub use minimax::{search, SearchResult};
