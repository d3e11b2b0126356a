//! Game rules: win and draw classification
//!
//! Placement legality lives on the board itself; this module only decides
//! whether a position is finished and for whom.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, outcome, GameOutcome};
