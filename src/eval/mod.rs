//! Evaluation module for board positions
//!
//! Pattern recognition and scoring:
//! - Line extraction (rows, columns, both diagonal families)
//! - Open and half-open run detection within each line
//! - Priority-tiered, mutually exclusive line classification

pub mod heuristic;
pub mod lines;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::PatternWeight;
