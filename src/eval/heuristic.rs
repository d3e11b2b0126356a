//! Heuristic evaluation for board positions
//!
//! Scores a position from one player's perspective by classifying every
//! scan line into at most one pattern bucket. The buckets form four
//! priority tiers of {player, opponent}, checked in order with first-match
//! wins, so a line can never double-count across tiers.
//!
//! This is a pure pattern count: terminal win/loss values are assigned by
//! the search at its terminal test, never here. On a full undecided board
//! every bucket needs an adjacent empty cell, so the score degenerates
//! to 0.

use crate::board::{Board, Player};

use super::lines;
use super::patterns::{self, PatternWeight};

/// Evaluate the board from `player`'s perspective. Higher is better for
/// `player`. Pure function, total over every board/player pair.
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let me = player.to_cell();
    let opp = player.other().to_cell();

    let mut open_three_me = 0;
    let mut open_three_opp = 0;
    let mut half_three_me = 0;
    let mut half_three_opp = 0;
    let mut open_two_me = 0;
    let mut open_two_opp = 0;
    let mut half_two_me = 0;
    let mut half_two_opp = 0;

    for line in lines::all_lines(board) {
        if patterns::open_three(&line, me) {
            open_three_me += 1;
        } else if patterns::open_three(&line, opp) {
            open_three_opp += 1;
        } else if patterns::half_open_three(&line, me) {
            half_three_me += 1;
        } else if patterns::half_open_three(&line, opp) {
            half_three_opp += 1;
        } else if patterns::open_two(&line, me) {
            open_two_me += 1;
        } else if patterns::open_two(&line, opp) {
            open_two_opp += 1;
        } else if patterns::half_open_two(&line, me) {
            half_two_me += 1;
        } else if patterns::half_open_two(&line, opp) {
            half_two_opp += 1;
        }
    }

    PatternWeight::OPEN_THREE * open_three_me - PatternWeight::OPEN_THREE_OPP * open_three_opp
        + PatternWeight::HALF_THREE * half_three_me
        - PatternWeight::HALF_THREE_OPP * half_three_opp
        + PatternWeight::OPEN_TWO * open_two_me
        - PatternWeight::OPEN_TWO_OPP * open_two_opp
        + PatternWeight::HALF_TWO * half_two_me
        - PatternWeight::HALF_TWO_OPP * half_two_opp
}
