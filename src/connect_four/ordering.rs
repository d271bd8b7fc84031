//! Heuristic ordering of legal columns
//!
//! Good moves first means more beta cutoffs. The ordering is also fully
//! deterministic, so two searches of the same position report the same move.

use std::cmp::Ordering;

use super::board::{Board, COLS, ROWS};
use super::threat::ThreatTracker;
use crate::game_state::Player;

/// Number of four-in-a-row lines passing through each cell, indexed `[row][col]`
pub const LINE_COUNT: [[u8; COLS]; ROWS] = [
    [3, 4, 5, 7, 5, 4, 3],
    [4, 6, 8, 10, 8, 6, 4],
    [5, 8, 11, 13, 11, 8, 5],
    [5, 8, 11, 13, 11, 8, 5],
    [4, 6, 8, 10, 8, 6, 4],
    [3, 4, 5, 7, 5, 4, 3],
];

/// Sorts candidate columns for the side to move
///
/// Keeps a per-column flag that is refreshed whenever the position changes:
/// a column is flagged when the side to move owns a threat in it that has not
/// been filled yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOrderer {
    winning_column: [bool; COLS],
}

impl MoveOrderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the column flags for `player`, the side about to move
    pub fn refresh(&mut self, board: &Board, threats: &ThreatTracker, player: Player) {
        self.winning_column = [false; COLS];
        for threat in threats.iter().filter(|t| t.player == player) {
            if let Some(drop_row) = board.next_drop_row(threat.col) {
                if drop_row >= threat.row {
                    self.winning_column[threat.col] = true;
                }
            }
        }
    }

    /// Returns true if `col` is flagged for the side to move
    pub fn is_winning_column(&self, col: usize) -> bool {
        self.winning_column.get(col).copied().unwrap_or(false)
    }

    /// Compares two legal columns; `Less` means `first` is tried earlier
    ///
    /// Flagged columns come first, then cells crossed by more lines, then the
    /// lower column index.
    pub fn compare(&self, board: &Board, first: usize, second: usize) -> Ordering {
        self.is_winning_column(second)
            .cmp(&self.is_winning_column(first))
            .then_with(|| Self::line_count(board, second).cmp(&Self::line_count(board, first)))
            .then_with(|| first.cmp(&second))
    }

    /// Sorts legal columns best first
    pub fn order(&self, board: &Board, columns: &mut [usize]) {
        columns.sort_by(|&a, &b| self.compare(board, a, b));
    }

    /// Lines through the cell the next piece in `col` would occupy
    fn line_count(board: &Board, col: usize) -> u8 {
        board
            .next_drop_row(col)
            .map_or(0, |row| LINE_COUNT[row][col])
    }
}
