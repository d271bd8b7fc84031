use log::trace;

use super::board::{Board, Cell};
use crate::game_state::Player;

/// A cell that completes four in a row for `player` once it holds their piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Threat {
    pub col: usize,
    pub row: usize,
    pub player: Player,
}

impl Threat {
    /// Creates a threat on cell `(col, row)` owned by `player`
    pub fn new(col: usize, row: usize, player: Player) -> Self {
        Threat { col, row, player }
    }
}

/// Scan directions as `(dcol, drow)`: horizontal, vertical and both diagonals
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Append-only journal of known threats
///
/// Each call to [`ThreatTracker::add_threats_for_move`] records how many
/// threats it introduced, and [`ThreatTracker::undo_last_move`] drops exactly
/// that many from the end. This only works when undos mirror the adds in
/// reverse order, which the engine guarantees by owning both the tracker and
/// the move history.
///
/// Cells are registered whenever they are on the board, occupied or not. A
/// threat whose cell already holds its owner's piece is a completed line, and
/// that is how the engine detects a win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreatTracker {
    threats: Vec<Threat>,
    added_counts: Vec<usize>,
}

impl ThreatTracker {
    /// Creates an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the threats created by `player`'s piece on top of column `col`
    ///
    /// `board` must already contain the piece. Returns the number of threats
    /// that were not known before.
    pub fn add_threats_for_move(&mut self, board: &Board, col: usize, player: Player) -> usize {
        let Some(row) = board.top_row(col) else {
            self.added_counts.push(0);
            return 0;
        };

        let (col, row) = (col as isize, row as isize);
        let added: usize = DIRECTIONS
            .iter()
            .map(|&(dc, dr)| self.add_threats_near(board, col, row, dc, dr, player))
            .sum();

        self.added_counts.push(added);
        added
    }

    /// Removes the threats added by the most recent move
    ///
    /// Returns how many were removed, zero if there is nothing to undo.
    pub fn undo_last_move(&mut self) -> usize {
        let count = self.added_counts.pop().unwrap_or(0);
        let keep = self.threats.len().saturating_sub(count);
        self.threats.truncate(keep);
        count
    }

    /// Scans one axis through `(col, row)` in both directions
    fn add_threats_near(
        &mut self,
        board: &Board,
        col: isize,
        row: isize,
        dc: isize,
        dr: isize,
        player: Player,
    ) -> usize {
        // Offset k along the axis; negative k is the opposite side
        let at = |k: isize| (col + dc * k, row + dr * k);
        let own = |k: isize| {
            let (c, r) = at(k);
            board.get(c, r) == Some(Cell::Occupied(player))
        };

        let (l1, l2, l3) = (own(-1), own(-2), own(-3));
        let (r1, r2, r3) = (own(1), own(2), own(3));

        let mut count = 0;

        // X M X T and T X M X
        if l1 && r1 {
            count += self.insert(at(2), player);
            count += self.insert(at(-2), player);
        }

        // M X T X
        if r1 && r3 {
            count += self.insert(at(2), player);
        }
        // M T X X and X M T X
        else if r2 && (r3 || l1) {
            count += self.insert(at(1), player);
        }
        // T M X X T
        else if r1 && r2 {
            count += self.insert(at(3), player);
            count += self.insert(at(-1), player);
        }

        // Mirror image of the three cases above
        if l1 && l3 {
            count += self.insert(at(-2), player);
        } else if l2 && (l3 || r1) {
            count += self.insert(at(-1), player);
        } else if l1 && l2 {
            count += self.insert(at(-3), player);
            count += self.insert(at(1), player);
        }

        count
    }

    /// Adds a threat unless it is off the board or already known
    fn insert(&mut self, (col, row): (isize, isize), player: Player) -> usize {
        if !Board::in_bounds(col, row) {
            return 0;
        }

        let threat = Threat::new(col as usize, row as usize, player);
        if self.threats.contains(&threat) {
            return 0;
        }

        trace!("new threat for player {} at ({}, {})", player, col, row);
        self.threats.push(threat);
        1
    }

    /// Iterates over the known threats in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Threat> {
        self.threats.iter()
    }

    /// Whether this exact threat is already known
    pub fn contains(&self, threat: &Threat) -> bool {
        self.threats.contains(threat)
    }

    /// Number of known threats
    pub fn len(&self) -> usize {
        self.threats.len()
    }

    /// Whether no threat is known yet
    pub fn is_empty(&self) -> bool {
        self.threats.is_empty()
    }

    /// Number of recorded moves, one entry per `add_threats_for_move`
    pub fn depth(&self) -> usize {
        self.added_counts.len()
    }
}

impl<'a> IntoIterator for &'a ThreatTracker {
    type Item = &'a Threat;
    type IntoIter = std::slice::Iter<'a, Threat>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(board: &mut Board, tracker: &mut ThreatTracker, col: usize, player: Player) -> usize {
        board.put(col, player);
        tracker.add_threats_for_move(board, col, player)
    }

    #[test]
    fn test_three_in_a_row_threatens_both_ends() {
        let mut board = Board::new();
        let mut tracker = ThreatTracker::new();

        play(&mut board, &mut tracker, 1, Player::A);
        play(&mut board, &mut tracker, 2, Player::A);
        let added = play(&mut board, &mut tracker, 3, Player::A);

        assert_eq!(added, 2);
        assert!(tracker.contains(&Threat::new(0, 5, Player::A)));
        assert!(tracker.contains(&Threat::new(4, 5, Player::A)));
        assert_eq!(tracker.depth(), 3);
    }

    #[test]
    fn test_gap_is_threatened() {
        let mut board = Board::new();
        let mut tracker = ThreatTracker::new();

        // X X _ M
        play(&mut board, &mut tracker, 0, Player::B);
        play(&mut board, &mut tracker, 1, Player::B);
        play(&mut board, &mut tracker, 3, Player::B);

        assert!(tracker.contains(&Threat::new(2, 5, Player::B)));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_vertical_threat() {
        let mut board = Board::new();
        let mut tracker = ThreatTracker::new();

        for _ in 0..3 {
            play(&mut board, &mut tracker, 6, Player::A);
        }

        assert!(tracker.contains(&Threat::new(6, 2, Player::A)));
        // Nothing below the bottom row
        assert!(tracker.iter().all(|t| t.row < 6));
    }

    #[test]
    fn test_duplicates_are_not_counted() {
        let mut board = Board::new();
        let mut tracker = ThreatTracker::new();

        // X _ X _ X, then M fills the first gap: column 3 is derived by two
        // patterns in the same scan but stored once
        play(&mut board, &mut tracker, 0, Player::A);
        play(&mut board, &mut tracker, 2, Player::A);
        play(&mut board, &mut tracker, 4, Player::A);
        assert!(tracker.is_empty());

        let added = play(&mut board, &mut tracker, 1, Player::A);
        assert_eq!(added, 1);
        assert_eq!(tracker.len(), 1);
        assert!(tracker.contains(&Threat::new(3, 5, Player::A)));
    }

    #[test]
    fn test_gap_between_pairs() {
        let mut board = Board::new();
        let mut tracker = ThreatTracker::new();

        // X _ X X: only the gap completes a line
        play(&mut board, &mut tracker, 0, Player::A);
        play(&mut board, &mut tracker, 2, Player::A);
        let added = play(&mut board, &mut tracker, 3, Player::A);

        assert_eq!(added, 1);
        assert!(tracker.contains(&Threat::new(1, 5, Player::A)));
        assert!(!tracker.contains(&Threat::new(4, 5, Player::A)));
    }

    #[test]
    fn test_undo_removes_exactly_the_last_additions() {
        let mut board = Board::new();
        let mut tracker = ThreatTracker::new();

        play(&mut board, &mut tracker, 1, Player::A);
        play(&mut board, &mut tracker, 2, Player::A);
        let snapshot = tracker.clone();

        let added = play(&mut board, &mut tracker, 3, Player::A);
        assert_eq!(tracker.undo_last_move(), added);
        board.remove(3);

        assert_eq!(tracker, snapshot);
    }

    #[test]
    fn test_undo_on_empty_tracker() {
        let mut tracker = ThreatTracker::new();
        assert_eq!(tracker.undo_last_move(), 0);
        assert!(tracker.is_empty());
    }
}
