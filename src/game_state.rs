//! Traits defining the game interface required by the NegaMax search.
//!
//! The [`Game`] trait is the only seam between the search and a concrete game.
//! Unlike a copy-per-node interface, a game is mutated in place: the search
//! performs a move, recurses, and undoes it again before trying the next one.

use std::fmt::{self, Debug};

/// Trait for actions (moves) that can be taken in a game
pub trait Action: Clone + Debug + PartialEq {
    /// Returns a unique identifier for this action
    fn id(&self) -> usize;
}

/// The two sides of a zero-sum two-player game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Returns the opposing side
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::A => write!(f, "1"),
            Player::B => write!(f, "2"),
        }
    }
}

/// Overall state of a game
///
/// `Playing` is the only non-terminal state. A game leaves it after a
/// `perform` that wins or fills the board and returns to it on `undo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The game is still in progress
    Playing,
    /// The given player has won
    Won(Player),
    /// The game ended without a winner
    Draw,
}

impl GameStatus {
    /// Returns true while moves may still be performed
    pub fn is_playing(self) -> bool {
        self == GameStatus::Playing
    }

    /// Returns the winner, if any
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Trait defining the game interface required for NegaMax search
///
/// Implementors own all of their position state. The search holds nothing but
/// a mutable borrow for the duration of one call, and relies on two contracts:
///
/// - every `perform` is matched by exactly one `undo`, in LIFO order, and the
///   pair leaves the game bit-identical to what it was before;
/// - `evaluate_state` scores the position from the point of view of
///   [`Game::current_player`], the side about to move.
pub trait Game {
    /// The type of actions that can be taken in this game
    type Action: Action;

    /// Returns the legal actions from this state, best candidates first
    ///
    /// The order matters only for pruning efficiency and for which of several
    /// equally valued moves is reported. An empty list means no further play
    /// is possible.
    fn valid_moves(&self) -> Vec<Self::Action>;

    /// Applies a legal action in place
    ///
    /// `action` must come from [`Game::valid_moves`] of the current state.
    /// Implementations may ignore anything else, in which case nothing is
    /// recorded for [`Game::undo`] either.
    fn perform(&mut self, action: &Self::Action);

    /// Reverts the most recently performed action and returns it
    ///
    /// Returns `None`, leaving the game untouched, if nothing has been played.
    fn undo(&mut self) -> Option<Self::Action>;

    /// Returns a heuristic value of the position for the side to move
    ///
    /// Wins are `f64::INFINITY`, losses `f64::NEG_INFINITY`.
    fn evaluate_state(&self) -> f64;

    /// Returns the current game status
    fn status(&self) -> GameStatus;

    /// Returns the side about to move
    fn current_player(&self) -> Player;
}

impl Action for usize {
    fn id(&self) -> usize {
        *self
    }
}
