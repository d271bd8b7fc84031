//! # negamax-four
//!
//! A depth-bounded NegaMax search with alpha-beta pruning, instantiated for a
//! drop-piece four-in-a-row board.
//!
//! The search never copies positions. It asks a [`Game`] for its ordered legal
//! moves, performs one, recurses, undoes it and moves on to the next sibling.
//! Any deterministic two-player zero-sum game that can perform and undo moves
//! in place can be searched this way.
//!
//! ## Features
//!
//! - Generic NegaMax with fail-soft alpha-beta pruning over the [`Game`] trait
//! - Epsilon-tolerant value comparisons that still treat ±infinity exactly
//! - A connect-four engine with an incremental, exactly undoable threat tracker
//! - Heuristic move ordering for frequent cutoffs and reproducible output
//! - Search statistics and a fallback agent for lost positions
//!
//! ## Basic Usage
//!
//! ```
//! use negamax_four::{ConnectFour, Game, NegaMax, SearchConfig};
//!
//! fn main() -> Result<(), negamax_four::SearchError> {
//!     let mut game = ConnectFour::new();
//!
//!     // A shallow search keeps the doctest fast
//!     let config = SearchConfig::default().with_max_depth(4);
//!     let mut negamax = NegaMax::new(config);
//!
//!     let best = negamax.best_move(&mut game)?;
//!     println!("Best column: {}", best.column);
//!     println!("{}", negamax.get_statistics().summary());
//!
//!     // The search leaves the position exactly as it found it
//!     assert!(game.history().is_empty());
//!     game.perform(&best);
//!     Ok(())
//! }
//! ```
//!
//! ## How It Works
//!
//! 1. **Ordering**: legal moves come back sorted so that columns completing a
//!    known threat are tried first, then cells crossed by many potential lines.
//!
//! 2. **Recursion**: each child value is negated, so every level maximizes from
//!    the point of view of the side to move.
//!
//! 3. **Pruning**: a child whose value reaches `beta` ends the expansion of its
//!    siblings, since the opponent will never allow this line.
//!
//! 4. **Evaluation**: at the ply limit, open threats are summed with weights that
//!    fall off with the number of rows still needed to reach them.
//!
//! ## Examples
//!
//! ```bash
//! cargo run --example connect_four -- 1
//! ```

pub mod agent;
pub mod config;
pub mod connect_four;
pub mod game_state;
pub mod negamax;
pub mod stats;
pub mod utils;

pub use agent::{play_match, MoveSource, ScriptedAgent, SearchAgent};
pub use config::SearchConfig;
pub use connect_four::{Board, Cell, ConnectFour, Move, Threat, ThreatTracker};
pub use game_state::{Action, Game, GameStatus, Player};
pub use negamax::NegaMax;
pub use stats::SearchStatistics;

/// Error types for the search engine and its games
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Every legal move loses by force; no move improves on negative infinity
    #[error("No move found: every legal move is a forced loss")]
    NoMoveFound,

    /// No legal moves are available from the current state
    #[error("No legal moves available from current state")]
    NoLegalMoves,

    /// The requested column is full or outside the board
    #[error("Illegal move: column {0} is full or out of range")]
    IllegalMove(usize),

    /// A move was requested after the game had already ended
    #[error("Game is already over")]
    GameOver,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
