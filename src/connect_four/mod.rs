//! Drop-piece four-in-a-row game
//!
//! The engine is split into the parts the search touches on every node:
//! - [`board`]: the grid with gravity-drop semantics
//! - [`threat`]: the incremental, undoable list of winning cells
//! - [`ordering`]: the heuristic that sorts legal columns
//! - [`game`]: the state machine tying them together behind [`crate::Game`]

pub mod board;
pub mod game;
pub mod ordering;
pub mod threat;

pub use board::{Board, Cell, COLS, ROWS};
pub use game::{ConnectFour, Move};
pub use ordering::MoveOrderer;
pub use threat::{Threat, ThreatTracker};
