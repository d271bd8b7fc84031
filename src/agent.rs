//! Move sources and a simple match driver
//!
//! A [`MoveSource`] decides the next move for whichever side is to move. The
//! search-backed [`SearchAgent`] is the caller that handles
//! [`SearchError::NoMoveFound`]: when every move loses by force it still has
//! to play something, so it takes the first legal move. A finished game is
//! reported as [`SearchError::GameOver`] and never gets a move.

use std::collections::VecDeque;

use log::{info, warn};

use crate::{
    config::SearchConfig,
    game_state::{Action, Game, GameStatus, Player},
    negamax::NegaMax,
    Result, SearchError,
};

/// Trait for anything that can pick the next move in a game
pub trait MoveSource<G: Game> {
    /// Returns the move to play for the side to move
    ///
    /// The game may be mutated while deciding but must be restored before
    /// returning.
    fn next_move(&mut self, game: &mut G) -> Result<G::Action>;
}

/// Agent that plays the NegaMax best move
#[derive(Debug, Clone, Default)]
pub struct SearchAgent {
    negamax: NegaMax,
}

impl SearchAgent {
    /// Creates a new agent searching with the given configuration
    pub fn new(config: SearchConfig) -> Self {
        SearchAgent {
            negamax: NegaMax::new(config),
        }
    }

    /// Returns the searcher, e.g. to read its statistics
    pub fn negamax(&self) -> &NegaMax {
        &self.negamax
    }
}

impl<G: Game> MoveSource<G> for SearchAgent {
    fn next_move(&mut self, game: &mut G) -> Result<G::Action> {
        match self.negamax.best_move(game) {
            Err(SearchError::NoMoveFound) => {
                warn!(
                    "player {} loses by force, falling back to the first legal move",
                    game.current_player()
                );
                game.valid_moves()
                    .into_iter()
                    .next()
                    .ok_or(SearchError::NoLegalMoves)
            }
            result => result,
        }
    }
}

/// Agent that replays a fixed list of moves
///
/// Stands in for move entry from outside the engine.
#[derive(Debug, Clone)]
pub struct ScriptedAgent<A> {
    moves: VecDeque<A>,
}

impl<A> ScriptedAgent<A> {
    pub fn new(moves: impl IntoIterator<Item = A>) -> Self {
        ScriptedAgent {
            moves: moves.into_iter().collect(),
        }
    }

    /// Number of moves left in the script
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl<G: Game> MoveSource<G> for ScriptedAgent<G::Action> {
    fn next_move(&mut self, game: &mut G) -> Result<G::Action> {
        let action = self.moves.pop_front().ok_or(SearchError::NoLegalMoves)?;
        if !game.valid_moves().contains(&action) {
            return Err(SearchError::IllegalMove(action.id()));
        }
        Ok(action)
    }
}

/// Plays a game to the end and returns the final status
///
/// `first` moves for [`Player::A`], `second` for [`Player::B`], whichever of
/// them starts.
pub fn play_match<G, A, B>(game: &mut G, first: &mut A, second: &mut B) -> Result<GameStatus>
where
    G: Game,
    A: MoveSource<G> + ?Sized,
    B: MoveSource<G> + ?Sized,
{
    while game.status().is_playing() {
        let player = game.current_player();
        let action = match player {
            Player::A => first.next_move(game)?,
            Player::B => second.next_move(game)?,
        };
        info!("player {} plays {:?}", player, action);
        game.perform(&action);
    }

    let status = game.status();
    match status {
        GameStatus::Won(winner) => info!("player {} won the game", winner),
        _ => info!("game ended in a draw"),
    }
    Ok(status)
}
