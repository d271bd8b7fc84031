//! NegaMax search with fail-soft alpha-beta pruning
//!
//! The search works on a single game instance that it borrows mutably. Every
//! node performs a move on the way down and undoes it on the way up, so the
//! position handed to [`NegaMax::best_move`] is exactly restored when the
//! call returns.

use std::time::Instant;

use log::{debug, info};

use crate::{
    config::SearchConfig,
    game_state::Game,
    stats::SearchStatistics,
    utils::{greater_or_equal, greater_than},
    Result, SearchError,
};

/// Depth-bounded NegaMax searcher
///
/// Holds only its configuration and the statistics of the last search. The
/// position lives in the [`Game`] passed to each call.
#[derive(Debug, Clone)]
pub struct NegaMax {
    /// Configuration for the search
    config: SearchConfig,

    /// Statistics gathered during the last search
    statistics: SearchStatistics,
}

impl NegaMax {
    /// Creates a new searcher with the given configuration
    pub fn new(config: SearchConfig) -> Self {
        NegaMax {
            config,
            statistics: SearchStatistics::new(),
        }
    }

    /// Returns the configuration of this searcher
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Searches `max_depth` plies and returns the best move for the side to move
    ///
    /// A move is only recorded if its value is strictly better than every
    /// earlier one, starting from negative infinity. When every move is an
    /// exactly valued forced loss nothing is ever recorded and
    /// [`SearchError::NoMoveFound`] is returned; callers are expected to fall
    /// back to any legal move (see [`crate::SearchAgent`]).
    ///
    /// A position that is already decided has no best move and yields
    /// [`SearchError::GameOver`] without searching.
    pub fn best_move<G: Game>(&mut self, game: &mut G) -> Result<G::Action> {
        self.config.validate()?;
        if !game.status().is_playing() {
            return Err(SearchError::GameOver);
        }

        let depth = self.config.max_depth;
        let (value, best) = self.run(game, depth, f64::NEG_INFINITY, f64::INFINITY);

        info!(
            "searched {} plies for player {}: value {:.4}, {} nodes, {} cutoffs",
            depth,
            game.current_player(),
            value,
            self.statistics.nodes,
            self.statistics.cutoffs
        );

        best.ok_or(SearchError::NoMoveFound)
    }

    /// Returns the NegaMax value of the position for the side to move
    ///
    /// Runs the same recursion as [`NegaMax::best_move`] with an explicit
    /// depth and window. The result is fail-soft: a value outside
    /// `(alpha, beta)` is still a valid bound.
    pub fn search<G: Game>(&mut self, game: &mut G, depth: usize, alpha: f64, beta: f64) -> f64 {
        self.run(game, depth, alpha, beta).0
    }

    /// Returns the statistics of the last search
    pub fn get_statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    fn run<G: Game>(
        &mut self,
        game: &mut G,
        depth: usize,
        alpha: f64,
        beta: f64,
    ) -> (f64, Option<G::Action>) {
        self.statistics = SearchStatistics::new();
        self.statistics.depth = depth;

        let start_time = Instant::now();
        let mut best = None;
        let value = self.negamax(game, depth, 0, alpha, beta, &mut best);

        self.statistics.best_value = value;
        self.statistics.total_time = start_time.elapsed();

        (value, best)
    }

    /// Recursive NegaMax step
    ///
    /// `alpha` doubles as the running best value. The move that raised it at
    /// ply 0 is written to `best`.
    fn negamax<G: Game>(
        &mut self,
        game: &mut G,
        depth: usize,
        ply: usize,
        mut alpha: f64,
        beta: f64,
        best: &mut Option<G::Action>,
    ) -> f64 {
        self.statistics.nodes += 1;

        if depth == 0 || !game.status().is_playing() {
            self.statistics.leaf_evaluations += 1;
            return game.evaluate_state();
        }

        let epsilon = self.config.epsilon;

        for action in game.valid_moves() {
            game.perform(&action);
            let value = -self.negamax(game, depth - 1, ply + 1, -beta, -alpha, best);
            let undone = game.undo();
            debug_assert!(undone.as_ref() == Some(&action), "unbalanced undo");

            if ply == 0 {
                debug!("root move {:?} scored {:.4}", action, value);
            }

            if greater_than(value, alpha, epsilon) {
                alpha = value;
                if ply == 0 {
                    *best = Some(action);
                }
                if self.config.beta_cutoff && greater_or_equal(value, beta, epsilon) {
                    self.statistics.cutoffs += 1;
                    break;
                }
            }
        }

        alpha
    }
}

impl Default for NegaMax {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
