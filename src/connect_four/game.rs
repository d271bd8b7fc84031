use std::fmt;

use log::debug;

use super::board::{Board, Cell};
use super::ordering::MoveOrderer;
use super::threat::ThreatTracker;
use crate::{
    game_state::{Action, Game, GameStatus, Player},
    Result, SearchError,
};

/// Connect four move: the column to drop a piece into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub column: usize,
}

impl Move {
    pub fn new(column: usize) -> Self {
        Move { column }
    }
}

impl Action for Move {
    fn id(&self) -> usize {
        self.column
    }
}

/// Connect four state machine
///
/// Owns the board, the threat journal and the move history, and keeps them in
/// lockstep: every [`Game::perform`] appends one journal entry and one history
/// entry, every [`Game::undo`] removes one of each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectFour {
    board: Board,
    threats: ThreatTracker,
    orderer: MoveOrderer,
    history: Vec<Move>,
    current_player: Player,
    status: GameStatus,
}

impl ConnectFour {
    /// Creates an empty game with player A to move
    pub fn new() -> Self {
        Self::starting_with(Player::A)
    }

    /// Creates an empty game with the given player to move
    pub fn starting_with(player: Player) -> Self {
        ConnectFour {
            board: Board::new(),
            threats: ThreatTracker::new(),
            orderer: MoveOrderer::new(),
            history: Vec::new(),
            current_player: player,
            status: GameStatus::Playing,
        }
    }

    /// Plays a sequence of columns from an empty board, player A first
    pub fn from_moves(columns: &[usize]) -> Result<Self> {
        let mut game = Self::new();
        for &column in columns {
            game.try_perform(column)?;
        }
        Ok(game)
    }

    /// Performs a move after checking that it is legal
    pub fn try_perform(&mut self, column: usize) -> Result<()> {
        if !self.status.is_playing() {
            return Err(SearchError::GameOver);
        }
        if self.board.next_drop_row(column).is_none() {
            return Err(SearchError::IllegalMove(column));
        }
        self.perform(&Move::new(column));
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn threats(&self) -> &ThreatTracker {
        &self.threats
    }

    /// Moves performed so far, oldest first
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Looks for a threat whose cell now holds its owner's piece
    ///
    /// Linear in the number of threats rather than the board size.
    fn update_status(&mut self) {
        let winner = self
            .threats
            .iter()
            .find(|t| {
                self.board.get(t.col as isize, t.row as isize) == Some(Cell::Occupied(t.player))
            })
            .map(|t| t.player);

        if let Some(player) = winner {
            self.status = GameStatus::Won(player);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for ConnectFour {
    type Action = Move;

    /// Legal columns, best candidates for the side to move first
    fn valid_moves(&self) -> Vec<Move> {
        let mut columns = self.board.valid_moves();
        self.orderer.order(&self.board, &mut columns);
        columns.into_iter().map(Move::new).collect()
    }

    /// Drops a piece for the side to move
    ///
    /// A full or out of range column leaves the game untouched and records
    /// nothing, so it must not be paired with an [`Game::undo`]. Use
    /// [`ConnectFour::try_perform`] to have it reported instead.
    fn perform(&mut self, action: &Move) {
        if self.board.next_drop_row(action.column).is_none() {
            debug!("ignoring move into unplayable column {}", action.column);
            return;
        }

        let player = self.current_player;
        self.board.put(action.column, player);
        self.history.push(*action);
        self.threats
            .add_threats_for_move(&self.board, action.column, player);

        self.current_player = player.other();
        self.orderer
            .refresh(&self.board, &self.threats, self.current_player);
        self.update_status();
    }

    fn undo(&mut self) -> Option<Move> {
        let action = self.history.pop()?;

        self.threats.undo_last_move();
        self.board.remove(action.column);
        self.current_player = self.current_player.other();
        self.orderer
            .refresh(&self.board, &self.threats, self.current_player);

        // A move was possible, so the game was in progress before it
        self.status = GameStatus::Playing;

        Some(action)
    }

    /// Sums open threats, weighted by how soon they can be reached
    ///
    /// A threat `d` rows above the next drop cell of its column contributes
    /// `1 / ln(d + 2)`, positive for the side to move and negative for the
    /// opponent. Threats on filled cells are ignored.
    fn evaluate_state(&self) -> f64 {
        match self.status {
            GameStatus::Playing => self
                .threats
                .iter()
                .filter_map(|threat| {
                    let drop_row = self.board.next_drop_row(threat.col)? as isize;
                    let distance = drop_row + 1 - threat.row as isize;
                    if distance <= 0 {
                        return None;
                    }
                    let rating = 1.0 / ((distance + 1) as f64).ln();
                    if threat.player == self.current_player {
                        Some(rating)
                    } else {
                        Some(-rating)
                    }
                })
                .sum(),
            GameStatus::Won(winner) if winner == self.current_player => f64::INFINITY,
            GameStatus::Won(_) => f64::NEG_INFINITY,
            GameStatus::Draw => 0.0,
        }
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn current_player(&self) -> Player {
        self.current_player
    }
}

impl fmt::Display for ConnectFour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        match self.status {
            GameStatus::Playing => writeln!(f, "Player {} to move", self.current_player),
            GameStatus::Won(player) => writeln!(f, "Player {} won the game!", player),
            GameStatus::Draw => writeln!(f, "Draw!"),
        }
    }
}
