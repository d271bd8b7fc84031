//! Connect Four on the console
//!
//! Pass the number of human players (0, 1 or 2). Humans enter a column
//! number; the other seats are played by the NegaMax engine.
//!
//! ```bash
//! cargo run --release --example connect_four -- 1
//! ```

use std::io::{self, BufRead, Write};

use negamax_four::{
    connect_four::COLS, ConnectFour, Game, Move, MoveSource, Player, SearchAgent,
    SearchConfig,
};

/// Reads columns from standard input until a playable one is entered
struct ConsolePlayer;

impl MoveSource<ConnectFour> for ConsolePlayer {
    fn next_move(&mut self, game: &mut ConnectFour) -> negamax_four::Result<Move> {
        let stdin = io::stdin();
        loop {
            print!("Player {}: ", game.current_player());
            io::stdout().flush().ok();

            let mut input = String::new();
            match stdin.lock().read_line(&mut input) {
                Ok(0) => {
                    eprintln!("Error: input closed before player {} moved", game.current_player());
                    std::process::exit(1);
                }
                Ok(_) => {}
                Err(e) => {
                    eprintln!("Error reading input: {}", e);
                    std::process::exit(1);
                }
            }

            match input.trim().parse::<usize>() {
                Ok(column) if column < COLS && game.board().next_drop_row(column).is_some() => {
                    return Ok(Move::new(column));
                }
                _ => println!("Error, Player {}: {}", game.current_player(), input.trim()),
            }
        }
    }
}

/// Engine seat that also prints its choice
struct EnginePlayer(SearchAgent);

impl MoveSource<ConnectFour> for EnginePlayer {
    fn next_move(&mut self, game: &mut ConnectFour) -> negamax_four::Result<Move> {
        let action = self.0.next_move(game)?;
        println!("Player {}: {}", game.current_player(), action.column);
        println!("{}", self.0.negamax().get_statistics().summary());
        Ok(action)
    }
}

fn seat(human: bool) -> Box<dyn MoveSource<ConnectFour>> {
    if human {
        Box::new(ConsolePlayer)
    } else {
        Box::new(EnginePlayer(SearchAgent::new(SearchConfig::default())))
    }
}

fn main() {
    // Initialize logging
    env_logger::init();

    let humans = match std::env::args().nth(1).map(|arg| arg.parse::<usize>()) {
        Some(Ok(count)) if count <= 2 => count,
        _ => {
            eprintln!("Error, expected the human player count (0, 1 or 2)");
            std::process::exit(1);
        }
    };

    // Humans take the first seats
    let mut first = seat(humans >= 1);
    let mut second = seat(humans >= 2);

    let mut game = ConnectFour::new();
    println!("{}", game);

    while game.status().is_playing() {
        let result = match game.current_player() {
            Player::A => first.next_move(&mut game),
            Player::B => second.next_move(&mut game),
        };
        match result {
            Ok(action) => game.perform(&action),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        println!("{}", game);
    }
}
