use negamax_four::{ConnectFour, Game, GameStatus, Move, NegaMax, Player, SearchConfig};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

const SEED: u64 = 0x5eed_c4;

/// Plays up to `max_moves` random legal moves, stopping early if the game ends
fn random_columns(rng: &mut StdRng, start: Player, max_moves: usize) -> Vec<usize> {
    let mut game = ConnectFour::starting_with(start);
    let mut columns = Vec::new();
    for _ in 0..max_moves {
        if !game.status().is_playing() {
            break;
        }
        let legal = game.board().valid_moves();
        let column = *legal.choose(rng).unwrap();
        game.perform(&Move::new(column));
        columns.push(column);
    }
    columns
}

fn replay(start: Player, columns: &[usize]) -> ConnectFour {
    let mut game = ConnectFour::starting_with(start);
    for &column in columns {
        game.perform(&Move::new(column));
    }
    game
}

/// Random positions that are still in progress
fn random_open_positions(rng: &mut StdRng, count: usize, max_moves: usize) -> Vec<Vec<usize>> {
    let mut positions = Vec::new();
    while positions.len() < count {
        let length = rng.gen_range(0..=max_moves);
        let columns = random_columns(rng, Player::A, length);
        if replay(Player::A, &columns).status().is_playing() {
            positions.push(columns);
        }
    }
    positions
}

#[test]
fn test_perform_undo_round_trip() {
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..200 {
        let prefix_length = rng.gen_range(0..20);
        let prefix = random_columns(&mut rng, Player::A, prefix_length);
        let mut game = replay(Player::A, &prefix);
        if !game.status().is_playing() {
            continue;
        }
        let snapshot = game.clone();

        let mut performed = 0;
        let extra = rng.gen_range(1..25);
        for _ in 0..extra {
            if !game.status().is_playing() {
                break;
            }
            let legal = game.valid_moves();
            let action = *legal.choose(&mut rng).unwrap();
            game.perform(&action);
            performed += 1;
        }
        for _ in 0..performed {
            assert!(game.undo().is_some());
        }

        assert_eq!(game, snapshot, "round trip after {:?}", prefix);
    }
}

#[test]
fn test_threats_match_replayed_history() {
    let mut rng = StdRng::seed_from_u64(SEED + 1);

    for _ in 0..100 {
        let columns = random_columns(&mut rng, Player::A, 30);
        let mut game = replay(Player::A, &columns);

        let undos = rng.gen_range(0..=columns.len());
        for _ in 0..undos {
            game.undo();
        }

        let kept = &columns[..columns.len() - undos];
        let replayed = replay(Player::A, kept);
        assert_eq!(game.threats(), replayed.threats());
        assert_eq!(game.threats().depth(), game.history().len());
        assert_eq!(game, replayed);
    }
}

#[test]
fn test_valid_move_count_matches_open_columns() {
    let mut rng = StdRng::seed_from_u64(SEED + 2);

    for _ in 0..100 {
        let columns = random_columns(&mut rng, Player::A, 42);
        let mut game = ConnectFour::new();
        for &column in &columns {
            game.perform(&Move::new(column));
            let open = (0..7).filter(|&c| game.board().height(c) < 6).count();
            assert_eq!(game.valid_moves().len(), open);
        }
    }
}

#[test]
fn test_undo_removes_exactly_the_added_threats() {
    let mut rng = StdRng::seed_from_u64(SEED + 3);

    for _ in 0..100 {
        let columns = random_columns(&mut rng, Player::A, 40);
        let mut game = ConnectFour::new();
        let mut sizes = vec![game.threats().len()];
        for &column in &columns {
            game.perform(&Move::new(column));
            sizes.push(game.threats().len());
        }

        // Sizes never shrink going forward and are restored step by step backwards
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
        while game.undo().is_some() {
            sizes.pop();
            assert_eq!(Some(&game.threats().len()), sizes.last());
        }
    }
}

#[test]
fn test_search_restores_position() {
    let mut rng = StdRng::seed_from_u64(SEED + 4);

    for columns in random_open_positions(&mut rng, 20, 16) {
        let mut game = replay(Player::A, &columns);
        let snapshot = game.clone();

        let mut negamax = NegaMax::new(SearchConfig::default().with_max_depth(4));
        let _ = negamax.best_move(&mut game);

        assert_eq!(game, snapshot);
    }
}

#[test]
fn test_static_evaluation_negates_for_other_side() {
    // Same pieces, played in a different order so the other side is to move
    let a_to_move = replay(Player::A, &[1, 6, 2, 6, 3, 5]);
    let b_to_move = replay(Player::B, &[6, 1, 6, 2, 5, 3]);

    assert_eq!(a_to_move.board(), b_to_move.board());
    assert_eq!(a_to_move.current_player(), Player::A);
    assert_eq!(b_to_move.current_player(), Player::B);

    let value = a_to_move.evaluate_state();
    assert!(value > 0.0);
    assert_eq!(b_to_move.evaluate_state(), -value);
}

#[test]
fn test_color_swapped_positions_search_equal() {
    let mut rng = StdRng::seed_from_u64(SEED + 5);

    for columns in random_open_positions(&mut rng, 15, 14) {
        let mut original = replay(Player::A, &columns);
        let mut swapped = replay(Player::B, &columns);
        assert_eq!(original.current_player().other(), swapped.current_player());

        for depth in 1..=4 {
            let mut negamax = NegaMax::new(SearchConfig::default());
            let value = negamax.search(&mut original, depth, f64::NEG_INFINITY, f64::INFINITY);
            let swapped_value =
                negamax.search(&mut swapped, depth, f64::NEG_INFINITY, f64::INFINITY);
            assert_eq!(value, swapped_value, "{:?} at depth {}", columns, depth);
        }
    }
}

#[test]
fn test_mirrored_positions_search_equal() {
    let mut rng = StdRng::seed_from_u64(SEED + 6);

    for columns in random_open_positions(&mut rng, 15, 14) {
        let mirrored_columns: Vec<usize> = columns.iter().map(|&c| 6 - c).collect();
        let mut original = replay(Player::A, &columns);
        let mut mirrored = replay(Player::A, &mirrored_columns);

        for depth in 1..=4 {
            let mut negamax = NegaMax::new(SearchConfig::default());
            let value = negamax.search(&mut original, depth, f64::NEG_INFINITY, f64::INFINITY);
            let mirrored_value =
                negamax.search(&mut mirrored, depth, f64::NEG_INFINITY, f64::INFINITY);
            assert!(
                value == mirrored_value || (value - mirrored_value).abs() < 1e-9,
                "{:?} at depth {}: {} vs {}",
                columns,
                depth,
                value,
                mirrored_value
            );
        }
    }
}

#[test]
fn test_beta_cutoff_never_changes_root_value() {
    let mut rng = StdRng::seed_from_u64(SEED + 7);

    for columns in random_open_positions(&mut rng, 25, 14) {
        let mut game = replay(Player::A, &columns);

        for depth in 1..=5 {
            let mut pruned = NegaMax::new(SearchConfig::default());
            let mut full = NegaMax::new(SearchConfig::default().with_beta_cutoff(false));

            let pruned_value = pruned.search(&mut game, depth, f64::NEG_INFINITY, f64::INFINITY);
            let full_value = full.search(&mut game, depth, f64::NEG_INFINITY, f64::INFINITY);

            assert!(
                pruned_value == full_value || (pruned_value - full_value).abs() < 1e-9,
                "{:?} at depth {}: {} vs {}",
                columns,
                depth,
                pruned_value,
                full_value
            );
            assert!(pruned.get_statistics().nodes <= full.get_statistics().nodes);
            assert_eq!(full.get_statistics().cutoffs, 0);
        }
    }
}

#[test]
fn test_search_is_deterministic() {
    let mut game = replay(Player::A, &[3, 3, 2, 4]);
    let config = SearchConfig::default().with_max_depth(6);

    let first = NegaMax::new(config.clone()).best_move(&mut game).unwrap();
    for _ in 0..3 {
        let again = NegaMax::new(config.clone()).best_move(&mut game).unwrap();
        assert_eq!(first, again);
    }
    assert_eq!(game.status(), GameStatus::Playing);
}
