mod common;

use common::{all_boards, board, one_move_apart, parity_solvable};
use rand::{rngs::StdRng, SeedableRng};
use slider_astar::{Board, Solver, SolverConfig};

fn assert_valid_solution(initial: &Board, solver: &Solver) {
    assert!(solver.is_solvable());
    let moves = solver.moves().unwrap();
    let path = solver.solution();

    assert_eq!(path.len() - 1, moves);
    assert_eq!(path.first(), Some(initial));
    assert!(path.last().unwrap().is_goal());
    for pair in path.windows(2) {
        assert!(one_move_apart(&pair[0], &pair[1]));
    }
}

#[test]
fn one_move_from_goal() {
    let initial = board(&[&[1, 2, 3], &[4, 5, 0], &[7, 8, 6]]);
    let solver = Solver::new(initial.clone());
    assert!(solver.is_solvable());
    assert_eq!(solver.moves(), Some(1));
    assert_eq!(solver.solution().len(), 2);
    assert_valid_solution(&initial, &solver);
}

#[test]
fn odd_permutation_is_unsolvable() {
    let solver = Solver::new(board(&[&[2, 1, 3], &[4, 5, 6], &[7, 8, 0]]));
    assert!(!solver.is_solvable());
    assert_eq!(solver.moves(), None);
    assert!(solver.solution().is_empty());
}

#[test]
fn regression_board_takes_26_moves() {
    let initial = board(&[&[7, 8, 4], &[1, 5, 6], &[0, 3, 2]]);
    let solver = Solver::new(initial.clone());
    assert_eq!(solver.moves(), Some(26));
    assert_eq!(solver.solution().len(), 27);
    assert_valid_solution(&initial, &solver);
}

#[test]
fn same_board_gives_same_path() {
    let initial = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
    let first = Solver::new(initial.clone());
    let second = Solver::new(initial);
    assert_eq!(first.moves(), Some(14));
    assert_eq!(first.solution(), second.solution());
    assert_eq!(first.stats(), second.stats());
}

#[test]
fn four_by_four_board() {
    let initial = board(&[
        &[1, 2, 3, 4],
        &[5, 6, 0, 8],
        &[9, 10, 7, 12],
        &[13, 14, 11, 15],
    ]);
    let solver = Solver::new(initial.clone());
    assert_eq!(solver.moves(), Some(3));
    assert_valid_solution(&initial, &solver);
}

#[test]
fn exactly_one_of_board_and_twin_is_solvable() {
    for initial in all_boards(2) {
        let twin = initial.twin();
        let original = Solver::new(initial.clone());
        let shadow = Solver::new(twin);

        assert_ne!(original.is_solvable(), shadow.is_solvable());
        assert_eq!(original.is_solvable(), parity_solvable(&initial));
        if original.is_solvable() {
            assert_valid_solution(&initial, &original);
        } else {
            assert!(original.solution().is_empty());
        }
    }
}

#[test]
fn scrambled_boards_solve_within_their_walk_length() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..20 {
        let initial = Board::scrambled(3, 16, &mut rng);
        let solver = Solver::new(initial.clone());
        assert!(solver.moves().unwrap() <= 16);
        assert_valid_solution(&initial, &solver);
    }
}

#[test]
fn closed_set_agrees_with_plain_search() {
    let mut rng = StdRng::seed_from_u64(99);
    let closed = SolverConfig::default().with_closed_set(true);
    for _ in 0..10 {
        let initial = Board::shuffled(3, &mut rng);
        let plain = Solver::new(initial.clone());
        let pruned = Solver::with_config(initial.clone(), closed);

        assert_eq!(plain.moves(), pruned.moves());
        assert_eq!(plain.is_solvable(), parity_solvable(&initial));
        if pruned.is_solvable() {
            assert_valid_solution(&initial, &pruned);
        }
    }
}

#[test]
fn closed_set_on_tiny_board_with_drained_twin() {
    let closed = SolverConfig::default().with_closed_set(true);
    for initial in all_boards(2) {
        let solver = Solver::with_config(initial.clone(), closed);
        assert_eq!(solver.is_solvable(), parity_solvable(&initial));
        assert_eq!(solver.moves(), Solver::new(initial).moves());
    }
}

#[test]
fn stats_count_both_tracks() {
    let solver = Solver::new(board(&[&[1, 2, 3], &[4, 5, 0], &[7, 8, 6]]));
    let stats = solver.stats();
    assert_eq!(stats.iterations, 2);
    assert!(stats.primary_nodes > 1);
    assert!(stats.shadow_nodes > 1);
}
