#![allow(dead_code)]

use slider_astar::Board;

pub fn board(rows: &[&[u32]]) -> Board {
    Board::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

fn count_inversions(flattened: &[u32]) -> usize {
    flattened
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            flattened[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

/// Inversion parity check, used only as an oracle for the solver.
pub fn parity_solvable(board: &Board) -> bool {
    let inversions = count_inversions(board.tiles());
    let (blank_row, _) = board.blank();

    if board.dimension() % 2 == 1 {
        inversions % 2 == 0
    } else {
        (inversions + blank_row) % 2 == 1
    }
}

/// True when `b` is `a` with the blank swapped into one adjacent cell.
pub fn one_move_apart(a: &Board, b: &Board) -> bool {
    a.neighbors().contains(b)
}

/// Every arrangement of `0..n*n` on an `n x n` board.
pub fn all_boards(n: usize) -> Vec<Board> {
    let mut tiles: Vec<u32> = (0..(n * n) as u32).collect();
    let mut out = Vec::new();
    permute(&mut tiles, 0, n, &mut out);
    out
}

fn permute(tiles: &mut Vec<u32>, k: usize, n: usize, out: &mut Vec<Board>) {
    if k == tiles.len() {
        out.push(Board::from_flat(n, tiles).unwrap());
        return;
    }
    for i in k..tiles.len() {
        tiles.swap(k, i);
        permute(tiles, k + 1, n, out);
        tiles.swap(k, i);
    }
}
