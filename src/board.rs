use crate::error::{BoardError, Result};
use rand::{seq::SliceRandom, Rng};
use std::fmt;

/// Direction the blank travels when it trades places with a neighbouring tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
}

impl Move {
    /// Every move, in the order [`Board::neighbors`] produces successors.
    pub const ALL: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Left => (0, -1),
            Move::Right => (0, 1),
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// Immutable snapshot of an `n x n` sliding puzzle; `0` is the blank.
///
/// Tiles are stored row-major. Every transformation returns a fresh board,
/// so a `Board` can be shared freely between search nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<u32>,
    blank: usize,
}

impl Board {
    /// Builds a board from its rows, checking that they form a valid
    /// permutation of `0..n*n` on a square grid.
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(BoardError::Empty);
        }

        let size = rows.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    expected: size,
                    found: cells.len(),
                });
            }
        }

        let tiles: Vec<u32> = rows.into_iter().flatten().collect();
        let max = (tiles.len() - 1) as u32;
        let mut seen = vec![false; tiles.len()];
        for &value in &tiles {
            if value > max {
                return Err(BoardError::ValueOutOfRange { value, max });
            }
            if std::mem::replace(&mut seen[value as usize], true) {
                return Err(BoardError::DuplicateValue { value });
            }
        }

        Ok(Self::from_tiles(size, tiles))
    }

    /// Same as [`Board::new`] for a row-major slice of `dimension * dimension` tiles.
    pub fn from_flat(dimension: usize, tiles: &[u32]) -> Result<Self> {
        if dimension == 0 || tiles.is_empty() {
            return Err(BoardError::Empty);
        }
        if tiles.len() != dimension * dimension {
            return Err(BoardError::WrongLength {
                dimension,
                expected: dimension * dimension,
                found: tiles.len(),
            });
        }
        Self::new(tiles.chunks(dimension).map(<[u32]>::to_vec).collect())
    }

    /// The solved layout: `1..n*n` in reading order, blank last.
    ///
    /// # Panics
    ///
    /// If `dimension` is 0. [`scrambled`](Board::scrambled) and
    /// [`shuffled`](Board::shuffled) start from here and panic the same way.
    pub fn goal(dimension: usize) -> Self {
        assert!(dimension > 0, "board dimension must be at least 1");
        let cells = dimension * dimension;
        let tiles = (1..=cells as u32).map(|v| v % cells as u32).collect();
        Self::from_tiles(dimension, tiles)
    }

    /// Random walk of `steps` blank moves away from the goal. The walk never
    /// undoes its previous move, and the result is always solvable.
    pub fn scrambled<R: Rng + ?Sized>(dimension: usize, steps: usize, rng: &mut R) -> Self {
        let mut board = Self::goal(dimension);
        let mut last: Option<Move> = None;

        for _ in 0..steps {
            let candidates: Vec<(Move, Board)> = Move::ALL
                .iter()
                .filter(|&&dir| last.map_or(true, |l| dir != l.opposite()))
                .filter_map(|&dir| board.slide(dir).map(|next| (dir, next)))
                .collect();

            match candidates.choose(rng) {
                Some((dir, next)) => {
                    last = Some(*dir);
                    board = next.clone();
                }
                None => break,
            }
        }

        board
    }

    /// Uniformly random arrangement. Half of these cannot be solved.
    pub fn shuffled<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Self {
        let mut tiles = Self::goal(dimension).tiles;
        tiles.shuffle(rng);
        Self::from_tiles(dimension, tiles)
    }

    fn from_tiles(size: usize, tiles: Vec<u32>) -> Self {
        let blank = tiles
            .iter()
            .position(|&t| t == 0)
            .expect("validated boards always hold a blank");
        Self { size, tiles, blank }
    }

    pub fn dimension(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.tiles[row * self.size + col]
    }

    /// `(row, col)` of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    /// Dimension on the first line, then one line of space separated tiles per row.
    pub fn serialize(&self) -> String {
        let mut out = format!("{}\n", self.size);
        for row in self.tiles.chunks(self.size) {
            let line: Vec<String> = row.iter().map(u32::to_string).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }

    /// Number of tiles, blank excluded, that are not where the goal wants them.
    pub fn hamming(&self) -> usize {
        let cells = self.tiles.len();
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(i, &value)| value != 0 && value as usize != (i + 1) % cells)
            .count()
    }

    /// Sum of each tile's row and column distance from its goal cell.
    pub fn manhattan(&self) -> usize {
        let size = self.size as u32;
        let mut distance = 0;
        for (i, &value) in self.tiles.iter().enumerate() {
            if value != 0 {
                let (row, col) = (i / self.size, i % self.size);
                let target_row = ((value - 1) / size) as usize;
                let target_col = ((value - 1) % size) as usize;
                distance += row.abs_diff(target_row) + col.abs_diff(target_col);
            }
        }
        distance
    }

    pub fn is_goal(&self) -> bool {
        self.hamming() == 0
    }

    /// Board reached by sliding the blank one cell in `dir`, if it stays on the grid.
    pub fn slide(&self, dir: Move) -> Option<Self> {
        let (row, col) = self.blank();
        let (dr, dc) = dir.as_offset();

        let new_row = row.checked_add_signed(dr).filter(|&r| r < self.size)?;
        let new_col = col.checked_add_signed(dc).filter(|&c| c < self.size)?;

        let target = new_row * self.size + new_col;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);

        Some(Self {
            size: self.size,
            tiles,
            blank: target,
        })
    }

    /// Every board one blank move away, ordered left, right, up, down.
    pub fn neighbors(&self) -> Vec<Self> {
        Move::ALL.iter().filter_map(|&dir| self.slide(dir)).collect()
    }

    /// Copy with one pair of non-blank tiles in the first two rows swapped.
    /// Exactly one of a board and its twin can reach the goal.
    ///
    /// # Panics
    ///
    /// If the board is smaller than 2x2.
    pub fn twin(&self) -> Self {
        assert!(self.size >= 2, "twin needs a board of at least 2x2");

        let (a, b) = match (self.tiles[0], self.tiles[1]) {
            (0, _) => (1, self.size),
            (_, 0) => (0, self.size),
            _ => (0, 1),
        };

        let mut tiles = self.tiles.clone();
        tiles.swap(a, b);
        Self::from_tiles(self.size, tiles)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();
        for row in self.tiles.chunks(self.size) {
            for &val in row {
                write!(f, "{:width$} ", val, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
