//! Optimal solver for `n x n` sliding puzzles.
//!
//! [`Board`] is an immutable puzzle state with its distance heuristics and
//! successor generation. [`Solver`] runs A* over a board and its twin side by
//! side to find a shortest solution or show that none exists.

pub mod board;
pub mod config;
pub mod error;
pub mod solver;

pub use board::{Board, Move};
pub use config::SolverConfig;
pub use error::{BoardError, Result};
pub use solver::{SearchStats, Solver};
