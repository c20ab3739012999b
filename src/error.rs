use thiserror::Error;

/// Reasons a grid cannot become a [`Board`](crate::board::Board).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("a {dimension}x{dimension} board needs {expected} tiles, got {found}")]
    WrongLength {
        dimension: usize,
        expected: usize,
        found: usize,
    },
    #[error("tile {value} is outside 0..={max}")]
    ValueOutOfRange { value: u32, max: u32 },
    #[error("tile {value} appears more than once")]
    DuplicateValue { value: u32 },
    #[error("a {dimension}x{dimension} board has no twin, dimension must be at least 2")]
    TooSmall { dimension: usize },
}

pub type Result<T> = std::result::Result<T, BoardError>;
