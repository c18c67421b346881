use thiserror::Error;

/// Reasons a tile sequence is not a valid arrangement for a grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    #[error("expected {expected} tiles, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("tile {tile} is outside 0..{len}")]
    TileOutOfRange { tile: usize, len: usize },
    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: usize },
}

/// Errors raised by the puzzle engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// A grid needs at least 2x2 cells to have any legal move.
    #[error("grid size {0} is too small, the minimum is 2")]
    DegenerateGrid(usize),
    #[error("grid size {0} is too large")]
    GridTooLarge(usize),
    #[error("invalid permutation: {0}")]
    InvalidPermutation(#[from] PermutationError),
    /// The requested tile is not orthogonally next to the blank.
    #[error("position {position} is not adjacent to the blank at {blank}")]
    IllegalMove { position: usize, blank: usize },
}
