use std::fmt;

use crate::error::{PermutationError, PuzzleError};
use crate::grid::Grid;
use crate::moves::{is_legal, Move};

/// Current arrangement of tiles on the board.
///
/// `tiles[position]` is the identity of the tile at `position`. The blank's
/// position is cached and always holds `grid.blank_tile()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    tiles: Vec<usize>,
    blank: usize,
}

impl Puzzle {
    /// The solved arrangement: every tile at its home position.
    pub fn solved(grid: Grid) -> Self {
        Self {
            grid,
            tiles: (0..grid.len()).collect(),
            blank: grid.blank_tile(),
        }
    }

    /// Installs `tiles` as the arrangement, checking it is a permutation of `0..N²`.
    pub fn from_tiles(grid: Grid, tiles: Vec<usize>) -> Result<Self, PuzzleError> {
        let len = grid.len();
        if tiles.len() != len {
            return Err(PermutationError::WrongLength {
                expected: len,
                actual: tiles.len(),
            }
            .into());
        }

        let mut seen = vec![false; len];
        for &tile in &tiles {
            if tile >= len {
                return Err(PermutationError::TileOutOfRange { tile, len }.into());
            }
            if seen[tile] {
                return Err(PermutationError::DuplicateTile { tile }.into());
            }
            seen[tile] = true;
        }

        // A bijection over 0..len always contains the blank identity.
        let blank = tiles
            .iter()
            .position(|&tile| tile == grid.blank_tile())
            .unwrap_or(len - 1);

        Ok(Self { grid, tiles, blank })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn tiles(&self) -> &[usize] {
        &self.tiles
    }

    pub fn blank(&self) -> usize {
        self.blank
    }

    /// Slides the tile at `target` into the blank.
    ///
    /// Leaves the arrangement untouched and returns [`PuzzleError::IllegalMove`]
    /// unless `target` is orthogonally adjacent to the blank.
    pub fn apply_move(&mut self, target: usize) -> Result<(), PuzzleError> {
        if !is_legal(&self.grid, target, self.blank) {
            return Err(PuzzleError::IllegalMove {
                position: target,
                blank: self.blank,
            });
        }

        self.tiles.swap(target, self.blank);
        self.blank = target;
        Ok(())
    }

    /// Slides the neighbouring tile in direction `movement`, returning the new blank position.
    pub fn slide(&mut self, movement: Move) -> Result<usize, PuzzleError> {
        let target = self
            .grid
            .offset(self.blank, movement)
            .ok_or(PuzzleError::IllegalMove {
                position: self.blank,
                blank: self.blank,
            })?;
        self.apply_move(target)?;
        Ok(self.blank)
    }

    /// Moves that are currently possible from this arrangement.
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::ALL
            .into_iter()
            .filter(|&movement| self.grid.offset(self.blank, movement).is_some())
            .collect()
    }

    pub fn is_solved(&self) -> bool {
        self.tiles.iter().enumerate().all(|(i, &tile)| tile == i)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.grid.size()) {
            for &val in row {
                if val == self.grid.blank_tile() {
                    write!(f, "   ")?;
                } else {
                    write!(f, "{:2} ", val + 1)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
