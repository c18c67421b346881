use std::fmt;

use crate::grid::Grid;

/// Direction a tile slides into the blank.
///
/// `Up` takes the tile below the blank, `Left` the tile to its right, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Left, Move::Down, Move::Right];

    /// `(row, col)` offset from the blank to the tile that moves.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (1, 0),
            Move::Left => (0, 1),
            Move::Down => (-1, 0),
            Move::Right => (0, -1),
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

/// Whether the tile at `candidate` may slide into the blank at `blank`.
///
/// Legal exactly when both positions are on the board and one orthogonal
/// step apart. Diagonals and row wrap-around have distance of at least 2.
pub fn is_legal(grid: &Grid, candidate: usize, blank: usize) -> bool {
    grid.contains(candidate)
        && grid.contains(blank)
        && grid.manhattan_distance(candidate, blank) == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for movement in Move::ALL {
            assert_ne!(movement, movement.opposite());
            assert_eq!(movement, movement.opposite().opposite());
        }
    }

    #[test]
    fn two_by_two_adjacency() {
        let grid = Grid::new(2).unwrap();
        // 0 1
        // 2 3
        assert!(is_legal(&grid, 1, 3));
        assert!(is_legal(&grid, 2, 3));
        assert!(!is_legal(&grid, 0, 3));
        assert!(!is_legal(&grid, 3, 3));

        assert!(is_legal(&grid, 0, 2));
        assert!(is_legal(&grid, 3, 2));
        assert!(!is_legal(&grid, 1, 2));
    }

    #[test]
    fn no_wrap_around_between_rows() {
        let grid = Grid::new(3).unwrap();
        assert!(!is_legal(&grid, 2, 3));
        assert!(!is_legal(&grid, 3, 2));
        assert!(is_legal(&grid, 2, 5));
    }

    #[test]
    fn off_board_positions_are_never_legal() {
        let grid = Grid::new(3).unwrap();
        assert!(!is_legal(&grid, 9, 8));
        assert!(!is_legal(&grid, 8, 9));
    }

    #[test]
    fn legal_iff_neighbor() {
        let grid = Grid::new(4).unwrap();
        for blank in 0..grid.len() {
            let neighbors: Vec<_> = grid.neighbors(blank).collect();
            for candidate in 0..grid.len() {
                assert_eq!(
                    is_legal(&grid, candidate, blank),
                    neighbors.contains(&candidate),
                    "candidate {} blank {}",
                    candidate,
                    blank
                );
            }
        }
    }
}
