use crate::error::PuzzleError;
use crate::moves::Move;

/// Geometry of an `N x N` board with positions numbered row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
}

impl Grid {
    /// Creates the geometry for a board of side `size`.
    ///
    /// Fails with [`PuzzleError::DegenerateGrid`] when `size < 2`.
    pub fn new(size: usize) -> Result<Self, PuzzleError> {
        if size < 2 {
            return Err(PuzzleError::DegenerateGrid(size));
        }
        if size.checked_mul(size).is_none() {
            return Err(PuzzleError::GridTooLarge(size));
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells, `N²`.
    pub fn len(&self) -> usize {
        self.size * self.size
    }

    /// The reserved identity of the blank tile, `N² - 1`.
    pub fn blank_tile(&self) -> usize {
        self.len() - 1
    }

    pub fn contains(&self, position: usize) -> bool {
        position < self.len()
    }

    /// Returns `(col, row)` for a position.
    pub fn coordinates(&self, position: usize) -> (usize, usize) {
        (position % self.size, position / self.size)
    }

    pub fn position(&self, col: usize, row: usize) -> Option<usize> {
        if col < self.size && row < self.size {
            Some(row * self.size + col)
        } else {
            None
        }
    }

    pub fn row_of(&self, position: usize) -> usize {
        position / self.size
    }

    pub fn manhattan_distance(&self, a: usize, b: usize) -> usize {
        let (ax, ay) = self.coordinates(a);
        let (bx, by) = self.coordinates(b);
        ax.abs_diff(bx) + ay.abs_diff(by)
    }

    /// The cell one step from `position` along the offset of `movement`, if it is on the board.
    pub fn offset(&self, position: usize, movement: Move) -> Option<usize> {
        let (col, row) = self.coordinates(position);
        let (d_row, d_col) = movement.as_offset();

        let new_row = row as isize + d_row;
        let new_col = col as isize + d_col;

        if new_row < 0 || new_col < 0 {
            return None;
        }
        self.position(new_col as usize, new_row as usize)
    }

    /// All orthogonal neighbours of `position`.
    pub fn neighbors(&self, position: usize) -> impl Iterator<Item = usize> + '_ {
        Move::ALL
            .into_iter()
            .filter_map(move |movement| self.offset(position, movement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_sizes() {
        assert_eq!(Grid::new(0), Err(PuzzleError::DegenerateGrid(0)));
        assert_eq!(Grid::new(1), Err(PuzzleError::DegenerateGrid(1)));
        assert!(Grid::new(2).is_ok());
    }

    #[test]
    fn rejects_overflowing_sizes() {
        assert_eq!(
            Grid::new(usize::MAX),
            Err(PuzzleError::GridTooLarge(usize::MAX))
        );
    }

    #[test]
    fn coordinates_are_row_major() {
        let grid = Grid::new(4).unwrap();
        assert_eq!(grid.coordinates(0), (0, 0));
        assert_eq!(grid.coordinates(3), (3, 0));
        assert_eq!(grid.coordinates(4), (0, 1));
        assert_eq!(grid.coordinates(14), (2, 3));

        for position in 0..grid.len() {
            let (col, row) = grid.coordinates(position);
            assert_eq!(grid.position(col, row), Some(position));
        }
        assert_eq!(grid.position(4, 0), None);
    }

    #[test]
    fn manhattan_distance_counts_orthogonal_steps() {
        let grid = Grid::new(3).unwrap();
        assert_eq!(grid.manhattan_distance(0, 0), 0);
        assert_eq!(grid.manhattan_distance(0, 1), 1);
        assert_eq!(grid.manhattan_distance(0, 3), 1);
        assert_eq!(grid.manhattan_distance(0, 4), 2);
        assert_eq!(grid.manhattan_distance(0, 8), 4);
        // End of one row and start of the next are not neighbours.
        assert_eq!(grid.manhattan_distance(2, 3), 3);
    }

    #[test]
    fn neighbors_stay_on_the_board() {
        let grid = Grid::new(3).unwrap();

        let mut corner: Vec<_> = grid.neighbors(0).collect();
        corner.sort();
        assert_eq!(corner, vec![1, 3]);

        let mut center: Vec<_> = grid.neighbors(4).collect();
        center.sort();
        assert_eq!(center, vec![1, 3, 5, 7]);

        let mut edge: Vec<_> = grid.neighbors(5).collect();
        edge.sort();
        assert_eq!(edge, vec![2, 4, 8]);
    }
}
