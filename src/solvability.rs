use crate::grid::Grid;

/// Number of pairs `i < j` with `tiles[i] > tiles[j]`, ignoring `blank`.
pub fn count_inversions(tiles: &[usize], blank: usize) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != blank)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != blank && next < val)
                .count()
        })
        .sum()
}

/// Whether `tiles` can be reached from the solved arrangement by sliding moves.
///
/// For odd sizes the inversion count must be even. For even sizes the parity
/// of the inversion count must differ from the parity of the blank's row,
/// counted from 1 at the bottom.
///
/// `tiles` must be a permutation of `0..grid.len()`.
pub fn is_solvable(tiles: &[usize], grid: &Grid) -> bool {
    let blank_tile = grid.blank_tile();
    let inversions = count_inversions(tiles, blank_tile);

    if grid.size() % 2 == 1 {
        return inversions % 2 == 0;
    }

    let blank_position = match tiles.iter().position(|&tile| tile == blank_tile) {
        Some(position) => position,
        None => return false,
    };
    let blank_row_from_bottom = grid.size() - grid.row_of(blank_position);

    if blank_row_from_bottom % 2 == 0 {
        inversions % 2 == 1
    } else {
        inversions % 2 == 0
    }
}
