use log::{debug, trace};
use rand::{seq::SliceRandom, Rng};

use crate::grid::Grid;
use crate::solvability::is_solvable;

/// Uniformly random arrangement that is solvable and not already solved.
///
/// Reshuffles until both conditions hold. There is no retry cap: about half
/// of all arrangements are solvable, so few attempts are ever needed.
pub fn generate<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Vec<usize> {
    let mut tiles: Vec<usize> = (0..grid.len()).collect();
    let mut attempts: u64 = 0;

    loop {
        tiles.shuffle(rng);
        attempts += 1;

        if is_solved(&tiles) {
            trace!("shuffle attempt {} produced the solved arrangement", attempts);
            continue;
        }
        if is_solvable(&tiles, grid) {
            break;
        }
        trace!("shuffle attempt {} is unsolvable", attempts);
    }

    debug!(
        "generated {}x{} arrangement after {} attempt(s)",
        grid.size(),
        grid.size(),
        attempts
    );
    tiles
}

fn is_solved(tiles: &[usize]) -> bool {
    tiles.iter().enumerate().all(|(i, &tile)| tile == i)
}
