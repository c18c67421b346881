use std::time::Duration;

use log::{debug, info};
use rand::Rng;

use crate::error::PuzzleError;
use crate::grid::Grid;
use crate::hud::{Clock, Summary};
use crate::moves::Move;
use crate::puzzle::Puzzle;
use crate::shuffle;

/// Outcome of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub accepted: bool,
    /// Blank position after the request, unchanged when rejected.
    pub blank: usize,
    pub solved: bool,
}

/// One player's game: the live arrangement, the arrangement it was dealt
/// with, and the move counter and clock.
///
/// The session owns its random source so every new game draws from it.
#[derive(Debug)]
pub struct Session<R> {
    puzzle: Puzzle,
    original: Puzzle,
    moves: u32,
    clock: Clock,
    rng: R,
}

impl<R: Rng> Session<R> {
    /// Deals the first game on an `size x size` board.
    pub fn new(size: usize, mut rng: R) -> Result<Self, PuzzleError> {
        let puzzle = deal(size, &mut rng)?;
        Ok(Self {
            original: puzzle.clone(),
            puzzle,
            moves: 0,
            clock: Clock::start(),
            rng,
        })
    }

    /// Replaces the current game with a fresh shuffle, possibly of a new size.
    ///
    /// On error the current game is kept.
    pub fn new_game(&mut self, size: usize) -> Result<(&[usize], usize), PuzzleError> {
        let puzzle = deal(size, &mut self.rng)?;
        self.original = puzzle.clone();
        self.puzzle = puzzle;
        self.reset_counters();
        Ok((self.puzzle.tiles(), self.puzzle.blank()))
    }

    /// Returns to the arrangement dealt by the most recent new game.
    pub fn restart(&mut self) {
        debug!("restarting after {} moves", self.moves);
        self.puzzle = self.original.clone();
        self.reset_counters();
    }

    /// Slides the tile at `position` into the blank if they are adjacent.
    pub fn attempt_move(&mut self, position: usize) -> MoveResult {
        let accepted = match self.puzzle.apply_move(position) {
            Ok(()) => true,
            Err(err) => {
                debug!("rejected move: {}", err);
                false
            }
        };
        self.finish_move(accepted)
    }

    /// Slides the tile next to the blank in `movement`'s direction, if there is one.
    pub fn slide(&mut self, movement: Move) -> MoveResult {
        let accepted = match self.puzzle.slide(movement) {
            Ok(_) => true,
            Err(_) => {
                debug!("no tile can slide {}", movement);
                false
            }
        };
        self.finish_move(accepted)
    }

    pub fn is_solved(&self) -> bool {
        self.puzzle.is_solved()
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// The arrangement `restart` returns to.
    pub fn original(&self) -> &Puzzle {
        &self.original
    }

    pub fn grid(&self) -> Grid {
        self.puzzle.grid()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    /// The win summary, once the puzzle is solved.
    pub fn summary(&self) -> Option<Summary> {
        if !self.is_solved() {
            return None;
        }
        Some(Summary {
            size: self.grid().size(),
            moves: self.moves,
            seconds: self.elapsed().as_secs(),
        })
    }

    fn finish_move(&mut self, accepted: bool) -> MoveResult {
        let solved = self.puzzle.is_solved();
        if accepted {
            self.moves += 1;
            if solved && self.clock.is_running() {
                self.clock.stop();
                info!(
                    "solved {0}x{0} in {1} moves",
                    self.grid().size(),
                    self.moves
                );
            }
        }
        MoveResult {
            accepted,
            blank: self.puzzle.blank(),
            solved,
        }
    }

    fn reset_counters(&mut self) {
        self.moves = 0;
        self.clock = Clock::start();
    }
}

fn deal<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Puzzle, PuzzleError> {
    let grid = Grid::new(size)?;
    let tiles = shuffle::generate(&grid, rng);
    let puzzle = Puzzle::from_tiles(grid, tiles)?;
    debug!("new {0}x{0} game, blank at {1}", size, puzzle.blank());
    Ok(puzzle)
}
