//! Engine for an `N x N` sliding-tile puzzle.
//!
//! Tiles are numbered by their home position in row-major order and the
//! highest identity, `N² - 1`, is the blank. A [`Session`] deals a random
//! solvable arrangement and accepts moves until the board is back in order.
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use slide_puzzle::{Move, Session};
//!
//! let mut session = Session::new(3, StdRng::seed_from_u64(42)).unwrap();
//! assert!(!session.is_solved());
//!
//! let result = session.slide(Move::Down);
//! assert_eq!(result.accepted, session.moves() == 1);
//! ```

mod error;
mod grid;
pub mod hud;
mod moves;
mod puzzle;
mod session;
pub mod shuffle;
pub mod solvability;

pub use error::{PermutationError, PuzzleError};
pub use grid::Grid;
pub use moves::{is_legal, Move};
pub use puzzle::Puzzle;
pub use session::{MoveResult, Session};
