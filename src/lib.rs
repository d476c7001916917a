//! A depth-limited agent for playing the board game 'Connect 4'
//!
//! This agent uses alpha-beta minimax search with a heuristic evaluation
//! of the positions at its depth limit to pick a move for the AI side.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{search, Board, Piece, INFINITY};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::new().place(3, Piece::Player)?;
//! let (column, _score) = search(&board, 5, -INFINITY, INFINITY, true);
//!
//! let board = board.place(column.unwrap(), Piece::Ai)?;
//! assert_eq!(board.num_pieces(), 2);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod detector;

pub mod evaluator;

pub mod solver;

pub mod greedy;


pub use board::{Board, Direction, Geometry, Piece};
pub use detector::{has_four_in_a_row, is_terminal, outcome, Outcome};
pub use error::BoardError;
pub use evaluator::{score_position, score_window};
pub use greedy::best_immediate_move;
pub use solver::{SearchResult, Solver, INFINITY, LOSS_SCORE, WIN_SCORE};

/// The width of the standard game board in tiles
pub const WIDTH: usize = 7;

/// The height of the standard game board in tiles
pub const HEIGHT: usize = 6;

/// The number of connected tiles needed to win
pub const WIN_LENGTH: usize = 4;

/// The search depth used when none is configured
pub const DEFAULT_DEPTH: usize = 5;

// a win must be possible along both rows and columns of the standard board
const_assert!(WIN_LENGTH <= WIDTH && WIN_LENGTH <= HEIGHT);
const_assert!(DEFAULT_DEPTH <= WIDTH * HEIGHT);

/// Position and search scores
pub type Score = i64;

/// Searches `board` to `depth` plies within the window `alpha`..`beta`
///
/// With `maximizing` set the AI is to move. Returns the chosen column, or
/// `None` if the position is terminal or `depth` is 0, along with its score.
pub fn search(
    board: &Board,
    depth: usize,
    alpha: Score,
    beta: Score,
    maximizing: bool,
) -> SearchResult {
    Solver::new(board.clone()).alpha_beta(depth, alpha, beta, maximizing)
}

/// How the AI picks its moves
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Strategy {
    /// Full alpha-beta search to a fixed depth
    AlphaBeta { depth: usize, parallel: bool },
    /// Best immediate heuristic score, ignoring replies
    Greedy,
}

impl Strategy {
    /// The column the AI should play, or `None` if it has no move
    pub fn choose(&self, board: &Board) -> Option<usize> {
        match *self {
            Strategy::AlphaBeta { depth, parallel } => {
                // a zero depth search never names a column
                let depth = depth.max(1);
                let mut solver = Solver::new(board.clone());
                let (column, _) = if parallel {
                    solver.solve_parallel(depth)
                } else {
                    solver.solve(depth)
                };
                column
            }
            Strategy::Greedy => best_immediate_move(board, Piece::Ai),
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::AlphaBeta {
            depth: DEFAULT_DEPTH,
            parallel: false,
        }
    }
}
