//! A depth-limited alpha-beta agent for Connect 4

use log::debug;
use rayon::prelude::*;

use crate::{
    board::{Board, Piece},
    detector::{has_four_in_a_row, is_terminal},
    evaluator::score_position,
    Score,
};

/// The score of a position the AI has won
pub const WIN_SCORE: Score = 100_000_000_000_000;
/// The score of a position the player has won
pub const LOSS_SCORE: Score = -WIN_SCORE;
/// Bound used for an unbounded search window, `-INFINITY` being its lower end
pub const INFINITY: Score = Score::MAX;

/// A column to play (if any) and the backed-up score of the position
pub type SearchResult = (Option<usize>, Score);

/// An agent to pick moves for the AI
///
/// # Notes
/// The AI is always the maximizing side and the player the minimizing side.
/// The tree is explored in ascending column order to a fixed depth, and
/// positions at the depth limit are scored with [`score_position`].
///
/// # Position Scoring
/// A position won by the AI scores [`WIN_SCORE`], one won by the player
/// [`LOSS_SCORE`] and a full board with no winner 0. Any other position at
/// the depth limit is scored by the heuristic, which never comes close to
/// either bound.
#[derive(Clone)]
pub struct Solver {
    board: Board,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl Solver {
    /// Creates a new `Solver` for a position
    pub fn new(board: Board) -> Self {
        Self {
            board,
            node_count: 0,
        }
    }

    /// Scores a position the search will not expand any further
    fn leaf_score(board: &Board) -> Score {
        if has_four_in_a_row(board, Piece::Ai) {
            WIN_SCORE
        } else if has_four_in_a_row(board, Piece::Player) {
            LOSS_SCORE
        } else if board.legal_moves().is_empty() {
            0
        } else {
            score_position(board, Piece::Ai)
        }
    }

    /// Performs alpha-beta search of the position to `depth` plies
    ///
    /// Returns the best column for the side to move (`None` at a leaf) and its score
    pub fn alpha_beta(
        &mut self,
        depth: usize,
        alpha: Score,
        beta: Score,
        maximizing: bool,
    ) -> SearchResult {
        let board = self.board.clone();
        self.alpha_beta_node(&board, depth, alpha, beta, maximizing)
    }

    fn alpha_beta_node(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> SearchResult {
        self.node_count += 1;

        let legal_moves = board.legal_moves();
        if depth == 0 || is_terminal(board) {
            return (None, Self::leaf_score(board));
        }

        // only kept if no move ever improves on the initial bound
        let mut column = legal_moves[0];

        if maximizing {
            let mut value = -INFINITY;
            for &candidate in legal_moves.iter() {
                let mut next = board.clone();
                next.play(candidate, Piece::Ai);
                let (_, score) = self.alpha_beta_node(&next, depth - 1, alpha, beta, false);

                if score > value {
                    value = score;
                    column = candidate;
                }
                alpha = alpha.max(value);
                // the minimizing ancestor already has a better option
                if alpha >= beta {
                    break;
                }
            }
            (Some(column), value)
        } else {
            let mut value = INFINITY;
            for &candidate in legal_moves.iter() {
                let mut next = board.clone();
                next.play(candidate, Piece::Player);
                let (_, score) = self.alpha_beta_node(&next, depth - 1, alpha, beta, true);

                if score < value {
                    value = score;
                    column = candidate;
                }
                beta = beta.min(value);
                // the maximizing ancestor already has a better option
                if alpha >= beta {
                    break;
                }
            }
            (Some(column), value)
        }
    }

    /// Performs plain minimax search without pruning
    ///
    /// Always returns the same score as [`Solver::alpha_beta`] with an unbounded
    /// window, at the cost of visiting every node. Used to check the pruning.
    pub fn minimax(&mut self, depth: usize, maximizing: bool) -> SearchResult {
        let board = self.board.clone();
        self.minimax_node(&board, depth, maximizing)
    }

    fn minimax_node(&mut self, board: &Board, depth: usize, maximizing: bool) -> SearchResult {
        self.node_count += 1;

        let legal_moves = board.legal_moves();
        if depth == 0 || is_terminal(board) {
            return (None, Self::leaf_score(board));
        }

        let (piece, mut value) = if maximizing {
            (Piece::Ai, -INFINITY)
        } else {
            (Piece::Player, INFINITY)
        };
        let mut column = legal_moves[0];
        for &candidate in legal_moves.iter() {
            let mut next = board.clone();
            next.play(candidate, piece);
            let (_, score) = self.minimax_node(&next, depth - 1, !maximizing);

            let improved = if maximizing {
                score > value
            } else {
                score < value
            };
            if improved {
                value = score;
                column = candidate;
            }
        }
        (Some(column), value)
    }

    /// Calculate the best AI move and score of the current position
    pub fn solve(&mut self, depth: usize) -> SearchResult {
        let (column, score) = self.alpha_beta(depth, -INFINITY, INFINITY, true);
        debug!(
            "depth {} search: {} nodes, best column {:?}, score {}",
            depth, self.node_count, column, score
        );
        (column, score)
    }

    /// Calculate the best AI move and score of the current position,
    /// searching the root moves on the rayon thread pool
    ///
    /// Each root move is searched with a full window, so this visits more nodes
    /// than [`Solver::solve`] but returns the same column and score.
    pub fn solve_parallel(&mut self, depth: usize) -> SearchResult {
        self.node_count += 1;
        if depth == 0 || is_terminal(&self.board) {
            return (None, Self::leaf_score(&self.board));
        }

        let board = &self.board;
        let children: Vec<(usize, Score, usize)> = board
            .legal_moves()
            .into_par_iter()
            .map(|column| {
                let mut next = board.clone();
                next.play(column, Piece::Ai);
                let mut solver = Solver::new(next);
                let (_, score) = solver.alpha_beta(depth - 1, -INFINITY, INFINITY, false);
                (column, score, solver.node_count)
            })
            .collect();

        // keep the first column reaching the best score, as the sequential search does
        let mut best: Option<(usize, Score)> = None;
        for &(column, score, nodes) in children.iter() {
            self.node_count += nodes;
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((column, score));
            }
        }

        let (column, score) = match best {
            Some((column, score)) => (Some(column), score),
            None => (None, Self::leaf_score(&self.board)),
        };
        debug!(
            "parallel depth {} search: {} nodes, best column {:?}, score {}",
            depth, self.node_count, column, score
        );
        (column, score)
    }
}

impl std::ops::Deref for Solver {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &self.board
    }
}
