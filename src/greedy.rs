//! One-ply move selection

use log::trace;

use crate::{
    board::{Board, Piece},
    evaluator::score_position,
    Score,
};

/// The column whose resulting position scores highest for `piece`,
/// ignoring any reply. `None` if the board is full.
///
/// Ties go to the lowest column.
pub fn best_immediate_move(board: &Board, piece: Piece) -> Option<usize> {
    let mut best: Option<(usize, Score)> = None;

    for column in board.legal_moves() {
        let mut next = board.clone();
        next.play(column, piece);
        let score = score_position(&next, piece);
        trace!("greedy candidate column {} scores {}", column, score);

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((column, score));
        }
    }
    best.map(|(column, _)| column)
}
