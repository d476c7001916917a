//! Heuristic scoring of non-terminal positions
//!
//! A position is scored by sliding a window of `win_length` cells over every
//! row, column and diagonal, scoring the contents of each window, and adding a
//! bonus for pieces in the center column.

use crate::{
    board::{Board, Direction, Piece},
    Score,
};

/// A complete window of the scoring side
pub const CONNECTED_SCORE: Score = 100;
/// One piece short of a complete window, with the last cell open
pub const THREE_OPEN_SCORE: Score = 5;
/// Two pieces short of a complete window, with the rest open
pub const TWO_OPEN_SCORE: Score = 2;
/// The opponent is one piece short of a complete window
pub const OPPONENT_THREE_OPEN_SCORE: Score = -4;
/// Score per piece in the center column
pub const CENTER_WEIGHT: Score = 3;

/// Scores a single window of cells from the point of view of `piece`
pub fn score_window(window: &[Piece], piece: Piece) -> Score {
    let length = window.len();
    let own = window.iter().filter(|&&cell| cell == piece).count();
    let opponent = window
        .iter()
        .filter(|&&cell| cell == piece.opponent())
        .count();
    let empty = window.iter().filter(|cell| cell.is_empty()).count();

    let mut score = 0;
    if own == length {
        score += CONNECTED_SCORE;
    } else if own + 1 == length && empty == 1 {
        score += THREE_OPEN_SCORE;
    } else if own > 0 && own + 2 == length && empty == 2 {
        score += TWO_OPEN_SCORE;
    }

    if opponent + 1 == length && empty == 1 {
        score += OPPONENT_THREE_OPEN_SCORE;
    }
    score
}

/// Scores a position from the point of view of `piece`
///
/// Only meaningful for positions that are not terminal; finished games are
/// scored by the search itself.
pub fn score_position(board: &Board, piece: Piece) -> Score {
    let geometry = board.geometry();

    let center_count = board
        .column(geometry.center_column())
        .filter(|&cell| cell == piece)
        .count();
    let mut score = CENTER_WEIGHT * center_count as Score;

    // reused between windows to avoid allocating in the search's leaves
    let mut window = Vec::with_capacity(geometry.win_length());
    for &direction in Direction::ALL.iter() {
        for anchor in geometry.anchors(direction) {
            window.clear();
            window.extend(board.window(anchor, direction));
            score += score_window(&window, piece);
        }
    }
    score
}
