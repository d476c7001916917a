//! Win and end-of-game detection

use crate::board::{Board, Direction, Piece};

/// The state of a game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Ongoing,
    PlayerWins,
    AiWins,
    Draw,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Whether `piece` has a full window of connected pieces in any direction
pub fn has_four_in_a_row(board: &Board, piece: Piece) -> bool {
    if piece.is_empty() {
        return false;
    }
    let geometry = board.geometry();
    Direction::ALL.iter().any(|&direction| {
        geometry
            .anchors(direction)
            .any(|anchor| board.window(anchor, direction).all(|cell| cell == piece))
    })
}

/// Whether the game has ended, either by a win or by a full board
pub fn is_terminal(board: &Board) -> bool {
    has_four_in_a_row(board, Piece::Player)
        || has_four_in_a_row(board, Piece::Ai)
        || board.legal_moves().is_empty()
}

/// Classifies a position. An AI win takes precedence if both sides are connected.
pub fn outcome(board: &Board) -> Outcome {
    if has_four_in_a_row(board, Piece::Ai) {
        Outcome::AiWins
    } else if has_four_in_a_row(board, Piece::Player) {
        Outcome::PlayerWins
    } else if board.legal_moves().is_empty() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
