/// Errors reported by board operations
///
/// All of these are caller mistakes: the core never retries or recovers from them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {column} out of range, columns must be between 0 and {}", .cols - 1)]
    InvalidColumn { column: usize, cols: usize },

    #[error("illegal move, column {0} is full")]
    IllegalMove(usize),

    #[error("cannot place an empty piece")]
    EmptyPiece,

    #[error("invalid board geometry: {rows}x{cols} with win length {win_length}")]
    InvalidGeometry {
        rows: usize,
        cols: usize,
        win_length: usize,
    },

    #[error("could not parse '{0}' as a valid move")]
    InvalidMoveString(char),

    #[error("invalid position, game is already over")]
    GameOver,
}
