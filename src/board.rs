//! The game board value and the operations that derive new positions from it

use std::fmt;

use crate::{detector::has_four_in_a_row, error::BoardError, HEIGHT, WIDTH, WIN_LENGTH};

/// The contents of a single board cell
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Piece {
    Empty,
    Player,
    Ai,
}

impl Piece {
    pub fn is_empty(&self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// The other side's piece. `Empty` has no opponent and maps to itself.
    pub fn opponent(&self) -> Piece {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
            Piece::Empty => Piece::Empty,
        }
    }

    fn symbol(&self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::Player => 'X',
            Piece::Ai => 'O',
        }
    }
}

/// The four line directions along which pieces can connect
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    /// rightward along a row
    Horizontal,
    /// upward along a column
    Vertical,
    /// up and to the right
    DiagonalUp,
    /// down and to the right (equivalently up and to the left)
    DiagonalDown,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    /// Row and column step of the direction
    fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalUp => (1, 1),
            Direction::DiagonalDown => (-1, 1),
        }
    }
}

/// Dimensions of a board and the number of connected pieces needed to win
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Geometry {
    rows: usize,
    cols: usize,
    win_length: usize,
}

impl Geometry {
    /// The standard 6 row, 7 column, connect-4 board
    pub const STANDARD: Geometry = Geometry {
        rows: HEIGHT,
        cols: WIDTH,
        win_length: WIN_LENGTH,
    };

    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 || win_length < 2 || (win_length > rows && win_length > cols)
        {
            return Err(BoardError::InvalidGeometry {
                rows,
                cols,
                win_length,
            });
        }
        Ok(Self {
            rows,
            cols,
            win_length,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn num_cells(&self) -> usize {
        self.rows * self.cols
    }

    /// The column that participates in the most lines
    pub fn center_column(&self) -> usize {
        self.cols / 2
    }

    pub fn check_column(&self, column: usize) -> Result<(), BoardError> {
        if column >= self.cols {
            return Err(BoardError::InvalidColumn {
                column,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Every `(row, column)` cell from which a full window fits in `direction`
    pub fn anchors(&self, direction: Direction) -> impl Iterator<Item = (usize, usize)> {
        let span = self.win_length - 1;
        let rows = match direction.delta().0 {
            1 => 0..self.rows.saturating_sub(span),
            -1 => span.min(self.rows)..self.rows,
            _ => 0..self.rows,
        };
        let cols = match direction.delta().1 {
            1 => 0..self.cols.saturating_sub(span),
            _ => 0..self.cols,
        };
        rows.flat_map(move |row| cols.clone().map(move |column| (row, column)))
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A board position
///
/// # Notes
/// A `Board` is a value: operations that make a move return a new board and
/// never modify the one they were called on. Row 0 is the bottom of the board,
/// and pieces always rest on the lowest empty row of their column.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    geometry: Geometry,
    cells: Vec<Piece>, // cells are stored left-to-right, bottom-to-top
}

impl Board {
    /// Creates an empty standard board
    pub fn new() -> Self {
        Self::with_geometry(Geometry::STANDARD)
    }

    /// Creates an empty board with the given dimensions
    pub fn with_geometry(geometry: Geometry) -> Self {
        Self {
            geometry,
            cells: vec![Piece::Empty; geometry.num_cells()],
        }
    }

    /// Creates a standard board from a string of 1-indexed column digits,
    /// alternating pieces starting with `first`
    pub fn from_moves<S: AsRef<str>>(moves: S, first: Piece) -> Result<Self, BoardError> {
        let mut board = Self::new();
        let mut piece = first;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    // abort if the position is won at any point
                    if has_four_in_a_row(&board, piece.opponent()) {
                        return Err(BoardError::GameOver);
                    }
                    board = board.place(column - 1, piece)?;
                    piece = piece.opponent();
                }
                _ => return Err(BoardError::InvalidMoveString(column_char)),
            }
        }
        Ok(board)
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// The piece at `row`, `column`, or `None` if the cell lies outside the board
    pub fn get(&self, row: usize, column: usize) -> Option<Piece> {
        if row < self.geometry.rows && column < self.geometry.cols {
            Some(self.cell(row, column))
        } else {
            None
        }
    }

    // the cell must lie on the board
    fn cell(&self, row: usize, column: usize) -> Piece {
        self.cells[column + self.geometry.cols * row]
    }

    /// The lowest empty row of `column`, or `None` if the column is full
    pub fn lowest_open_row(&self, column: usize) -> Result<Option<usize>, BoardError> {
        self.geometry.check_column(column)?;
        Ok((0..self.geometry.rows).find(|&row| self.cell(row, column).is_empty()))
    }

    /// Whether a piece can be dropped into `column`
    pub fn playable(&self, column: usize) -> bool {
        column < self.geometry.cols && self.cell(self.geometry.rows - 1, column).is_empty()
    }

    /// Every playable column in ascending order. Empty once the board is full.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.geometry.cols)
            .filter(|&column| self.playable(column))
            .collect()
    }

    /// Returns a new board with `piece` dropped into `column`
    pub fn place(&self, column: usize, piece: Piece) -> Result<Board, BoardError> {
        if piece.is_empty() {
            return Err(BoardError::EmptyPiece);
        }
        let row = self
            .lowest_open_row(column)?
            .ok_or(BoardError::IllegalMove(column))?;

        let mut next = self.clone();
        next.set(row, column, piece);
        Ok(next)
    }

    /// Drops `piece` into `column` of this board in place.
    /// The column must be playable.
    pub(crate) fn play(&mut self, column: usize, piece: Piece) {
        debug_assert!(self.playable(column));
        if let Some(row) = (0..self.geometry.rows).find(|&row| self.cell(row, column).is_empty()) {
            self.set(row, column, piece);
        }
    }

    fn set(&mut self, row: usize, column: usize, piece: Piece) {
        debug_assert!(!piece.is_empty());
        self.cells[column + self.geometry.cols * row] = piece;
    }

    /// The pieces of the window of `win_length` cells starting at `anchor`.
    /// `anchor` must come from [`Geometry::anchors`] for the same direction.
    pub(crate) fn window(
        &self,
        anchor: (usize, usize),
        direction: Direction,
    ) -> impl Iterator<Item = Piece> + '_ {
        let (row, column) = anchor;
        let (d_row, d_column) = direction.delta();
        (0..self.geometry.win_length as isize).map(move |i| {
            self.cell(
                (row as isize + d_row * i) as usize,
                (column as isize + d_column * i) as usize,
            )
        })
    }

    /// The pieces of `column` from bottom to top. `column` must lie on the board.
    pub(crate) fn column(&self, column: usize) -> impl Iterator<Item = Piece> + '_ {
        (0..self.geometry.rows).map(move |row| self.cell(row, column))
    }

    pub fn num_pieces(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.legal_moves().is_empty()
    }

    /// The left-right reflection of this board
    pub fn mirror(&self) -> Board {
        let cols = self.geometry.cols;
        let mut mirrored = self.clone();
        for row in 0..self.geometry.rows {
            for column in 0..cols {
                mirrored.cells[column + cols * row] = self.cell(row, cols - 1 - column);
            }
        }
        mirrored
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.geometry.rows).rev() {
            let line: String = (0..self.geometry.cols)
                .map(|column| self.cell(row, column).symbol())
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
