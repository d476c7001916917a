use anyhow::{anyhow, Result};
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{outcome, Board, Outcome, Piece};

/// The live game: the canonical board and whose turn it is
pub struct Game {
    board: Board,
    pub turn: Piece,
    pub game: String,
    pub state: Outcome,
}

impl Game {
    pub fn new(first: Piece) -> Self {
        Self {
            board: Board::new(),
            turn: first,
            game: String::new(),
            state: Outcome::Ongoing,
        }
    }

    /// Starts from a string of 1-indexed column moves, the first made by `first`
    pub fn from_moves(moves: &str, first: Piece) -> Result<Self> {
        let board = Board::from_moves(moves, first)?;
        let turn = if moves.len() % 2 == 0 {
            first
        } else {
            first.opponent()
        };
        Ok(Self {
            state: outcome(&board),
            board,
            turn,
            game: moves.to_string(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<Outcome> {
        if self.state.is_over() {
            return Err(anyhow!("Invalid move, the game is over"));
        }
        let cols = self.board.geometry().cols();
        if column_one_indexed < 1 || column_one_indexed > cols {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                cols
            ));
        }
        let column = column_one_indexed - 1;
        if !self.board.legal_moves().contains(&column) {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }

        self.board = self.board.place(column, self.turn)?;
        self.game.push_str(&column_one_indexed.to_string());
        self.state = outcome(&self.board);
        self.turn = self.turn.opponent();

        Ok(self.state)
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();
        let geometry = self.board.geometry();

        let cols: String = (1..=geometry.cols()).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;
        for _ in 0..geometry.rows() {
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;

        let (origin_x, origin_y) = crossterm::cursor::position()?;

        for row in 0..geometry.rows() {
            for column in 0..geometry.cols() {
                let (pos_x, pos_y) = (origin_x + column as u16, origin_y - row as u16);

                stdout
                    .queue(MoveTo(pos_x, pos_y))?
                    .queue(PrintStyledContent(
                        style("O")
                            .attribute(Attribute::Bold)
                            .on(Color::DarkBlue)
                            .with(match self.board.get(row, column) {
                                Some(Piece::Player) => Color::Red,
                                Some(Piece::Ai) => Color::Yellow,
                                _ => Color::DarkBlue,
                            }),
                    ))?;
            }
        }
        stdout
            .queue(MoveTo(origin_x + geometry.cols() as u16, origin_y))?
            .queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }
}
