use anyhow::{anyhow, ensure, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::Rng;

use std::io::{stdin, stdout, Write};

use connect4_minimax::*;

mod game;
use game::*;

#[derive(Parser, Debug)]
#[command(
    name = "connect4",
    version,
    about = "Play Connect 4 against a minimax AI"
)]
struct Cli {
    /// Number of plies the AI searches ahead
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,

    /// Pick AI moves by their immediate score instead of searching
    #[arg(long)]
    greedy: bool,

    /// Search the AI's candidate moves on all cores
    #[arg(long)]
    parallel: bool,

    /// The AI makes the first move
    #[arg(long, conflicts_with = "human_first")]
    ai_first: bool,

    /// The human makes the first move
    #[arg(long)]
    human_first: bool,

    /// Starting position as a string of 1-indexed columns
    #[arg(long, default_value = "")]
    position: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    ensure!(cli.depth >= 1, "search depth must be at least 1");

    let strategy = if cli.greedy {
        Strategy::Greedy
    } else {
        Strategy::AlphaBeta {
            depth: cli.depth,
            parallel: cli.parallel,
        }
    };

    // pick the first player at random unless told otherwise
    let first = if cli.ai_first {
        Piece::Ai
    } else if cli.human_first {
        Piece::Player
    } else if rand::thread_rng().gen_bool(0.5) {
        Piece::Ai
    } else {
        Piece::Player
    };
    let mut game = Game::from_moves(&cli.position, first)?;
    info!("starting game with {:?}, first move by {:?}", strategy, first);

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        game.display()?;

        match game.state {
            Outcome::Ongoing => {
                let next_move =
                    // AI player
                    if game.turn == Piece::Ai {
                        let spinner = ProgressBar::new_spinner();
                        spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}"));
                        spinner.set_message("AI is thinking...");
                        spinner.enable_steady_tick(100);

                        let column = strategy
                            .choose(game.board())
                            .ok_or_else(|| anyhow!("AI has no legal move"))?;
                        spinner.finish_and_clear();

                        info!("AI plays column {}", column + 1);
                        println!("AI move: {}", column + 1);
                        column + 1

                    // human player
                    } else {
                        print!("Move input > ");
                        stdout().flush()?;
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str.trim());
                                continue;
                            }
                            Ok(column) => column,
                        }
                    };

                if let Err(err) = game.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            Outcome::PlayerWins => {
                println!("You win!");
                break;
            }
            Outcome::AiWins => {
                println!("AI wins!");
                break;
            }
            Outcome::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    info!("game over after moves {}", game.game);
    Ok(())
}
