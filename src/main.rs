//! Console front-end for the k-in-a-row engine

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use mnk::board::{GameConfig, DEFAULT_BOARD_SIZE, DEFAULT_WIN_CONDITION};
use mnk::game::Game;

/// Play a generalized k-in-a-row game against the engine.
#[derive(Debug, Parser)]
#[command(name = "mnk", version, about)]
struct Args {
    /// Board side length (3-8) followed by the winning run length; any
    /// other argument count falls back to the defaults
    #[arg(value_name = "SIZE WIN-CONDITION")]
    values: Vec<String>,
}

/// Configuration requested on the command line: `Some` only for exactly
/// two values (all-or-nothing defaulting, never partial). Two values
/// that do not form a valid board are a fatal startup error.
fn requested_config(values: &[String]) -> Result<Option<GameConfig>> {
    match values {
        [size, win_condition] => {
            let size: u8 = size.parse().context("board size must be a number")?;
            let win_condition: u8 = win_condition
                .parse()
                .context("win condition must be a number")?;
            Ok(Some(GameConfig::new(size, win_condition)?))
        }
        _ => Ok(None),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match requested_config(&args.values)? {
        Some(config) => config,
        None => {
            println!("Usage: mnk <size> <win-condition>");
            println!(
                "Defaulting to size {DEFAULT_BOARD_SIZE} win condition {DEFAULT_WIN_CONDITION}"
            );
            GameConfig::default()
        }
    };

    let mut game = Game::new(config);
    let stdin = io::stdin();
    game.run(&mut stdin.lock(), &mut io::stdout())?;
    Ok(())
}
