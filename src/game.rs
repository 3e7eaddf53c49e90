//! Console game loop
//!
//! Sequences one full session: render the board, read the human's move,
//! apply it, test for a win, age the transposition table, ask the engine,
//! apply its move, test again, repeat. The human is always Player One
//! (`X`) and moves first; the engine is Player Two (`O`).

use std::io::{self, BufRead, Write};

use log::debug;

use crate::board::{GameConfig, Player, Position};
use crate::engine::Engine;
use crate::rules::check_win;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// One interactive game session.
pub struct Game {
    position: Position,
    engine: Engine,
}

impl Game {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            position: Position::new(config),
            engine: Engine::new(config),
        }
    }

    /// Session over a caller-supplied position and engine (tests use
    /// seeded engines through this).
    #[must_use]
    pub fn with_engine(position: Position, engine: Engine) -> Self {
        Self { position, engine }
    }

    /// Play until a win or a draw, reading human moves from `input` and
    /// writing everything to `output`.
    pub fn run(
        &mut self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> io::Result<GameOutcome> {
        loop {
            write!(output, "{}", render_board(&self.position))?;

            if self.position.moves().is_empty() {
                writeln!(output, "Draw!")?;
                return Ok(GameOutcome::Draw);
            }

            // Human turn
            let square = prompt_move(&self.position, input, output)?;
            self.position.apply_move(square);
            debug!("human played {square}");

            if check_win(&self.position, square).is_some() {
                writeln!(output, "Player 1 wins!")?;
                return Ok(GameOutcome::Win(Player::One));
            }

            // One full round has passed since the engine last searched
            self.engine.age_table();

            // Engine turn. The progress line is best-effort: write errors
            // inside the callback are dropped rather than aborting search.
            let result = self.engine.choose_move(&mut self.position, |p| {
                let _ = write!(
                    output,
                    "\rMove: {} Depth: {} Eval: {}   ",
                    p.square, p.depth, p.best_score
                );
                let _ = output.flush();
            });
            let Some(result) = result else {
                writeln!(output, "Draw!")?;
                return Ok(GameOutcome::Draw);
            };
            writeln!(output)?;

            self.position.apply_move(result.square);

            if check_win(&self.position, result.square).is_some() {
                writeln!(output, "Player 2 wins!")?;
                write!(output, "{}", render_board(&self.position))?;
                return Ok(GameOutcome::Win(Player::Two));
            }

            writeln!(output, "Nodes: {}", result.nodes)?;
        }
    }
}

/// Render the board as a grid of `X` / `O` / `-` with an adjacent
/// square-index legend, one row per board row, followed by a blank line.
#[must_use]
pub fn render_board(pos: &Position) -> String {
    let size = pos.config().size();
    let mut out = String::new();

    for row in 0..size {
        for col in 0..size {
            let square = row * size + col;
            out.push(pos.owner_at(square).map_or('-', Player::symbol));
            out.push(' ');
        }
        out.push('\t');
        for col in 0..size {
            out.push_str(&format!("{:>2} ", row * size + col));
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Prompt until the human enters a square index that is on the board and
/// unoccupied. Malformed or illegal input re-prompts; it never aborts.
/// EOF on `input` is an error, not a hang.
pub fn prompt_move(
    pos: &Position,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<u8> {
    let total = pos.config().total_squares();
    loop {
        write!(output, "Enter your move: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a valid move was entered",
            ));
        }

        match line.trim().parse::<u8>() {
            Ok(square) if square < total && pos.is_square_empty(square) => return Ok(square),
            _ => writeln!(output, "Invalid move")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::ZobristTable;
    use std::io::Cursor;

    fn position(config: GameConfig, moves: &[u8]) -> Position {
        let mut pos =
            Position::with_zobrist(config, ZobristTable::from_seed(11, config.total_squares()));
        for &sq in moves {
            pos.apply_move(sq);
        }
        pos
    }

    #[test]
    fn test_render_empty_3x3() {
        let pos = position(GameConfig::new(3, 3).unwrap(), &[]);
        let expected = "- - - \t 0  1  2 \n\
                        - - - \t 3  4  5 \n\
                        - - - \t 6  7  8 \n\n";
        assert_eq!(render_board(&pos), expected);
    }

    #[test]
    fn test_render_marks_players() {
        let pos = position(GameConfig::new(3, 3).unwrap(), &[4, 0]);
        let rendered = render_board(&pos);
        assert!(rendered.starts_with("O - - "));
        assert!(rendered.contains("- X - "));
    }

    #[test]
    fn test_render_legend_aligns_two_digits() {
        let pos = position(GameConfig::new(5, 4).unwrap(), &[]);
        let rendered = render_board(&pos);
        assert!(rendered.contains(" 9 "));
        assert!(rendered.contains("10 "));
        assert!(rendered.contains("24 "));
    }

    #[test]
    fn test_prompt_accepts_valid_move() {
        let pos = position(GameConfig::new(3, 3).unwrap(), &[]);
        let mut input = Cursor::new("4\n");
        let mut output = Vec::new();

        let square = prompt_move(&pos, &mut input, &mut output).unwrap();
        assert_eq!(square, 4);
        assert!(String::from_utf8(output).unwrap().contains("Enter your move: "));
    }

    #[test]
    fn test_prompt_reprompts_until_valid() {
        let pos = position(GameConfig::new(3, 3).unwrap(), &[4]);
        // Out of range, malformed, occupied, then valid
        let mut input = Cursor::new("9\nabc\n4\n3\n");
        let mut output = Vec::new();

        let square = prompt_move(&pos, &mut input, &mut output).unwrap();
        assert_eq!(square, 3);

        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("Invalid move").count(), 3);
    }

    #[test]
    fn test_prompt_rejects_negative_numbers() {
        let pos = position(GameConfig::new(3, 3).unwrap(), &[]);
        let mut input = Cursor::new("-1\n0\n");
        let mut output = Vec::new();

        assert_eq!(prompt_move(&pos, &mut input, &mut output).unwrap(), 0);
    }

    #[test]
    fn test_prompt_eof_is_an_error() {
        let pos = position(GameConfig::new(3, 3).unwrap(), &[]);
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let err = prompt_move(&pos, &mut input, &mut output).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_scripted_session_terminates() {
        let config = GameConfig::new(3, 3).unwrap();
        let mut game = Game::with_engine(position(config, &[]), Engine::with_seed(config, 1));

        // Offer every square repeatedly; occupied ones re-prompt and the
        // next candidate is read, so the session always reaches a result
        let script = "0\n1\n2\n3\n4\n5\n6\n7\n8\n".repeat(5);
        let mut input = Cursor::new(script);
        let mut output = Vec::new();

        let outcome = game.run(&mut input, &mut output).unwrap();
        let transcript = String::from_utf8(output).unwrap();
        match outcome {
            GameOutcome::Win(Player::One) => assert!(transcript.contains("Player 1 wins!")),
            GameOutcome::Win(Player::Two) => assert!(transcript.contains("Player 2 wins!")),
            GameOutcome::Draw => assert!(transcript.contains("Draw!")),
        }
        assert!(transcript.contains("Nodes: "));
    }
}
