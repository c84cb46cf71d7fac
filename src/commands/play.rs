use crate::{
    input::read_move,
    renderer::Renderer,
};
use anyhow::{
    bail,
    Context,
};
use std::io::{
    BufRead,
    Write,
};
use tic_tac_toe::{
    best_move_with_stats,
    evaluate_root,
    Board,
    Outcome,
    SearchStats,
    Team,
};
use tracing::{
    info,
    warn,
};

/// Play against the computer
#[derive(Debug, Clone, Copy, argh::FromArgs)]
#[argh(
    subcommand,
    name = "play",
    description = "play a game against the computer"
)]
pub struct PlayOptions {
    #[argh(
        option,
        description = "the team you play, X or O (defaults to the config)"
    )]
    pub team: Option<Team>,
}

/// Run a game between a human reading from `input` and the computer.
///
/// X always moves first.
/// Rejected input is reported and the human is asked again.
pub fn exec(
    human: Team,
    renderer: Renderer,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let computer = human.inverse();
    info!(%human, %computer, "starting game");

    let mut lines = input.lines();
    let mut board = Board::new();
    let mut mover = Team::X;
    loop {
        let outcome = evaluate_root(board);
        if outcome != Outcome::NoWinner || board.is_full() {
            writeln!(
                out,
                "{}{}",
                renderer.render_board(board),
                renderer.describe(board, outcome)
            )
            .context("failed to write result")?;
            info!(%board, ?outcome, "game over");
            return Ok(outcome);
        }

        if mover == human {
            write!(
                out,
                "{}Your move ({human}), pick a tile: ",
                renderer.render_board(board)
            )
            .context("failed to write prompt")?;
            out.flush().context("failed to flush prompt")?;

            let line = match lines.next() {
                Some(line) => line.context("failed to read move")?,
                None => bail!("input closed before the game finished"),
            };

            board = match read_move(&line, board, human) {
                Ok(board) => board,
                Err(error) => {
                    warn!("rejected move: {error}");
                    writeln!(out, "{error}").context("failed to write error")?;
                    continue;
                }
            };
        } else {
            let mut stats = SearchStats::default();
            let next = match best_move_with_stats(board, computer, &mut stats) {
                Some(next) => next,
                None => bail!("the computer has no move on a board that is not full"),
            };
            let index = board
                .changed_tile(next)
                .context("the chosen board does not differ by one tile")?;
            info!(index, nodes = stats.nodes, "computer moved");

            writeln!(out, "Computer ({computer}) plays {index}")
                .context("failed to write move")?;
            board = next;
        }

        mover = mover.inverse();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejected_input_is_retried() {
        let input = "abc\n9\n0\n4\n".as_bytes();
        let mut out = Vec::new();
        let error = exec(Team::X, Renderer::new(true), input, &mut out)
            .expect_err("the game should not finish");
        assert_eq!(error.to_string(), "input closed before the game finished");

        let out = String::from_utf8(out).expect("output is not utf8");
        assert!(out.contains("\"abc\" is not a tile number\n"), "{out}");
        assert!(
            out.contains("tile 9 does not exist, pick a tile from 0 to 8\n"),
            "{out}"
        );
        assert!(out.contains("Computer (O) plays 4\n"), "{out}");
        assert!(out.contains("tile 4 is already taken\n"), "{out}");
        assert_eq!(out.matches("Your move (X), pick a tile: ").count(), 5);
    }

    #[test]
    fn computer_punishes_mistakes() {
        let input = "1\n2\n5\n".as_bytes();
        let mut out = Vec::new();
        let outcome =
            exec(Team::O, Renderer::new(false), input, &mut out).expect("failed to play game");
        assert_eq!(outcome, Outcome::Win(Team::X));

        let out = String::from_utf8(out).expect("output is not utf8");
        assert!(out.starts_with("Computer (X) plays 0\n"), "{out}");
        assert!(out.ends_with("X wins on the column 0-3-6\n"), "{out}");
    }
}
