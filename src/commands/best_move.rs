use crate::renderer::Renderer;
use anyhow::Context;
use std::io::Write;
use tic_tac_toe::{
    best_move_with_stats,
    evaluate_root,
    Board,
    Outcome,
    SearchStats,
    Team,
};
use tracing::info;

/// Print the best move for a board
#[derive(Debug, Clone, Copy, argh::FromArgs)]
#[argh(
    subcommand,
    name = "best-move",
    description = "print the best move for a board"
)]
pub struct BestMoveOptions {
    #[argh(
        positional,
        description = "the board, row by row, like \"XX.|OO.|OX.\""
    )]
    pub board: Board,

    #[argh(
        option,
        description = "the team to move, X or O (defaults to the team whose turn it is)"
    )]
    pub mover: Option<Team>,
}

/// Returns the index of the chosen tile, if a move was possible.
pub fn exec(
    options: BestMoveOptions,
    renderer: Renderer,
    out: &mut impl Write,
) -> anyhow::Result<Option<u8>> {
    let board = options.board;
    let mover = options.mover.unwrap_or_else(|| board.get_turn());

    let outcome = evaluate_root(board);
    if let Outcome::Win(_) = outcome {
        writeln!(
            out,
            "the game is already over: {}",
            renderer.describe(board, outcome)
        )
        .context("failed to write result")?;
        return Ok(None);
    }

    let mut stats = SearchStats::default();
    let next = match best_move_with_stats(board, mover, &mut stats) {
        Some(next) => next,
        None => {
            writeln!(out, "the board is full").context("failed to write result")?;
            return Ok(None);
        }
    };
    let index = board
        .changed_tile(next)
        .context("the chosen board does not differ by one tile")?;
    info!(%board, %mover, index, nodes = stats.nodes, "picked best move");

    write!(
        out,
        "best move for {mover}: {index}\n{}",
        renderer.render_board(next)
    )
    .context("failed to write result")?;

    Ok(Some(index))
}

#[cfg(test)]
mod test {
    use super::*;

    fn best_move(board: &str, mover: Option<Team>) -> (Option<u8>, String) {
        let options = BestMoveOptions {
            board: board.parse().expect("invalid board"),
            mover,
        };
        let mut out = Vec::new();
        let index = exec(options, Renderer::new(false), &mut out).expect("failed to pick move");
        (index, String::from_utf8(out).expect("output is not utf8"))
    }

    #[test]
    fn winning_move() {
        let (index, out) = best_move("XX.|OO.|OX.", None);
        assert_eq!(index, Some(2));
        assert!(out.starts_with("best move for X: 2\n+---+---+---+\n| X | X | X |"), "{out}");
    }

    #[test]
    fn blocking_move() {
        let (index, _) = best_move("X..|OO.|..X", Some(Team::X));
        assert_eq!(index, Some(5));
    }

    #[test]
    fn finished_boards() {
        let (index, out) = best_move("XXO|OOX|XOX", None);
        assert_eq!(index, None);
        assert_eq!(out, "the board is full\n");

        let (index, out) = best_move("XXX|OO.|...", None);
        assert_eq!(index, None);
        assert_eq!(out, "the game is already over: X wins on the row 0-1-2\n");
    }
}
