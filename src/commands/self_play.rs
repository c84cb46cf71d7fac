use crate::renderer::Renderer;
use anyhow::Context;
use std::io::Write;
use tic_tac_toe::{
    best_move,
    evaluate_root,
    Board,
    Outcome,
};
use tracing::debug;

/// Let the computer play itself
#[derive(Debug, Clone, Copy, argh::FromArgs)]
#[argh(
    subcommand,
    name = "self-play",
    description = "let the computer play both sides"
)]
pub struct SelfPlayOptions {
    #[argh(
        option,
        description = "the starting board (defaults to the empty board)"
    )]
    pub board: Option<Board>,
}

/// Play both sides with best moves until the game ends.
pub fn exec(
    options: SelfPlayOptions,
    renderer: Renderer,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let mut board = options.board.unwrap_or_default();
    let mut mover = board.get_turn();

    while evaluate_root(board) == Outcome::NoWinner {
        let next = match best_move(board, mover) {
            Some(next) => next,
            None => break,
        };
        let index = board
            .changed_tile(next)
            .context("the chosen board does not differ by one tile")?;
        debug!(%mover, index, "self-play move");

        write!(out, "{mover} plays {index}\n{}", renderer.render_board(next))
            .context("failed to write move")?;

        board = next;
        mover = mover.inverse();
    }

    let outcome = evaluate_root(board);
    writeln!(out, "{}", renderer.describe(board, outcome)).context("failed to write result")?;

    Ok(outcome)
}
