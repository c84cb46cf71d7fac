use anyhow::Context;
use std::io::Write;
use tic_tac_toe::{
    search_with_stats,
    Board,
    Outcome,
    SearchStats,
    Team,
    MAX_BOUND,
    MIN_BOUND,
};
use tracing::info;

/// Print the game value of a board
#[derive(Debug, Clone, Copy, argh::FromArgs)]
#[argh(
    subcommand,
    name = "solve",
    description = "print the game value of a board with best play"
)]
pub struct SolveOptions {
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

/// Describe a game value
pub fn value_label(value: i8) -> &'static str {
    match Outcome::from_value(value) {
        Outcome::Win(Team::X) => "X wins",
        Outcome::Win(Team::O) => "O wins",
        Outcome::NoWinner => "draw",
    }
}

pub fn exec(options: SolveOptions, out: &mut impl Write) -> anyhow::Result<i8> {
    let board = options.board;
    let mover = options.mover.unwrap_or_else(|| board.get_turn());

    let mut stats = SearchStats::default();
    let value = search_with_stats(board, mover, MIN_BOUND, MAX_BOUND, &mut stats);
    info!(%board, %mover, value, nodes = stats.nodes, cutoffs = stats.cutoffs, "solved board");

    writeln!(out, "{mover} to move: {value} ({})", value_label(value))
        .context("failed to write result")?;
    writeln!(
        out,
        "searched {} nodes with {} cutoffs",
        stats.nodes, stats.cutoffs
    )
    .context("failed to write stats")?;

    Ok(value)
}
