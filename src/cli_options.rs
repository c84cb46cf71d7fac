use crate::commands::{
    best_move::BestMoveOptions,
    play::PlayOptions,
    self_play::SelfPlayOptions,
    solve::SolveOptions,
};
use camino::Utf8PathBuf;

/// CLI Options
#[derive(Debug, argh::FromArgs)]
#[argh(description = "An exact tic-tac-toe solver")]
pub struct CliOptions {
    #[argh(option, description = "the path to a config file")]
    pub config: Option<Utf8PathBuf>,

    #[argh(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(Debug, Clone, Copy, argh::FromArgs)]
#[argh(subcommand)]
pub enum Subcommand {
    Solve(SolveOptions),
    BestMove(BestMoveOptions),
    Play(PlayOptions),
    SelfPlay(SelfPlayOptions),
}
