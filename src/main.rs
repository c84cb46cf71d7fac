#![deny(
    unused_import_braces,
    unused_lifetimes,
    unreachable_pub,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_copy_implementations,
    deprecated_in_future,
    meta_variable_misuse,
    non_ascii_idents,
    rust_2018_compatibility,
    rust_2018_idioms,
    future_incompatible,
    nonstandard_style,
    clippy::all
)]
#![warn(variant_size_differences, let_underscore_drop)]

//! # ttt-solver

pub mod cli_options;
pub mod commands;
pub mod config;
pub mod input;
pub mod logger;
pub mod renderer;
pub mod setup;

use crate::{
    cli_options::{
        CliOptions,
        Subcommand,
    },
    config::Config,
    renderer::Renderer,
};
use anyhow::Context as _;
use std::time::Instant;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

/// Data from the setup function
struct SetupData {
    config: Config,
    worker_guard: Option<WorkerGuard>,
}

/// Pre-main setup
fn setup(cli_options: &CliOptions) -> anyhow::Result<SetupData> {
    let config = match cli_options.config.as_deref() {
        Some(path) => setup::load_config(path).context("failed to load config")?,
        None => Config::default(),
    };

    let worker_guard = logger::setup(&config).context("failed to initialize logger")?;

    Ok(SetupData {
        config,
        worker_guard,
    })
}

/// The main entry.
///
/// Sets up the program and calls `real_main`.
/// This also loads the config, logging errors to the stderr
/// instead of the loggers, which are not initialized yet.
fn main() -> anyhow::Result<()> {
    // This line MUST run first.
    // It is needed to exit early if the options are invalid,
    // and this will NOT run destructors if it does so.
    let cli_options: CliOptions = argh::from_env();

    let setup_data = setup(&cli_options)?;
    real_main(cli_options.subcommand, setup_data)
}

/// The actual entry point
fn real_main(subcommand: Subcommand, setup_data: SetupData) -> anyhow::Result<()> {
    let config = setup_data.config;
    let renderer = Renderer::new(config.show_hints());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let start = Instant::now();
    let ret = match subcommand {
        Subcommand::Solve(options) => commands::solve::exec(options, &mut out).map(|_| ()),
        Subcommand::BestMove(options) => {
            commands::best_move::exec(options, renderer, &mut out).map(|_| ())
        }
        Subcommand::Play(options) => {
            let human = options.team.unwrap_or_else(|| config.human_team());
            let stdin = std::io::stdin();
            commands::play::exec(human, renderer, stdin.lock(), &mut out).map(|_| ())
        }
        Subcommand::SelfPlay(options) => {
            commands::self_play::exec(options, renderer, &mut out).map(|_| ())
        }
    };
    info!("finished in {:?}", start.elapsed());

    // Logging no longer reliable past this point
    drop(setup_data.worker_guard);

    ret
}
