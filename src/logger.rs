use crate::config::Config;
use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::{
        EnvFilter,
        LevelFilter,
    },
    layer::SubscriberExt,
};

/// Try to setup a logger.
///
/// Logs go to the stderr so they never mix with the board on the stdout.
/// If the config names a log file, logs are also appended there.
/// The returned guard must be held until shutdown so the file writer can flush.
pub fn setup(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let level: LevelFilter = config
        .log_level()
        .parse()
        .with_context(|| format!("invalid log level \"{}\"", config.log_level()))?;
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env()
        .context("invalid RUST_LOG directives")?;

    let stderr_formatting_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_formatting_layer, worker_guard) = match config.log_file() {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file \"{path}\""))?;
            let (file_writer, worker_guard) = tracing_appender::non_blocking(file);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer);

            (Some(layer), Some(worker_guard))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(file_formatting_layer)
        .with(stderr_formatting_layer);

    tracing::subscriber::set_global_default(subscriber).context("failed to set subscriber")?;

    Ok(worker_guard)
}
