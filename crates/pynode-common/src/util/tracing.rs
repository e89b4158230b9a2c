use std::io::IsTerminal;

use log::LevelFilter;
use tracing::level_filters::LevelFilter as TracingLevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber writing to stderr.
///
/// `RUST_LOG` directives take precedence over `level`. Calling this twice is a no-op.
pub fn setup_tracing(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(to_tracing_level(level).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

pub fn to_tracing_level(level: LevelFilter) -> TracingLevelFilter {
    match level {
        LevelFilter::Off => TracingLevelFilter::OFF,
        LevelFilter::Error => TracingLevelFilter::ERROR,
        LevelFilter::Warn => TracingLevelFilter::WARN,
        LevelFilter::Info => TracingLevelFilter::INFO,
        LevelFilter::Debug => TracingLevelFilter::DEBUG,
        LevelFilter::Trace => TracingLevelFilter::TRACE,
    }
}
