use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt::format;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;

use crate::core::settings::LOG_ENV_VAR;

/// Level for a given number of `-v` flags, starting from warn
pub fn verbosity_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Logger initialization without timestamps but with colors.
///
/// Use PFTK_LOG=info or PFTK_LOG=debug to raise verbosity without flags.
/// Example: PFTK_LOG=pftk::io=debug pftk import ...
pub fn init_custom_logger(verbose: u8) {
    // Empty time formatter that doesn't print anything
    struct EmptyTime;
    impl FormatTime for EmptyTime {
        fn format_time(
            &self,
            _: &mut tracing_subscriber::fmt::format::Writer<'_>,
        ) -> std::fmt::Result {
            Ok(())
        }
    }

    let format = format()
        .with_timer(EmptyTime)
        .with_level(true)
        .with_target(true)
        .with_ansi(true);

    // The env var wins when set; otherwise each -v raises the level
    let filter = EnvFilter::builder()
        .with_default_directive(verbosity_level(verbose).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    // Fails only if a global subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .try_init();
}
