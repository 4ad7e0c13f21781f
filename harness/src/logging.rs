//! Structured logging setup for the `pathscope` binary.
//!
//! Library crates only emit `tracing` events; installing a subscriber is the
//! binary's job. Output goes to stderr so stdout stays the report.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable that overrides the CLI-derived filter.
pub const LOG_ENV: &str = "PATHSCOPE_LOG";

/// Log filter for the given CLI flags.
///
/// An explicit `log_level` wins over `verbose`. A bare level such as `trace`
/// is scoped to the pathscope crates; anything containing `=` is used as a
/// full filter directive.
#[must_use]
pub fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => scoped(level),
        (true, None) => scoped("debug"),
        (false, None) => scoped("warn"),
    }
}

fn scoped(level: &str) -> String {
    format!("pathscope_search={level},pathscope_harness={level},pathscope={level}")
}

/// Install the global subscriber.
///
/// `RUST_LOG`, then [`LOG_ENV`], override the CLI-derived filter.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, log_level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(fmt::format::FmtSpan::CLOSE),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
