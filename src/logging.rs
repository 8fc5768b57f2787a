//! Diagnostic logging
//!
//! Library code emits `tracing` events; the binary installs a single fmt
//! subscriber on stderr so stdout stays reserved for command output.

use tracing_subscriber::filter::EnvFilter;

/// Filter directive variable checked before `RUST_LOG`
pub const LOG_ENV: &str = "ROSTER_LOG";

/// Default level for a `-v` count
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter: `ROSTER_LOG`, then `RUST_LOG`, then the `-v` level
pub fn build_filter<F>(verbose: u8, lookup: F) -> EnvFilter
where
    F: Fn(&str) -> Option<String>,
{
    let fallback = level_for_verbosity(verbose);
    let directive = lookup(LOG_ENV).or_else(|| lookup("RUST_LOG"));

    match directive.filter(|d| !d.trim().is_empty()) {
        Some(directive) => EnvFilter::try_new(&directive).unwrap_or_else(|err| {
            eprintln!(
                "invalid log directive '{}' ({}); using {}",
                directive, err, fallback
            );
            EnvFilter::new(fallback)
        }),
        None => EnvFilter::new(fallback),
    }
}

/// Install the stderr subscriber. A second call is a no-op.
pub fn init_logging(verbose: u8) {
    let filter = build_filter(verbose, |key| std::env::var(key).ok());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
