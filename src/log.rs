// src/log.rs
//! Logging init. Everything goes to stderr so stdout stays free for the table preview.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info,tm_scrape=debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `verbose`.
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
