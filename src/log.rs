// src/log.rs
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber. `RUST_LOG` wins over `verbose`;
/// `verbose` maps 0/1/2+ to warn/debug/trace for this crate.
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbose: u8) {
    let fallback = match verbose {
        0 => s!(DEFAULT_FILTER),
        1 => format!("{DEFAULT_FILTER},edurank_scrape=debug"),
        _ => format!("{DEFAULT_FILTER},edurank_scrape=trace"),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
