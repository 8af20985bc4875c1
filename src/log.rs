// src/log.rs
use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

/// Install the global subscriber. Timestamps are elapsed time since start,
/// output goes to stderr so stdout stays free for the summary.
/// `RUST_LOG` wins over `level` when set.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
