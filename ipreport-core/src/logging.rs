use tracing_subscriber::{EnvFilter, fmt};

/// Install the process-wide subscriber: human-readable lines on stderr,
/// filtered by `RUST_LOG` (defaults to `info`).
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
