//! Structured logging setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info,hyper=warn";

/// Installs the global `tracing` subscriber writing to stderr.
///
/// Honours `RUST_LOG`. Calling it again after a subscriber is installed
/// is a no-op, which keeps tests that share a process from panicking.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
