//! Subscriber setup
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Build the log filter from `RUST_LOG`-style directives
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber
///
/// Reports go to stdout, so logs go to stderr.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(log_filter(directives.as_deref()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
