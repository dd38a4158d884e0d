//! Structured logging setup
//!
//! Consumers embedding the pipeline call [`setup_logging`] once at startup;
//! the `RUST_LOG` environment variable takes precedence over the requested
//! level when set.

use crate::Result;
use tracing::debug;

/// Set up structured logging at the given level (e.g. "info", "debug")
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("carpark_finder={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
