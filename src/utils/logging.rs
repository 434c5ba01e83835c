//! Logging setup.
//!
//! Logs go to stderr so that stdout stays reserved for MCP frames and
//! command output. `RUST_LOG` overrides the level picked from `--verbose`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "ly_mcp=debug" } else { "ly_mcp=info" }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init();
}
