use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter for the record store: request traces from tower_http stay visible.
pub const STORE_FILTER: &str = "info,tower_http=info,axum=info";

/// Default filter for the gateway: upstream call details logged at debug.
pub const GATEWAY_FILTER: &str = "info,gateway::upstream=debug";

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initialize a compact human-readable subscriber writing to stdout.
/// - Respects `RUST_LOG` if set
/// - Falls back to [`STORE_FILTER`]
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(env_filter(STORE_FILTER))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize a JSON structured subscriber writing to stdout, for container log collectors.
/// - Respects `RUST_LOG` if set
/// - Falls back to [`GATEWAY_FILTER`]
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(env_filter(GATEWAY_FILTER))
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}
