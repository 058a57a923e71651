use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber for a service binary.
///
/// Filter precedence: `RUST_LOG`, then `LOG_LEVEL`, then the given
/// fallback level.
pub fn init_tracing(fallback_level: &str) {
    let filter = EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_from_env("LOG_LEVEL"))
        .unwrap_or_else(|_| EnvFilter::new(fallback_level));

    fmt().with_env_filter(filter).with_target(true).init();
}
