use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the filter directives for store logging.
pub const LOG_ENV_VAR: &str = "INJECTABLE_STORE_LOG";

/// Build the filter from `INJECTABLE_STORE_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing for applications that embed the store.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_tracing() {
    if let Err(err) = try_init_tracing() {
        tracing::debug!(error = %err, "Tracing already initialized");
    }
}

/// Install a stderr fmt subscriber as the global default.
///
/// Fails if another global subscriber was set first.
pub fn try_init_tracing() -> Result<(), TryInitError> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()
}
