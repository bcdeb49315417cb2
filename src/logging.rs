//! Purpose: Install the process-wide `tracing` subscriber.
//! Invariants: Logs go to stderr; stdout is reserved for command output and verbose echo.
//! Invariants: An already-installed subscriber is left in place.
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
