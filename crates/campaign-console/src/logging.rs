//! Log output for hosts embedding the console.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "CAMPAIGN_CONSOLE_LOG";

/// Install a fmt subscriber filtered by [`LOG_ENV`] (default `info`).
///
/// Returns `false` if a global subscriber was already set.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init().is_ok()
}
