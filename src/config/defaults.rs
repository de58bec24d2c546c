//! Default values for configuration options.

use std::time::Duration;

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Default user agent sent with every request.
pub const USER_AGENT: &str = concat!("discord-webhooks/", env!("CARGO_PKG_VERSION"));

/// Default request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
