//! Bounds enforced by [`AppConfig::validate`](super::AppConfig::validate).

/// Fastest tick the event loop is allowed to run at (milliseconds)
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Slowest tick still able to drive tooltip timing (milliseconds)
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

/// Maximum time a single poll may block waiting for input (milliseconds)
pub const MAX_POLL_TIMEOUT_MS: u64 = 1000;

/// Maximum delay before a hover tooltip appears (milliseconds)
pub const MAX_TOOLTIP_DELAY_MS: u64 = 5000;

/// Valid range of the crossterm input listener interval (milliseconds)
pub const MIN_INPUT_LISTENER_INTERVAL_MS: u64 = 1;
pub const MAX_INPUT_LISTENER_INTERVAL_MS: u64 = 500;
