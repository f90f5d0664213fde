use std::time::Duration;

/// Default UI refresh interval in milliseconds
pub const DEFAULT_REFRESH_MS: u64 = 250;

const MIN_REFRESH_MS: u64 = 50;
const MAX_REFRESH_MS: u64 = 1000;

/// How long the event loop waits for input before redrawing
pub fn refresh_duration(refresh_ms: u64) -> Duration {
    Duration::from_millis(refresh_ms.clamp(MIN_REFRESH_MS, MAX_REFRESH_MS))
}
