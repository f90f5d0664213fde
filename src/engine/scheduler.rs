//! Fixed-interval tick scheduling with explicit cancellation tokens.
//!
//! The scheduler holds at most one armed schedule. Arming hands back a
//! [`TickToken`]; ticks are only ever released for the token that is live at
//! the time of the call, so a cancelled run can never produce another tick.

use std::time::{Duration, Instant};

/// Countdown tick interval
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Shortest interval a scheduler will accept
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Handle for one armed schedule. Tokens are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken(u64);

#[derive(Debug, Clone, Copy)]
struct Armed {
    token: TickToken,
    next_due: Instant,
}

#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    next_token: u64,
    armed: Option<Armed>,
}

impl TickScheduler {
    /// Create an unarmed scheduler. Intervals below [`MIN_INTERVAL`] are raised to it.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            next_token: 1,
            armed: None,
        }
    }

    /// Arm a new schedule whose first tick is due one interval after `now`.
    /// Any schedule that was still armed is cancelled first.
    pub fn arm(&mut self, now: Instant) -> TickToken {
        let token = TickToken(self.next_token);
        self.next_token += 1;
        self.armed = Some(Armed {
            token,
            next_due: now + self.interval,
        });
        token
    }

    /// Cancel whatever is armed, returning the invalidated token
    pub fn cancel_all(&mut self) -> Option<TickToken> {
        self.armed.take().map(|armed| armed.token)
    }

    pub fn is_live(&self, token: TickToken) -> bool {
        self.armed.map_or(false, |armed| armed.token == token)
    }

    #[cfg(test)]
    pub fn live_token(&self) -> Option<TickToken> {
        self.armed.map(|armed| armed.token)
    }

    /// Collect one token per interval that has elapsed up to `now`.
    ///
    /// A stalled caller gets every missed tick back in one batch, all carrying
    /// the same token. Callers must still route each one through a liveness
    /// check, since handling an earlier tick may cancel the schedule.
    pub fn due(&mut self, now: Instant) -> Vec<TickToken> {
        let mut ticks = Vec::new();
        if let Some(armed) = self.armed.as_mut() {
            while armed.next_due <= now {
                ticks.push(armed.token);
                armed.next_due += self.interval;
            }
        }
        ticks
    }

    /// Time left until the next tick, if anything is armed
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.armed
            .map(|armed| armed.next_due.saturating_duration_since(now))
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_due_before_interval() {
        let mut scheduler = TickScheduler::default();
        let t0 = Instant::now();
        scheduler.arm(t0);

        assert!(scheduler.due(t0).is_empty());
        assert!(scheduler.due(t0 + Duration::from_millis(999)).is_empty());
        assert_eq!(scheduler.due(t0 + Duration::from_secs(1)).len(), 1);
    }

    #[test]
    fn test_due_catches_up_missed_ticks() {
        let mut scheduler = TickScheduler::default();
        let t0 = Instant::now();
        let token = scheduler.arm(t0);

        let ticks = scheduler.due(t0 + Duration::from_millis(3500));
        assert_eq!(ticks, vec![token, token, token]);

        // Already released ticks are not handed out twice
        assert!(scheduler.due(t0 + Duration::from_millis(3900)).is_empty());
        assert_eq!(scheduler.due(t0 + Duration::from_secs(4)).len(), 1);
    }

    #[test]
    fn test_cancel_invalidates_token() {
        let mut scheduler = TickScheduler::default();
        let t0 = Instant::now();
        let token = scheduler.arm(t0);

        assert_eq!(scheduler.cancel_all(), Some(token));
        assert!(!scheduler.is_live(token));
        assert!(scheduler.due(t0 + Duration::from_secs(10)).is_empty());

        // Cancelling twice is harmless
        assert_eq!(scheduler.cancel_all(), None);
    }

    #[test]
    fn test_rearm_issues_fresh_token() {
        let mut scheduler = TickScheduler::default();
        let t0 = Instant::now();
        let first = scheduler.arm(t0);
        let second = scheduler.arm(t0);

        assert_ne!(first, second);
        assert!(!scheduler.is_live(first));
        assert!(scheduler.is_live(second));
        assert_eq!(scheduler.live_token(), Some(second));
    }

    #[test]
    fn test_cancel_all() {
        let mut scheduler = TickScheduler::default();
        assert_eq!(scheduler.cancel_all(), None);

        let token = scheduler.arm(Instant::now());
        assert_eq!(scheduler.cancel_all(), Some(token));
        assert_eq!(scheduler.live_token(), None);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut scheduler = TickScheduler::new(Duration::ZERO);
        let t0 = Instant::now();
        scheduler.arm(t0);

        assert_eq!(scheduler.due(t0 + Duration::from_millis(5)).len(), 5);
        assert_eq!(
            scheduler.time_until_next(t0 + Duration::from_millis(5)),
            Some(MIN_INTERVAL)
        );
    }

    #[test]
    fn test_time_until_next() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(500));
        let t0 = Instant::now();
        assert_eq!(scheduler.time_until_next(t0), None);

        scheduler.arm(t0);
        assert_eq!(
            scheduler.time_until_next(t0 + Duration::from_millis(200)),
            Some(Duration::from_millis(300))
        );
        assert_eq!(
            scheduler.time_until_next(t0 + Duration::from_secs(2)),
            Some(Duration::ZERO)
        );
    }
}
