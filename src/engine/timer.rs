use super::scheduler::{TickScheduler, TickToken};
use crate::domain::{EventSink, Mode, TimerEvent, TimerSnapshot, TimerStatus};
use std::time::Instant;
use tracing::{debug, info};

/// Label shown once a run has counted down to zero
pub const FINISHED_LABEL: &str = "Time is up!";
pub const PAUSED_LABEL: &str = "Paused";

/// Countdown state machine.
///
/// `remaining_seconds` only moves down through [`TimerController::tick`] while
/// running; every other transition puts it back to the mode's full duration.
#[derive(Debug, Clone)]
pub struct TimerController {
    mode: Mode,
    remaining_seconds: u32,
    status: TimerStatus,
    label: &'static str,
    completed_cycles: u32,
    scheduler: TickScheduler,
}

impl TimerController {
    pub fn new(mode: Mode) -> Self {
        Self::with_scheduler(mode, TickScheduler::default())
    }

    pub fn with_scheduler(mode: Mode, scheduler: TickScheduler) -> Self {
        Self {
            mode,
            remaining_seconds: mode.total_seconds(),
            status: TimerStatus::Idle,
            label: mode.idle_label(),
            completed_cycles: 0,
            scheduler,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }

    /// Number of runs that counted all the way down, across the whole session
    pub fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    /// Fraction of the current mode's duration that has elapsed (0.0 to 1.0)
    pub fn progress(&self) -> f64 {
        let total = self.mode.total_seconds();
        if total == 0 {
            return 1.0;
        }
        1.0 - f64::from(self.remaining_seconds) / f64::from(total)
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            mode: self.mode,
            status: self.status,
            remaining_seconds: self.remaining_seconds,
            total_seconds: self.mode.total_seconds(),
            progress: self.progress(),
            label: self.label,
            accent: self.mode.accent(),
            completed_cycles: self.completed_cycles,
        }
    }

    /// Start the countdown, or pause it if it is already running.
    pub fn start(&mut self, now: Instant, sink: &mut impl EventSink<TimerEvent>) {
        if self.is_running() {
            self.pause(sink);
            return;
        }

        // An exhausted run starts over from the full duration
        if self.remaining_seconds == 0 {
            self.remaining_seconds = self.mode.total_seconds();
        }

        let token = self.scheduler.arm(now);
        self.status = TimerStatus::Running;
        self.label = self.mode.running_label();
        debug!(mode = %self.mode, remaining = self.remaining_seconds, ?token, "timer started");
        sink.emit(TimerEvent::Progress(self.snapshot()));
    }

    /// Stop ticking and keep the remaining time. No-op unless running.
    pub fn pause(&mut self, sink: &mut impl EventSink<TimerEvent>) {
        if !self.is_running() {
            return;
        }
        self.scheduler.cancel_all();
        self.status = TimerStatus::Paused;
        self.label = PAUSED_LABEL;
        debug!(mode = %self.mode, remaining = self.remaining_seconds, "timer paused");
        sink.emit(TimerEvent::Progress(self.snapshot()));
    }

    /// Stop ticking and rewind to the full duration of the current mode
    pub fn reset(&mut self, sink: &mut impl EventSink<TimerEvent>) {
        self.stop_at_full_duration();
        debug!(mode = %self.mode, "timer reset");
        sink.emit(TimerEvent::Progress(self.snapshot()));
    }

    /// Switch mode. A running countdown is stopped before the switch applies.
    pub fn set_mode(&mut self, mode: Mode, sink: &mut impl EventSink<TimerEvent>) {
        self.mode = mode;
        self.stop_at_full_duration();
        debug!(mode = %self.mode, "mode switched");
        sink.emit(TimerEvent::Progress(self.snapshot()));
    }

    /// Advance the countdown by one second. Returns false if not running.
    pub fn tick(&mut self, sink: &mut impl EventSink<TimerEvent>) -> bool {
        if !self.is_running() {
            return false;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            sink.emit(TimerEvent::Progress(self.snapshot()));
            return true;
        }

        // Stop before notifying so nothing downstream can tick this run again
        self.scheduler.cancel_all();
        self.status = TimerStatus::Paused;
        self.label = FINISHED_LABEL;
        self.completed_cycles += 1;
        info!(
            mode = %self.mode,
            completed_cycles = self.completed_cycles,
            "cycle completed"
        );
        sink.emit(TimerEvent::Completed(self.snapshot()));
        true
    }

    /// Scheduler-driven tick. Ignored unless `token` is the live schedule.
    pub fn fire(&mut self, token: TickToken, sink: &mut impl EventSink<TimerEvent>) -> bool {
        if !self.scheduler.is_live(token) {
            debug!(?token, "dropping tick for cancelled schedule");
            return false;
        }
        self.tick(sink)
    }

    /// Dispatch every tick that has come due by `now`. Returns how many took effect.
    pub fn poll(&mut self, now: Instant, sink: &mut impl EventSink<TimerEvent>) -> usize {
        let mut fired = 0;
        for token in self.scheduler.due(now) {
            if self.fire(token, sink) {
                fired += 1;
            }
        }
        fired
    }

    /// The armed schedule, if the countdown is running
    #[cfg(test)]
    pub fn live_token(&self) -> Option<TickToken> {
        self.scheduler.live_token()
    }

    /// Time left until the next scheduled tick, if running
    pub fn time_until_next_tick(&self, now: Instant) -> Option<std::time::Duration> {
        self.scheduler.time_until_next(now)
    }

    fn stop_at_full_duration(&mut self) {
        self.scheduler.cancel_all();
        self.status = TimerStatus::Idle;
        self.remaining_seconds = self.mode.total_seconds();
        self.label = self.mode.idle_label();
    }
}

impl Default for TimerController {
    fn default() -> Self {
        Self::new(Mode::Focus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::Discard;
    use crate::domain::Accent;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn running_timer(mode: Mode) -> TimerController {
        let mut timer = TimerController::new(mode);
        timer.start(Instant::now(), &mut Discard);
        timer
    }

    #[test]
    fn test_new_timer_is_idle_at_full_duration() {
        let timer = TimerController::default();
        assert_eq!(timer.mode(), Mode::Focus);
        assert_eq!(timer.remaining_seconds(), 1500);
        assert_eq!(timer.status(), TimerStatus::Idle);
        assert_eq!(timer.snapshot().label, "Ready to focus?");
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn test_set_mode_resets_duration_and_stops() {
        for &mode in Mode::all() {
            let mut timer = running_timer(Mode::Focus);
            timer.tick(&mut Discard);

            timer.set_mode(mode, &mut Discard);
            assert_eq!(timer.remaining_seconds(), mode.total_seconds());
            assert!(!timer.is_running());
            assert_eq!(timer.progress(), 0.0);
            assert_eq!(timer.live_token(), None);
        }
    }

    #[test]
    fn test_set_mode_emits_snapshot() {
        let mut timer = TimerController::default();
        let mut events: Vec<TimerEvent> = Vec::new();
        timer.set_mode(Mode::LongBreak, &mut events);

        assert_eq!(events.len(), 1);
        match &events[0] {
            TimerEvent::Progress(snapshot) => {
                assert_eq!(snapshot.mode, Mode::LongBreak);
                assert_eq!(snapshot.accent, Accent::Yellow);
                assert_eq!(snapshot.label, "Time for a long break");
                assert_eq!(snapshot.remaining_seconds, 900);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_start_sets_running_label() {
        let timer = running_timer(Mode::Focus);
        assert!(timer.is_running());
        assert_eq!(timer.snapshot().label, "Stay focused");

        let timer = running_timer(Mode::ShortBreak);
        assert_eq!(timer.snapshot().label, "Take a break");
    }

    #[test]
    fn test_start_toggles_pause() {
        let mut timer = running_timer(Mode::Focus);
        timer.tick(&mut Discard);

        timer.start(Instant::now(), &mut Discard);
        assert_eq!(timer.status(), TimerStatus::Paused);
        assert_eq!(timer.snapshot().label, "Paused");
        assert_eq!(timer.remaining_seconds(), 1499);
        assert_eq!(timer.live_token(), None);

        timer.start(Instant::now(), &mut Discard);
        assert!(timer.is_running());
        assert_eq!(timer.remaining_seconds(), 1499);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut timer = running_timer(Mode::Focus);
        let mut events: Vec<TimerEvent> = Vec::new();
        timer.pause(&mut events);
        timer.pause(&mut events);

        assert_eq!(events.len(), 1);
        assert_eq!(timer.status(), TimerStatus::Paused);
    }

    #[test]
    fn test_tick_decrements_by_one() {
        let mut timer = running_timer(Mode::ShortBreak);
        assert!(timer.tick(&mut Discard));
        assert_eq!(timer.remaining_seconds(), 299);
        assert!(timer.tick(&mut Discard));
        assert_eq!(timer.remaining_seconds(), 298);
    }

    #[test]
    fn test_tick_ignored_when_not_running() {
        let mut timer = TimerController::default();
        let mut events: Vec<TimerEvent> = Vec::new();
        assert!(!timer.tick(&mut events));
        assert_eq!(timer.remaining_seconds(), 1500);
        assert!(events.is_empty());
    }

    #[test]
    fn test_full_focus_cycle() {
        let mut timer = running_timer(Mode::Focus);
        let mut events: Vec<TimerEvent> = Vec::new();
        for _ in 0..1500 {
            timer.tick(&mut events);
        }

        assert!(!timer.is_running());
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.completed_cycles(), 1);
        assert_eq!(timer.snapshot().label, FINISHED_LABEL);
        assert_eq!(timer.progress(), 1.0);

        let completions = events
            .iter()
            .filter(|e| matches!(e, TimerEvent::Completed(_)))
            .count();
        assert_eq!(completions, 1);
        assert!(matches!(events.last(), Some(TimerEvent::Completed(_))));

        // Further ticks do nothing and never underflow
        assert!(!timer.tick(&mut events));
        assert_eq!(timer.remaining_seconds(), 0);
    }

    #[test]
    fn test_progress_halfway() {
        let mut timer = running_timer(Mode::Focus);
        for _ in 0..750 {
            timer.tick(&mut Discard);
        }
        assert_eq!(timer.remaining_seconds(), 750);
        assert_eq!(timer.progress(), 0.5);
    }

    #[test]
    fn test_reset_rewinds() {
        let mut timer = running_timer(Mode::LongBreak);
        timer.tick(&mut Discard);
        timer.reset(&mut Discard);

        assert_eq!(timer.remaining_seconds(), 900);
        assert_eq!(timer.status(), TimerStatus::Idle);
        assert_eq!(timer.progress(), 0.0);
        assert_eq!(timer.mode(), Mode::LongBreak);
    }

    #[test]
    fn test_restart_after_completion_rearms_full_duration() {
        let mut timer = running_timer(Mode::ShortBreak);
        for _ in 0..300 {
            timer.tick(&mut Discard);
        }
        assert_eq!(timer.remaining_seconds(), 0);

        timer.start(Instant::now(), &mut Discard);
        assert!(timer.is_running());
        assert_eq!(timer.remaining_seconds(), 300);
    }

    #[test]
    fn test_cycle_count_accumulates_across_runs() {
        let mut timer = TimerController::new(Mode::ShortBreak);
        for _ in 0..2 {
            timer.start(Instant::now(), &mut Discard);
            timer.pause(&mut Discard);
            timer.start(Instant::now(), &mut Discard);
            for _ in 0..300 {
                timer.tick(&mut Discard);
            }
        }
        assert_eq!(timer.completed_cycles(), 2);

        timer.set_mode(Mode::Focus, &mut Discard);
        timer.reset(&mut Discard);
        assert_eq!(timer.completed_cycles(), 2);
    }

    #[test]
    fn test_poll_drives_ticks_from_scheduler() {
        let mut timer = TimerController::new(Mode::Focus);
        let t0 = Instant::now();
        timer.start(t0, &mut Discard);

        let fired = timer.poll(t0 + Duration::from_millis(3200), &mut Discard);
        assert_eq!(fired, 3);
        assert_eq!(timer.remaining_seconds(), 1497);
    }

    #[test]
    fn test_cancelled_token_never_ticks() {
        let mut timer = TimerController::new(Mode::Focus);
        let t0 = Instant::now();
        timer.start(t0, &mut Discard);
        let token = timer.live_token().unwrap();

        timer.pause(&mut Discard);
        assert!(!timer.fire(token, &mut Discard));
        assert_eq!(timer.poll(t0 + Duration::from_secs(5), &mut Discard), 0);
        assert_eq!(timer.remaining_seconds(), 1500);

        // Resuming arms a new token; the old one stays dead
        timer.start(t0, &mut Discard);
        assert!(!timer.fire(token, &mut Discard));
        assert_eq!(timer.remaining_seconds(), 1500);
    }

    #[test]
    fn test_stale_token_after_mode_switch() {
        let mut timer = TimerController::new(Mode::Focus);
        timer.start(Instant::now(), &mut Discard);
        let token = timer.live_token().unwrap();

        timer.set_mode(Mode::ShortBreak, &mut Discard);
        timer.start(Instant::now(), &mut Discard);

        assert!(!timer.fire(token, &mut Discard));
        assert_eq!(timer.remaining_seconds(), 300);
    }

    #[test]
    fn test_completion_drops_queued_ticks() {
        let mut timer = TimerController::new(Mode::ShortBreak);
        let t0 = Instant::now();
        timer.start(t0, &mut Discard);

        // Five seconds more than the run needs are due at once
        let mut events: Vec<TimerEvent> = Vec::new();
        let fired = timer.poll(t0 + Duration::from_secs(305), &mut events);

        assert_eq!(fired, 300);
        assert_eq!(timer.completed_cycles(), 1);
        assert!(!timer.is_running());
        assert!(matches!(events.last(), Some(TimerEvent::Completed(_))));
    }
}
