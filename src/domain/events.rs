use super::enums::{Accent, Mode, TimerStatus};

/// Everything the presentation layer needs to draw the timer
#[derive(Debug, Clone, PartialEq)]
pub struct TimerSnapshot {
    pub mode: Mode,
    pub status: TimerStatus,
    pub remaining_seconds: u32,
    pub total_seconds: u32,
    /// 0.0 at the full duration, 1.0 when exhausted
    pub progress: f64,
    pub label: &'static str,
    pub accent: Accent,
    pub completed_cycles: u32,
}

/// Notifications emitted by the timer controller
#[derive(Debug, Clone, PartialEq)]
pub enum TimerEvent {
    /// Remaining time, label or mode changed
    Progress(TimerSnapshot),
    /// A run reached zero. The controller is already stopped when this is emitted.
    Completed(TimerSnapshot),
}

/// Notifications emitted by the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskEvent {
    CountChanged { total: usize, completed: usize },
    /// A task moved into the completed group
    Reordered,
    /// The last task was deleted
    Empty,
}

/// Receiver for engine notifications.
///
/// Engines take the sink as an argument on every mutating operation so they
/// never hold a reference to the presentation layer.
pub trait EventSink<E> {
    fn emit(&mut self, event: E);
}

impl<E> EventSink<E> for Vec<E> {
    fn emit(&mut self, event: E) {
        self.push(event);
    }
}

/// Sink that drops every event
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

#[cfg(test)]
impl<E> EventSink<E> for Discard {
    fn emit(&mut self, _event: E) {}
}
