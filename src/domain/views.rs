use super::enums::TimerStatus;
use super::task::Task;

/// Format seconds as "MM:SS" (e.g. "05:09", "25:00")
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Badge shown next to the clock
pub fn status_badge(status: TimerStatus, use_emoji: bool) -> String {
    let icon = match (status, use_emoji) {
        (TimerStatus::Running, true) => "⏱",
        (TimerStatus::Paused, true) => "⏸",
        (TimerStatus::Idle, true) => "▶",
        (TimerStatus::Running, false) => ">",
        (TimerStatus::Paused, false) => "||",
        (TimerStatus::Idle, false) => "-",
    };
    format!("{} {}", icon, status.to_tag())
}

/// Checkbox glyph for a task row
pub fn check_glyph(task: &Task, use_emoji: bool) -> &'static str {
    match (task.is_completed(), use_emoji) {
        (true, true) => "✓",
        (false, true) => "☐",
        (true, false) => "[x]",
        (false, false) => "[ ]",
    }
}

/// Summary line for the task pane header ("3 tasks · 1 done")
pub fn count_summary(total: usize, completed: usize) -> String {
    let noun = if total == 1 { "task" } else { "tasks" };
    format!("{} {} · {} done", total, noun, completed)
}

/// Render a progress fraction as a percent string, clamped to 0..=100
pub fn progress_percent(progress: f64) -> u16 {
    (progress.clamp(0.0, 1.0) * 100.0).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(309), "05:09");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
    }

    #[test]
    fn test_status_badge() {
        assert_eq!(status_badge(TimerStatus::Running, true), "⏱ RUNNING");
        assert_eq!(status_badge(TimerStatus::Paused, true), "⏸ PAUSED");
        assert_eq!(status_badge(TimerStatus::Idle, false), "- IDLE");
    }

    #[test]
    fn test_check_glyph() {
        let mut task = Task::new(TaskId::new(1), "Read".to_string());
        assert_eq!(check_glyph(&task, false), "[ ]");
        task.mark_done();
        assert_eq!(check_glyph(&task, false), "[x]");
        assert_eq!(check_glyph(&task, true), "✓");
    }

    #[test]
    fn test_count_summary() {
        assert_eq!(count_summary(0, 0), "0 tasks · 0 done");
        assert_eq!(count_summary(1, 0), "1 task · 0 done");
        assert_eq!(count_summary(4, 2), "4 tasks · 2 done");
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0.0), 0);
        assert_eq!(progress_percent(0.5), 50);
        assert_eq!(progress_percent(1.3), 100);
    }
}
