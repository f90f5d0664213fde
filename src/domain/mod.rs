pub mod enums;
pub mod events;
pub mod task;
pub mod views;

pub use enums::{Accent, Mode, TimerStatus, UiMode};
pub use events::{EventSink, TaskEvent, TimerEvent, TimerSnapshot};
pub use task::{Task, TaskId};
pub use views::{check_glyph, count_summary, format_clock, progress_percent, status_badge};
