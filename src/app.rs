use crate::domain::{
    EventSink, Mode, TaskEvent, TaskId, TimerEvent, TimerSnapshot, UiMode,
};
use crate::engine::{TaskList, TimerController};
use crate::error::TaskError;
use crate::notifications::completion_message;
use crate::settings::AppConfig;
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// State of the blocking "Time is up!" prompt
#[derive(Debug, Clone)]
pub struct TimeUpModal {
    pub mode: Mode,
    pub message: String,
    pub finished_at: DateTime<Local>,
    /// UI mode to return to once the prompt is dismissed
    pub resume_mode: UiMode,
}

/// What the presentation layer renders. Fed only by engine notifications.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub timer: TimerSnapshot,
    pub task_total: usize,
    pub task_completed: usize,
    /// Show the "No tasks yet" placeholder
    pub show_placeholder: bool,
    pub time_up: Option<TimeUpModal>,
    /// One-line feedback under the input (e.g. rejected empty title)
    pub flash: Option<String>,
    /// Completion that still needs a bell / desktop notification
    pub pending_alert: Option<Mode>,
    confirm_on_complete: bool,
}

impl ViewState {
    fn new(timer: TimerSnapshot, confirm_on_complete: bool) -> Self {
        Self {
            timer,
            task_total: 0,
            task_completed: 0,
            show_placeholder: true,
            time_up: None,
            flash: None,
            pending_alert: None,
            confirm_on_complete,
        }
    }
}

impl EventSink<TimerEvent> for ViewState {
    fn emit(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Progress(snapshot) => self.timer = snapshot,
            TimerEvent::Completed(snapshot) => {
                let mode = snapshot.mode;
                self.timer = snapshot;
                self.pending_alert = Some(mode);
                if self.confirm_on_complete {
                    self.time_up = Some(TimeUpModal {
                        mode,
                        message: completion_message(mode),
                        finished_at: Local::now(),
                        resume_mode: UiMode::Normal,
                    });
                }
            }
        }
    }
}

impl EventSink<TaskEvent> for ViewState {
    fn emit(&mut self, event: TaskEvent) {
        match event {
            TaskEvent::CountChanged { total, completed } => {
                self.task_total = total;
                self.task_completed = completed;
                if total > 0 {
                    self.show_placeholder = false;
                }
            }
            TaskEvent::Empty => self.show_placeholder = true,
            // Rows are re-read from the list on every draw
            TaskEvent::Reordered => {}
        }
    }
}

/// Main application state
pub struct AppState {
    pub timer: TimerController,
    pub tasks: TaskList,
    pub view: ViewState,
    pub ui_mode: UiMode,
    /// Contents of the new-task input line
    pub input: String,
    pub selected: Option<TaskId>,
    pub use_emoji: bool,
}

impl AppState {
    pub fn new(config: &AppConfig, mode: Mode) -> Self {
        let timer = TimerController::new(mode);
        let view = ViewState::new(timer.snapshot(), config.confirm_on_complete);

        Self {
            timer,
            tasks: TaskList::new(),
            view,
            ui_mode: UiMode::Normal,
            input: String::new(),
            selected: None,
            use_emoji: config.use_emoji,
        }
    }

    // Timer controls

    /// Start/pause toggle
    pub fn toggle_timer(&mut self, now: Instant) {
        self.timer.start(now, &mut self.view);
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset(&mut self.view);
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.timer.set_mode(mode, &mut self.view);
    }

    /// Run every tick that came due. Opens the time-up prompt on completion.
    pub fn poll_timer(&mut self, now: Instant) {
        self.timer.poll(now, &mut self.view);
        if let Some(modal) = self.view.time_up.as_mut() {
            if self.ui_mode != UiMode::TimeUp {
                modal.resume_mode = self.ui_mode;
                self.ui_mode = UiMode::TimeUp;
            }
        }
    }

    /// Close the time-up prompt and give focus back to whatever had it
    pub fn dismiss_time_up(&mut self) {
        self.ui_mode = match self.view.time_up.take() {
            Some(modal) => modal.resume_mode,
            None => UiMode::Normal,
        };
    }

    /// Take the completion that still needs an audible/desktop alert
    pub fn take_alert(&mut self) -> Option<Mode> {
        self.view.pending_alert.take()
    }

    /// How long the event loop may block before something needs redrawing
    pub fn next_wakeup(&self, now: Instant, refresh: Duration) -> Duration {
        match self.timer.time_until_next_tick(now) {
            Some(until_tick) => until_tick.min(refresh),
            None => refresh,
        }
    }

    // Task input line

    pub fn start_input(&mut self) {
        self.ui_mode = UiMode::EditingTask;
        self.view.flash = None;
    }

    pub fn cancel_input(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn input_add_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Add a task from the input line. The line is cleared whether or not the
    /// title was accepted.
    pub fn submit_input(&mut self) {
        let title = std::mem::take(&mut self.input);
        match self.tasks.add_task(&title, &mut self.view) {
            Ok(id) => {
                self.view.flash = None;
                if self.selected.is_none() {
                    self.selected = Some(id);
                }
            }
            Err(e) => {
                debug!(error = %e, "task not added");
                self.view.flash = Some("Task title can't be empty".to_string());
            }
        }
    }

    // Task rows

    pub fn complete_task(&mut self, id: TaskId) {
        if let Err(e) = self.tasks.complete_task(id, &mut self.view) {
            warn!(error = %e, "complete ignored");
        }
    }

    /// Delete a task, moving the selection to the row that takes its place
    pub fn delete_task(&mut self, id: TaskId) {
        let index = self.tasks.index_of(id);
        match self.tasks.delete_task(id, &mut self.view) {
            Ok(_) => {
                if self.selected == Some(id) {
                    self.selected = index.and_then(|i| self.neighbor_at(i));
                }
            }
            Err(TaskError::NotFound(_)) => {
                warn!(%id, "delete ignored, task already gone");
            }
            Err(e) => warn!(error = %e, "delete ignored"),
        }
    }

    pub fn complete_selected(&mut self) {
        if let Some(id) = self.selected {
            self.complete_task(id);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected {
            self.delete_task(id);
        }
    }

    pub fn move_selection_up(&mut self) {
        let target = match self.selected.and_then(|id| self.tasks.index_of(id)) {
            Some(0) | None => self.tasks.id_at(0),
            Some(i) => self.tasks.id_at(i - 1),
        };
        self.selected = target;
    }

    pub fn move_selection_down(&mut self) {
        let target = match self.selected.and_then(|id| self.tasks.index_of(id)) {
            Some(i) => self
                .tasks
                .id_at(i + 1)
                .or_else(|| self.tasks.id_at(i)),
            None => self.tasks.id_at(0),
        };
        self.selected = target;
    }

    fn neighbor_at(&self, index: usize) -> Option<TaskId> {
        self.tasks
            .id_at(index)
            .or_else(|| index.checked_sub(1).and_then(|i| self.tasks.id_at(i)))
    }
}
