use crate::domain::{EventSink, Task, TaskEvent, TaskId};
use crate::error::TaskError;
use tracing::debug;

/// Owner of every task.
///
/// Tasks live in two queues: pending in insertion order and completed in
/// completion order. A full read is always pending followed by completed, and
/// both queues are only ever appended to or have entries removed, so relative
/// order inside each group never changes.
#[derive(Debug, Clone)]
pub struct TaskList {
    pending: Vec<Task>,
    completed: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            completed: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a pending task at the end of the pending group.
    pub fn add_task(
        &mut self,
        title: &str,
        sink: &mut impl EventSink<TaskEvent>,
    ) -> Result<TaskId, TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        self.pending.push(Task::new(id, title.to_string()));
        debug!(%id, "task added");

        self.emit_count(sink);
        Ok(id)
    }

    /// Remove a task. Emits `Empty` after `CountChanged` when the last one goes.
    pub fn delete_task(
        &mut self,
        id: TaskId,
        sink: &mut impl EventSink<TaskEvent>,
    ) -> Result<Task, TaskError> {
        let removed = if let Some(pos) = position(&self.pending, id) {
            self.pending.remove(pos)
        } else if let Some(pos) = position(&self.completed, id) {
            self.completed.remove(pos)
        } else {
            return Err(TaskError::NotFound(id));
        };
        debug!(%id, "task deleted");

        self.emit_count(sink);
        if self.is_empty() {
            sink.emit(TaskEvent::Empty);
        }
        Ok(removed)
    }

    /// Mark a task done and move it to the end of the completed group.
    ///
    /// Returns `Ok(false)` without emitting anything if it was already done.
    pub fn complete_task(
        &mut self,
        id: TaskId,
        sink: &mut impl EventSink<TaskEvent>,
    ) -> Result<bool, TaskError> {
        let Some(pos) = position(&self.pending, id) else {
            return if self.completed.iter().any(|task| task.id() == id) {
                Ok(false)
            } else {
                Err(TaskError::NotFound(id))
            };
        };

        let mut task = self.pending.remove(pos);
        task.mark_done();
        self.completed.push(task);
        debug!(%id, "task completed");

        sink.emit(TaskEvent::Reordered);
        self.emit_count(sink);
        Ok(true)
    }

    /// Total number of tasks, pending and completed
    pub fn count(&self) -> usize {
        self.pending.len() + self.completed.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Every task in display order: pending first, then completed
    pub fn tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.pending.iter().chain(self.completed.iter())
    }

    /// Display position of a task
    pub fn index_of(&self, id: TaskId) -> Option<usize> {
        self.tasks().position(|task| task.id() == id)
    }

    /// Task at a display position
    pub fn id_at(&self, index: usize) -> Option<TaskId> {
        self.tasks().nth(index).map(Task::id)
    }

    fn emit_count(&self, sink: &mut impl EventSink<TaskEvent>) {
        sink.emit(TaskEvent::CountChanged {
            total: self.count(),
            completed: self.completed.len(),
        });
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

fn position(tasks: &[Task], id: TaskId) -> Option<usize> {
    tasks.iter().position(|task| task.id() == id)
}
