pub mod scheduler;
pub mod tasks;
pub mod timer;

pub use tasks::TaskList;
pub use timer::TimerController;
