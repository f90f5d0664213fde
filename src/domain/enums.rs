use crate::error::ModeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Countdown configuration with a fixed total duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl Mode {
    /// Total countdown length in seconds
    pub fn total_seconds(&self) -> u32 {
        match self {
            Mode::Focus => 25 * 60,
            Mode::ShortBreak => 5 * 60,
            Mode::LongBreak => 15 * 60,
        }
    }

    /// Get the display name for this mode
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Focus => "Focus",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }

    /// Label shown while the countdown sits at its full duration
    pub fn idle_label(&self) -> &'static str {
        match self {
            Mode::Focus => "Ready to focus?",
            Mode::ShortBreak => "Time for a break",
            Mode::LongBreak => "Time for a long break",
        }
    }

    /// Label shown while the countdown is ticking
    pub fn running_label(&self) -> &'static str {
        match self {
            Mode::Focus => "Stay focused",
            Mode::ShortBreak | Mode::LongBreak => "Take a break",
        }
    }

    pub fn accent(&self) -> Accent {
        match self {
            Mode::Focus => Accent::Blue,
            Mode::ShortBreak => Accent::Green,
            Mode::LongBreak => Accent::Yellow,
        }
    }

    /// Map a number-row shortcut ('1', '2', '3') to a mode
    pub fn from_shortcut(c: char) -> Option<Self> {
        match c {
            '1' => Some(Mode::Focus),
            '2' => Some(Mode::ShortBreak),
            '3' => Some(Mode::LongBreak),
            _ => None,
        }
    }

    /// Get all modes as a list, in shortcut order
    pub fn all() -> &'static [Mode] {
        &[Mode::Focus, Mode::ShortBreak, Mode::LongBreak]
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    /// Accepts "focus", "short", "short-break", "short_break", "long", ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "focus" => Ok(Mode::Focus),
            "short" | "short-break" | "short_break" | "shortbreak" => Ok(Mode::ShortBreak),
            "long" | "long-break" | "long_break" | "longbreak" => Ok(Mode::LongBreak),
            _ => Err(ModeError::Invalid(s.to_string())),
        }
    }
}

/// Runtime status of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    /// Sitting at the full duration after a reset or mode switch
    Idle,
    Running,
    /// Stopped mid-run, or stopped because the run was exhausted
    Paused,
}

impl TimerStatus {
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Running => "RUNNING",
            Self::Paused => "PAUSED",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    /// The new-task input line has focus; timer shortcuts are suppressed
    EditingTask,
    /// Blocking "Time is up!" acknowledgment
    TimeUp,
}

/// Accent color associated with a mode. Mapped to a terminal color by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Yellow,
}
