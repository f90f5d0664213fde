//! Cross-platform notification support
//! Currently only implements macOS notifications

use crate::domain::Mode;
use std::io::Write;

#[cfg(target_os = "macos")]
use std::process::Command;

/// Message shown when a run counts down to zero
pub fn completion_message(mode: Mode) -> String {
    format!("{} finished. Time is up!", mode.name())
}

/// Ring the terminal bell
pub fn ring_bell() {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}

/// Send a desktop notification when a countdown completes
pub fn notify_cycle_complete(mode: Mode) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "Focusring""#,
            completion_message(mode).replace('"', "\\\"")
        );

        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
            tracing::warn!(error = %e, "desktop notification failed");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = mode;
    }
}
