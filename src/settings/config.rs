use crate::domain::Mode;
use crate::error::ModeError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User configuration stored in config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// tracing filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_true")]
    pub use_emoji: bool,
    /// Block on a "Time is up!" modal when a run completes
    #[serde(default = "default_true")]
    pub confirm_on_complete: bool,
    #[serde(default = "default_true")]
    pub desktop_notifications: bool,
    /// Event poll timeout for the UI loop, in milliseconds
    #[serde(default = "default_refresh_ms")]
    pub refresh_ms: u64,
    #[serde(default = "default_initial_mode")]
    pub initial_mode: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_refresh_ms() -> u64 {
    crate::ticker::DEFAULT_REFRESH_MS
}

fn default_initial_mode() -> String {
    "focus".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            use_emoji: true,
            confirm_on_complete: true,
            desktop_notifications: true,
            refresh_ms: default_refresh_ms(),
            initial_mode: default_initial_mode(),
        }
    }
}

impl AppConfig {
    /// Mode the timer starts in
    pub fn initial_mode(&self) -> Result<Mode, ModeError> {
        self.initial_mode.parse()
    }
}

/// Load config from a JSON file, falling back to defaults if it doesn't exist
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();

    let Some(content) = crate::settings::read_file(path)? else {
        return Ok(AppConfig::default());
    };

    let config: AppConfig = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    Ok(config)
}

/// Save config to a JSON file
pub fn save_config<P: AsRef<Path>>(path: P, config: &AppConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    crate::settings::atomic_write(path, &json)?;
    Ok(())
}
