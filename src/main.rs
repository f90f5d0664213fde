mod app;
mod domain;
mod engine;
mod error;
mod input;
mod logging;
mod notifications;
mod settings;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::Mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use settings::{
    config_file, ensure_app_dir, get_app_dir, init_local_dir, load_config, log_file, save_config,
    AppConfig,
};
use std::io;
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "focusring")]
#[command(about = "A terminal focus timer with a small task checklist", long_about = None)]
struct Cli {
    /// Mode to start in: focus, short-break or long-break
    #[arg(short, long)]
    mode: Option<Mode>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .focusring directory with a default config
    Init,
    /// Show where configuration is read from and the effective values
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let current_dir =
                std::env::current_dir().context("Could not determine current directory")?;
            let app_dir = init_local_dir(&current_dir)?;
            let config_path = config_file(&app_dir);
            save_config(&config_path, &AppConfig::default())?;

            println!("Initialized focusring directory: {}", app_dir.display());
            println!("Edit {} to change defaults.", config_path.display());
            Ok(())
        }
        Some(Commands::Config) => {
            let app_dir = get_app_dir()?;
            let config_path = config_file(&app_dir);
            let config = load_config(&config_path)?;

            println!("Directory: {}", app_dir.display());
            if config_path.exists() {
                println!("Config:    {}", config_path.display());
            } else {
                println!("Config:    {} (not found, using defaults)", config_path.display());
            }
            println!("Log file:  {}", log_file(&app_dir).display());
            println!();
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        None => run_tui(cli.mode),
    }
}

fn run_tui(mode_override: Option<Mode>) -> Result<()> {
    let app_dir = ensure_app_dir()?;
    let config = load_config(config_file(&app_dir))?;

    // Logging is best-effort; the timer works without it
    if let Err(e) = logging::init_logging(&config.log_level, &log_file(&app_dir)) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let mode = match mode_override {
        Some(mode) => mode,
        None => config.initial_mode()?,
    };
    info!(%mode, dir = %app_dir.display(), "starting");

    let mut app = AppState::new(&config, mode);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(
        mode = %app.timer.mode(),
        status = app.timer.status().to_tag(),
        remaining = app.timer.remaining_seconds(),
        completed_cycles = app.timer.completed_cycles(),
        pending = app.tasks.pending_count(),
        done = app.tasks.completed_count(),
        "session ended"
    );

    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    config: &AppConfig,
) -> Result<()> {
    let refresh = ticker::refresh_duration(config.refresh_ms);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Wake up for whichever comes first: input, a countdown tick or a redraw
        let timeout = app.next_wakeup(Instant::now(), refresh);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        app.poll_timer(Instant::now());

        if let Some(mode) = app.take_alert() {
            notifications::ring_bell();
            if config.desktop_notifications {
                notifications::notify_cycle_complete(mode);
            }
        }
    }
}
