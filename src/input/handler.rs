use crate::app::AppState;
use crate::domain::{Mode, UiMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::EditingTask => handle_editing_mode(app, key),
        UiMode::TimeUp => handle_time_up_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        // Timer shortcuts
        KeyCode::Char(' ') => app.toggle_timer(Instant::now()),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_timer(),
        KeyCode::Char(c @ '1'..='3') => {
            if let Some(mode) = Mode::from_shortcut(c) {
                app.set_mode(mode);
            }
        }

        // Task list
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Enter | KeyCode::Char('x') => app.complete_selected(),
        KeyCode::Delete | KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => app.start_input(),

        // Quit
        KeyCode::Char('q') | KeyCode::Esc => return true,

        _ => {}
    }
    false
}

/// Handle keys while the input line has focus. Timer shortcuts are plain text here.
fn handle_editing_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc | KeyCode::Tab => app.cancel_input(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_add_char(c),
        _ => {}
    }
    false
}

/// The time-up prompt blocks everything until acknowledged
fn handle_time_up_mode(app: &mut AppState, key: KeyEvent) -> bool {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dismiss_time_up();
    }
    false
}
