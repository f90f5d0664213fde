pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::render_time_up_modal;
use ratatui::Frame;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app, layout.keybindings_area);
    render_timer_pane(f, app, layout.timer_area);
    render_list_pane(f, app, layout.tasks_area);

    if app.ui_mode == UiMode::TimeUp {
        render_time_up_modal(f, app, size);
    }
}
