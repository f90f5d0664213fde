use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{default_style, hint_style, modal_title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the new-task input line at the top of the task pane
pub fn render_input_line(f: &mut Frame, app: &AppState, area: Rect) {
    let editing = app.ui_mode == UiMode::EditingTask;

    let line = if editing {
        Line::from(vec![
            Span::styled("> ", modal_title_style()),
            Span::styled(app.input.as_str(), default_style()),
            Span::styled("█", modal_title_style()), // Cursor
        ])
    } else if app.input.is_empty() {
        Line::from(vec![
            Span::styled("+ ", hint_style()),
            Span::styled("Add a task (a)", hint_style()),
        ])
    } else {
        Line::from(vec![
            Span::styled("+ ", hint_style()),
            Span::styled(app.input.as_str(), hint_style()),
        ])
    };

    f.render_widget(Paragraph::new(line), area);
}
