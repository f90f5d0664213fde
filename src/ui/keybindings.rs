use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let hints = match app.ui_mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" space start/pause   "),
            Span::raw("r reset   "),
            Span::raw("1/2/3 mode   "),
            Span::raw("a add   "),
            Span::raw("↑/↓ select   "),
            Span::raw("x done   "),
            Span::raw("d delete   "),
            Span::raw("q quit"),
        ]),
        UiMode::EditingTask => Line::from(vec![
            Span::raw(" Enter add   "),
            Span::raw("Esc/Tab back"),
        ]),
        UiMode::TimeUp => Line::from(vec![Span::raw(" Enter dismiss")]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
