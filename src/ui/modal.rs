use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{accent_color, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the blocking "Time is up!" prompt
pub fn render_time_up_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(modal) = &app.view.time_up {
        let modal_area = create_modal_area(area);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let lines = vec![
            Line::raw(""),
            Line::raw(format!("  {}", modal.message)),
            Line::raw(format!(
                "  Finished at {}",
                modal.finished_at.format("%H:%M")
            )),
            Line::raw(format!(
                "  Completed cycles: {}",
                app.view.timer.completed_cycles
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled("  [Enter]", modal_title_style()),
                Span::raw(" OK"),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent_color(modal.mode.accent())))
                    .title(Span::styled(" ⏰ Time is up! ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
