use crate::app::AppState;
use crate::domain::{check_glyph, count_summary, Task};
use crate::ui::input_form::render_input_line;
use crate::ui::layout::split_tasks_area;
use crate::ui::styles::{
    border_style, check_style, default_style, done_style, error_style, hint_style,
    selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Create a line for a task row
fn create_task_line(task: &Task, use_emoji: bool) -> Line<'_> {
    let glyph = check_glyph(task, use_emoji);

    if task.is_completed() {
        let mut spans = vec![
            Span::styled(format!("{} ", glyph), check_style()),
            Span::styled(task.title(), done_style()),
        ];
        if let Some(done_at) = task.completed_at() {
            spans.push(Span::styled(
                format!("  {}", done_at.format("%H:%M")),
                hint_style(),
            ));
        }
        Line::from(spans)
    } else {
        Line::from(vec![
            Span::styled(format!("{} ", glyph), default_style()),
            Span::styled(task.title(), default_style()),
        ])
    }
}

/// Render the task pane: input line, count, then rows pending-first
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Tasks ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [input_area, status_area, rows_area] = split_tasks_area(inner);

    render_input_line(f, app, input_area);

    let status = match &app.view.flash {
        Some(message) => Line::styled(message.as_str(), error_style()),
        None => Line::styled(
            count_summary(app.view.task_total, app.view.task_completed),
            hint_style(),
        ),
    };
    f.render_widget(Paragraph::new(status), status_area);

    if app.view.show_placeholder {
        let placeholder = Paragraph::new(Line::styled(
            "No tasks yet. Press a to add one.",
            hint_style(),
        ));
        f.render_widget(placeholder, rows_area);
        return;
    }

    let items: Vec<ListItem> = app
        .tasks
        .tasks()
        .map(|task| ListItem::new(create_task_line(task, app.use_emoji)))
        .collect();

    // Selection is stored by id; the row index is derived only for drawing
    let mut state = ListState::default();
    state.select(app.selected.and_then(|id| app.tasks.index_of(id)));

    let list = List::new(items).highlight_style(selected_style());
    f.render_stateful_widget(list, rows_area, &mut state);
}
