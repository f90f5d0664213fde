use crate::app::AppState;
use crate::domain::{format_clock, progress_percent, status_badge, Mode, TimerStatus};
use crate::ui::layout::split_timer_area;
use crate::ui::styles::{
    accent_color, active_tab_style, border_style, clock_style, default_style, gauge_style,
    hint_style, title_style,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Tabs},
    Frame,
};

/// Render the countdown pane from the last timer snapshot
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let snapshot = &app.view.timer;

    // Border takes the mode accent while the countdown runs
    let border = if snapshot.status == TimerStatus::Running {
        Style::default().fg(accent_color(snapshot.accent))
    } else {
        border_style()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(" Timer ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [tabs_area, clock_area, label_area, gauge_area] = split_timer_area(inner);

    let titles: Vec<Line> = Mode::all()
        .iter()
        .enumerate()
        .map(|(i, mode)| Line::from(format!("{} {}", i + 1, mode.name())))
        .collect();
    let selected = Mode::all()
        .iter()
        .position(|mode| *mode == snapshot.mode)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(hint_style())
        .highlight_style(active_tab_style(snapshot.accent));
    f.render_widget(tabs, tabs_area);

    let clock = Paragraph::new(Line::from(vec![
        Span::styled(format_clock(snapshot.remaining_seconds), clock_style(snapshot.accent)),
        Span::raw("   "),
        Span::styled(status_badge(snapshot.status, app.use_emoji), hint_style()),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(clock, clock_area);

    let label = Paragraph::new(vec![
        Line::styled(snapshot.label, default_style()),
        Line::styled(
            format!("Completed cycles: {}", snapshot.completed_cycles),
            hint_style(),
        ),
    ])
    .alignment(Alignment::Center);
    f.render_widget(label, label_area);

    let gauge = Gauge::default()
        .gauge_style(gauge_style(snapshot.accent))
        .ratio(snapshot.progress.clamp(0.0, 1.0))
        .label(format!("{}%", progress_percent(snapshot.progress)));
    f.render_widget(gauge, gauge_area);
}
