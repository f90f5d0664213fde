use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub timer_area: Rect,
    pub tasks_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Timer pane: mode tabs, clock, label, gauge
/// - Task pane: input line, count, rows
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Keybindings bar
            Constraint::Length(10), // Timer pane
            Constraint::Min(5),     // Task pane
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        timer_area: chunks[1],
        tasks_area: chunks[2],
    }
}

/// Split the timer pane interior into tabs, clock, label and gauge rows
pub fn split_timer_area(inner: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Mode tabs
            Constraint::Length(2), // Clock
            Constraint::Length(2), // Label + cycles
            Constraint::Length(1), // Gauge
            Constraint::Min(0),
        ])
        .split(inner);

    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Split the task pane interior into the input line, feedback line and rows
pub fn split_tasks_area(inner: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Input
            Constraint::Length(1), // Count / feedback
            Constraint::Min(0),    // Rows
        ])
        .split(inner);

    [chunks[0], chunks[1], chunks[2]]
}

/// Create a centered modal area
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(9),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 80, 30);
        let layout = create_layout(area);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.timer_area.height, 10);
        assert_eq!(layout.tasks_area.height, 19);
        assert_eq!(layout.tasks_area.width, 80);
    }

    #[test]
    fn test_modal_area_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let modal = create_modal_area(area);

        assert_eq!(modal.height, 9);
        assert_eq!(modal.width, 60);
        assert_eq!(modal.x, 20);
    }
}
