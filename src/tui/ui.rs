// UI rendering logic
//
// Called on every frame. Lays out the title bar, the feed, and the status
// line, then draws the alert toasts over everything else.

use super::app::App;
use super::components::{feed_panel, status_bar, title_bar, toast};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(5),    // Feed - takes remaining space
            Constraint::Length(2), // Status bar
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    feed_panel::render(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    // Overlay last so toasts sit on top
    toast::render(f, f.area(), app.page.alerts().alerts(), &app.theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::AlertType;
    use crate::tui::app::tests::sample_app;
    use crate::tui::components::tests::buffer_text;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_draw_full_screen() {
        let mut app = sample_app();
        app.page
            .new_alert(AlertType::Warning, "Heads up", "Spotify not connected");

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Latest activity ──── alice"));
        assert!(text.contains("You are now following bob"));
        assert!(text.contains("3 events"));
        assert!(text.contains("Heads up"));
        assert!(text.contains("Spotify not connected"));
    }
}
