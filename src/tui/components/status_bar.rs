// Status bar component
//
// Renders feed statistics at the bottom: uptime, events, listens, cursors,
// what is playing, and the newest log line.

use crate::tui::app::App;
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn cursor(ts: Option<i64>) -> String {
    ts.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Build the status line text
pub fn status_text(app: &App) -> String {
    let feed = app.page.feed();

    let playing = match app.page.playback().current() {
        Some(listen) => format!(" │ ■ {} - {}", listen.artist_name(), listen.track_name()),
        None => String::new(),
    };

    let log = match app.log_buffer.latest() {
        Some(entry) => format!(
            " │ {} {} {}: {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.level.as_str(),
            entry.target,
            entry.message
        ),
        None => String::new(),
    };

    format!(
        " {} │ {} events │ ♪ {} │ newer > {} │ older < {}{}{}",
        app.uptime(),
        feed.len(),
        app.page.listens().len(),
        cursor(feed.previous_event_ts()),
        cursor(feed.next_event_ts()),
        playing,
        log,
    )
}

/// Render the status bar with feed statistics
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let text = truncate_to_width(&status_text(app), area.width as usize);

    let status = Paragraph::new(text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
