// Title bar component
//
// Renders the page heading, the viewer's name and a key hint.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const KEY_HINT: &str = " j/k move · enter play · n next · d dismiss · r reset · q quit ";

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title_text = format!(" ♫ Latest activity ──── {}", app.page.current_user().name);

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(KEY_HINT).right_aligned()),
        );

    f.render_widget(title, area);
}
