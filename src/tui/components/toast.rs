//! Alert toast stack
//!
//! Non-blocking overlay in the bottom-right corner, drawn on top of all
//! other content. Newest alert sits at the bottom; older ones stack upward
//! until the space runs out. Expiry is handled by `App::expire_alerts`.

use crate::feed::Alert;
use crate::theme::Theme;
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Widest a toast gets, borders included
const MAX_TOAST_WIDTH: u16 = 48;

/// Headline + message + 2 border rows
const TOAST_HEIGHT: u16 = 4;

/// Area for the `index`-th toast counted from the bottom, if it fits
fn toast_area(area: Rect, index: u16) -> Option<Rect> {
    let width = MAX_TOAST_WIDTH.min(area.width.saturating_sub(4));
    if width < 10 {
        return None;
    }

    // Offset by 2 cells from the bottom-right edge
    let bottom = area.bottom().checked_sub(2 + index * TOAST_HEIGHT)?;
    let y = bottom.checked_sub(TOAST_HEIGHT)?;
    if y < area.top() {
        return None;
    }
    let x = area.right().saturating_sub(width + 2);

    Some(Rect::new(x, y, width, TOAST_HEIGHT))
}

pub fn render(f: &mut Frame, area: Rect, alerts: &[Alert], theme: &Theme) {
    for (index, alert) in alerts.iter().rev().enumerate() {
        let Some(toast) = toast_area(area, index as u16) else {
            break;
        };

        let color = theme.alert_color(alert.alert_type);
        let inner_width = toast.width.saturating_sub(2) as usize;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(color))
            .title(" Dismiss: d ")
            .title_style(Style::default().fg(theme.muted))
            .style(Style::default().bg(theme.background));

        let lines = vec![
            Line::from(Span::styled(
                truncate_to_width(&alert.headline, inner_width),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate_to_width(&alert.message, inner_width),
                Style::default().fg(theme.foreground),
            )),
        ];

        // Clear the area first so the toast appears on top
        f.render_widget(Clear, toast);
        f.render_widget(Paragraph::new(lines).block(block), toast);
    }
}
