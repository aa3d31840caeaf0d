//! Feed panel component
//!
//! Draws the timeline: one list item per event with its badge, description
//! and age, plus an inline card for events that carry a playable listen.
//! Selection scrolling is left to ratatui's `ListState`.

use crate::feed::{EventText, FeedRow, ListenCard, TextSegment};
use crate::theme::Theme;
use crate::tui::app::App;
use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Convert description segments into styled spans (links underlined)
pub fn event_text_spans(text: &EventText, theme: &Theme) -> Vec<Span<'static>> {
    text.segments
        .iter()
        .map(|segment| match segment {
            TextSegment::Text(text) => {
                Span::styled(text.clone(), Style::default().fg(theme.foreground))
            }
            TextSegment::Link {
                label, external, ..
            } => {
                let mut style = Style::default()
                    .fg(theme.link)
                    .add_modifier(Modifier::UNDERLINED);
                if *external {
                    style = style.add_modifier(Modifier::ITALIC);
                }
                Span::styled(label.clone(), style)
            }
        })
        .collect()
}

/// Badge: the event icon on a circle of the event's color
fn badge(row: &FeedRow, theme: &Theme) -> Span<'static> {
    Span::styled(
        format!(" {} ", row.icon.glyph()),
        Style::default()
            .fg(theme.background)
            .bg(theme.event_color(row.event_type))
            .add_modifier(Modifier::BOLD),
    )
}

fn card_line(card: &ListenCard, theme: &Theme) -> Line<'static> {
    let listen = card.listen;
    let (marker, style) = if card.is_current {
        (
            "■",
            Style::default()
                .fg(theme.current_listen)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("▶", Style::default().fg(theme.foreground))
    };

    let mut spans = vec![
        Span::raw("     "),
        Span::styled(format!("{} ", marker), style),
        Span::styled(listen.track_name().to_string(), style),
        Span::styled(
            format!(" — {}", listen.artist_name()),
            Style::default().fg(theme.muted),
        ),
    ];
    if card.is_current {
        spans.push(Span::styled(" (now playing)", style));
    }
    Line::from(spans)
}

fn row_item(row: &FeedRow, theme: &Theme) -> ListItem<'static> {
    let mut header = vec![badge(row, theme), Span::raw(" ")];
    header.extend(event_text_spans(&row.text, theme));
    header.push(Span::styled(
        format!("  · {}", row.time_ago),
        Style::default().fg(theme.muted),
    ));

    let mut lines = vec![Line::from(header)];
    if let Some(card) = &row.card {
        lines.push(card_line(card, theme));
    }
    ListItem::new(Text::from(lines))
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let rows = app.page.rows(Utc::now());

    let items: Vec<ListItem> = rows.iter().map(|row| row_item(row, theme)).collect();

    let title = if rows.is_empty() {
        " Latest activity ".to_string()
    } else {
        format!(" Latest activity ({}/{}) ", app.selected + 1, rows.len())
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(title),
        )
        .highlight_style(
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection),
        );

    let mut state = ListState::default().with_selected((!rows.is_empty()).then_some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::tests::sample_app;
    use crate::tui::components::tests::buffer_text;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_renders_descriptions_and_cards() {
        let app = sample_app();
        let mut terminal = Terminal::new(TestBackend::new(90, 12)).unwrap();
        terminal.draw(|f| render(f, f.area(), &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("You are now following bob"));
        assert!(text.contains("carol added a song to their favorites"));
        assert!(text.contains("▶ La femme d'argent"));
        assert!(text.contains("Latest activity (1/3)"));
    }

    #[test]
    fn test_current_listen_is_marked() {
        let mut app = sample_app();
        app.page
            .handle_current_listen_change(crate::events::Listen::new("Air", "Sexy Boy"));

        let mut terminal = Terminal::new(TestBackend::new(90, 12)).unwrap();
        terminal.draw(|f| render(f, f.area(), &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("■ Sexy Boy"));
        assert!(text.contains("(now playing)"));
        assert!(text.contains("▶ La femme d'argent"));
    }

    #[test]
    fn test_link_segments_are_underlined() {
        let text = EventText {
            segments: vec![
                TextSegment::Text("You are now following ".to_string()),
                TextSegment::Link {
                    href: "/user/bob".to_string(),
                    label: "bob".to_string(),
                    external: false,
                },
            ],
        };
        let spans = event_text_spans(&text, &Theme::auto());
        assert_eq!(spans.len(), 2);
        assert!(spans[1].style.add_modifier.contains(Modifier::UNDERLINED));
        assert!(!spans[0].style.add_modifier.contains(Modifier::UNDERLINED));
    }
}
