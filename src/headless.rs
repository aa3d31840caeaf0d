// Headless rendering
//
// Plain-text rendition of the feed page for `--headless`: one line per
// event tagged with its icon name, an indented line for each playable card,
// then where the adjacent pages would be fetched from.

use crate::feed::FeedPage;
use chrono::{DateTime, Utc};
use std::fmt::Write;

pub fn render_plain(page: &FeedPage, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Latest activity for {}", page.current_user().name);

    let rows = page.rows(now);
    if rows.is_empty() {
        let _ = writeln!(out, "  (no events)");
    }

    for row in &rows {
        let _ = writeln!(
            out,
            "[{}] {} · {}",
            row.icon.name(),
            row.text,
            row.time_ago
        );
        if let Some(card) = &row.card {
            let marker = if card.is_current { "■" } else { "▶" };
            let _ = writeln!(
                out,
                "    {} {} — {}",
                marker,
                card.listen.track_name(),
                card.listen.artist_name()
            );
        }
    }

    if let Some(query) = page.newer_page_query() {
        let _ = writeln!(out, "newer: {}", page.page_url(&query));
    }
    if let Some(query) = page.older_page_query() {
        let _ = writeln!(out, "older: {}", page.page_url(&query));
    }

    out
}
