//! Event text renderer
//!
//! Produces the description line for an event as a sequence of plain text and
//! link segments. The front end decides how links look; the wording and the
//! branching live here.

use super::classifier::event_type_phrase;
use crate::events::{EventMetadata, TimelineEvent};
use crate::util::encode_path_segment;
use std::fmt;

/// One piece of an event description
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSegment {
    Text(String),
    Link {
        href: String,
        label: String,
        /// Opens outside the feed (new tab in a browser)
        external: bool,
    },
}

/// Rendered event description
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventText {
    pub segments: Vec<TextSegment>,
}

impl EventText {
    fn text(mut self, text: impl Into<String>) -> Self {
        self.segments.push(TextSegment::Text(text.into()));
        self
    }

    fn link(mut self, href: impl Into<String>, label: impl Into<String>) -> Self {
        self.segments.push(TextSegment::Link {
            href: href.into(),
            label: label.into(),
            external: false,
        });
        self
    }

    fn external_link(mut self, href: impl Into<String>, label: impl Into<String>) -> Self {
        self.segments.push(TextSegment::Link {
            href: href.into(),
            label: label.into(),
            external: true,
        });
        self
    }

    /// All links in order, as (href, label)
    #[cfg(test)]
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.segments.iter().filter_map(|segment| match segment {
            TextSegment::Link { href, label, .. } => Some((href.as_str(), label.as_str())),
            TextSegment::Text(_) => None,
        })
    }
}

impl fmt::Display for EventText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                TextSegment::Text(text) => f.write_str(text)?,
                TextSegment::Link { label, .. } => f.write_str(label)?,
            }
        }
        Ok(())
    }
}

fn profile_url(user_name: &str) -> String {
    format!("/user/{}", encode_path_segment(user_name))
}

/// Describe `event` as seen by `viewer`
pub fn render_event_text(event: &TimelineEvent, viewer: &str) -> EventText {
    match &event.metadata {
        EventMetadata::Follow(rel) => {
            if rel.user_0 == viewer {
                EventText::default()
                    .text("You are now following ")
                    .link(profile_url(&rel.user_1), &rel.user_1)
            } else {
                EventText::default()
                    .link(profile_url(&rel.user_0), &rel.user_0)
                    .text(" is now following you")
            }
        }
        EventMetadata::PlaylistCreated(playlist) => EventText::default()
            .text("We created a playlist for you: ")
            .link(&playlist.identifier, &playlist.title),
        // stop_follow and block_follow share follow's metadata but are worded
        // like any other actor event
        _ => {
            let text = EventText::default()
                .external_link(profile_url(&event.user_name), &event.user_name);
            let phrase = event_type_phrase(event.event_type());
            if phrase.is_empty() {
                text
            } else {
                text.text(format!(" {}", phrase))
            }
        }
    }
}
