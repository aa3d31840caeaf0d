//! Event classifier
//!
//! Maps an event type to its icon, its self-describing phrase and whether
//! the event carries something playable. Pure functions of the enum value.

use crate::events::EventType;

/// Icon shown inside the event's badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventIcon {
    Music,
    Heart,
    UserPlus,
    UserSlash,
    UserSecret,
    ListUl,
    Question,
}

impl EventIcon {
    /// Icon token name
    pub fn name(&self) -> &'static str {
        match self {
            EventIcon::Music => "music",
            EventIcon::Heart => "heart",
            EventIcon::UserPlus => "user-plus",
            EventIcon::UserSlash => "user-slash",
            EventIcon::UserSecret => "user-secret",
            EventIcon::ListUl => "list-ul",
            EventIcon::Question => "question",
        }
    }

    /// Single-cell glyph for terminal rendering
    pub fn glyph(&self) -> &'static str {
        match self {
            EventIcon::Music => "♪",
            EventIcon::Heart => "♥",
            EventIcon::UserPlus => "+",
            EventIcon::UserSlash => "−",
            EventIcon::UserSecret => "⊘",
            EventIcon::ListUl => "≡",
            EventIcon::Question => "?",
        }
    }
}

pub fn event_type_icon(event_type: EventType) -> EventIcon {
    match event_type {
        EventType::RecordingRecommendation => EventIcon::Music,
        EventType::Like => EventIcon::Heart,
        EventType::Follow => EventIcon::UserPlus,
        EventType::StopFollow => EventIcon::UserSlash,
        EventType::BlockFollow => EventIcon::UserSecret,
        EventType::PlaylistCreated => EventIcon::ListUl,
        EventType::Unknown => EventIcon::Question,
    }
}

/// Phrase that follows the actor's name for self-describing events
///
/// Relationship and playlist events are worded by the text renderer, so they
/// (and unknown types) get an empty phrase.
pub fn event_type_phrase(event_type: EventType) -> &'static str {
    match event_type {
        EventType::RecordingRecommendation => "recommended a song",
        EventType::Like => "added a song to their favorites",
        _ => "",
    }
}

/// Only recommendations and likes carry a playable listen
pub fn is_listenable_type(event_type: EventType) -> bool {
    matches!(
        event_type,
        EventType::RecordingRecommendation | EventType::Like
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listenable_types() {
        for event_type in EventType::ALL {
            let expected = event_type == EventType::RecordingRecommendation
                || event_type == EventType::Like;
            assert_eq!(
                is_listenable_type(event_type),
                expected,
                "wrong listenable flag for {}",
                event_type
            );
        }
    }

    #[test]
    fn test_icons() {
        assert_eq!(
            event_type_icon(EventType::RecordingRecommendation),
            EventIcon::Music
        );
        assert_eq!(event_type_icon(EventType::Like), EventIcon::Heart);
        assert_eq!(event_type_icon(EventType::Follow), EventIcon::UserPlus);
        assert_eq!(event_type_icon(EventType::StopFollow), EventIcon::UserSlash);
        assert_eq!(
            event_type_icon(EventType::BlockFollow),
            EventIcon::UserSecret
        );
        assert_eq!(
            event_type_icon(EventType::PlaylistCreated),
            EventIcon::ListUl
        );
        assert_eq!(event_type_icon(EventType::Unknown).name(), "question");
    }

    #[test]
    fn test_phrases_only_for_self_describing_events() {
        assert_eq!(
            event_type_phrase(EventType::RecordingRecommendation),
            "recommended a song"
        );
        assert_eq!(
            event_type_phrase(EventType::Like),
            "added a song to their favorites"
        );
        for event_type in [
            EventType::Follow,
            EventType::StopFollow,
            EventType::BlockFollow,
            EventType::PlaylistCreated,
            EventType::Unknown,
        ] {
            assert_eq!(event_type_phrase(event_type), "");
        }
    }
}
