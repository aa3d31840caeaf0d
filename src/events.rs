// Timeline events that make up a user's activity feed
//
// On the wire an event carries a type tag and a payload whose shape depends on
// that tag. Here the two are fused into the `EventMetadata` enum so a payload
// can only ever be read as the shape its tag promises.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Kind of a timeline event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    RecordingRecommendation,
    Like,
    Follow,
    StopFollow,
    BlockFollow,
    PlaylistCreated,
    /// Any tag this build does not know about
    Unknown,
}

impl EventType {
    #[cfg(test)]
    pub const ALL: [EventType; 7] = [
        EventType::RecordingRecommendation,
        EventType::Like,
        EventType::Follow,
        EventType::StopFollow,
        EventType::BlockFollow,
        EventType::PlaylistCreated,
        EventType::Unknown,
    ];

    /// Map a wire tag to an event type (unrecognised tags become `Unknown`)
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "recording_recommendation" => EventType::RecordingRecommendation,
            "like" => EventType::Like,
            "follow" => EventType::Follow,
            "stop_follow" => EventType::StopFollow,
            "block_follow" => EventType::BlockFollow,
            "playlist_created" => EventType::PlaylistCreated,
            _ => EventType::Unknown,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            EventType::RecordingRecommendation => "recording_recommendation",
            EventType::Like => "like",
            EventType::Follow => "follow",
            EventType::StopFollow => "stop_follow",
            EventType::BlockFollow => "block_follow",
            EventType::PlaylistCreated => "playlist_created",
            EventType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Track information attached to a listen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackMetadata {
    pub artist_name: String,
    pub track_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_name: Option<String>,
    /// Free-form extra data (recording MBIDs, service URLs, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<Value>,
}

/// A single playback record that can be handed to a player
///
/// Two listens are the same listen when every field is equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listen {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listened_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub track_metadata: TrackMetadata,
}

impl Listen {
    pub fn new(artist_name: impl Into<String>, track_name: impl Into<String>) -> Self {
        Self {
            listened_at: None,
            user_name: None,
            track_metadata: TrackMetadata {
                artist_name: artist_name.into(),
                track_name: track_name.into(),
                release_name: None,
                additional_info: None,
            },
        }
    }

    pub fn track_name(&self) -> &str {
        &self.track_metadata.track_name
    }

    pub fn artist_name(&self) -> &str {
        &self.track_metadata.artist_name
    }
}

/// Directional follow relation; `user_0` is the actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRelationship {
    pub user_0: String,
    pub user_1: String,
}

/// Playlist reference carried by `playlist_created` events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistMetadata {
    pub identifier: String,
    pub title: String,
}

/// Event payload, one variant per event type
#[derive(Debug, Clone, PartialEq)]
pub enum EventMetadata {
    RecordingRecommendation(Listen),
    Like(Listen),
    Follow(UserRelationship),
    StopFollow(UserRelationship),
    BlockFollow(UserRelationship),
    PlaylistCreated(PlaylistMetadata),
    /// Unrecognised tag, kept verbatim
    Unknown { event_type: String, metadata: Value },
}

impl EventMetadata {
    pub fn event_type(&self) -> EventType {
        match self {
            EventMetadata::RecordingRecommendation(_) => EventType::RecordingRecommendation,
            EventMetadata::Like(_) => EventType::Like,
            EventMetadata::Follow(_) => EventType::Follow,
            EventMetadata::StopFollow(_) => EventType::StopFollow,
            EventMetadata::BlockFollow(_) => EventType::BlockFollow,
            EventMetadata::PlaylistCreated(_) => EventType::PlaylistCreated,
            EventMetadata::Unknown { .. } => EventType::Unknown,
        }
    }

    /// Build the payload for a wire tag, checking the metadata shape
    pub fn from_parts(tag: &str, metadata: Value) -> Result<Self, FeedError> {
        let parsed = match EventType::from_tag(tag) {
            EventType::RecordingRecommendation => {
                EventMetadata::RecordingRecommendation(decode(tag, metadata)?)
            }
            EventType::Like => EventMetadata::Like(decode(tag, metadata)?),
            EventType::Follow => EventMetadata::Follow(decode(tag, metadata)?),
            EventType::StopFollow => EventMetadata::StopFollow(decode(tag, metadata)?),
            EventType::BlockFollow => EventMetadata::BlockFollow(decode(tag, metadata)?),
            EventType::PlaylistCreated => EventMetadata::PlaylistCreated(decode(tag, metadata)?),
            EventType::Unknown => EventMetadata::Unknown {
                event_type: tag.to_string(),
                metadata,
            },
        };
        Ok(parsed)
    }

    /// Split back into wire tag and metadata JSON
    pub fn into_parts(self) -> (String, Value) {
        let tag = self.event_type().as_tag().to_string();
        let value = match self {
            EventMetadata::RecordingRecommendation(listen) | EventMetadata::Like(listen) => {
                serde_json::to_value(listen)
            }
            EventMetadata::Follow(rel)
            | EventMetadata::StopFollow(rel)
            | EventMetadata::BlockFollow(rel) => serde_json::to_value(rel),
            EventMetadata::PlaylistCreated(playlist) => serde_json::to_value(playlist),
            EventMetadata::Unknown {
                event_type,
                metadata,
            } => return (event_type, metadata),
        };
        (tag, value.unwrap_or_default())
    }
}

fn decode<T: serde::de::DeserializeOwned>(tag: &str, metadata: Value) -> Result<T, FeedError> {
    serde_json::from_value(metadata).map_err(|e| FeedError::Metadata {
        event_type: tag.to_string(),
        message: e.to_string(),
    })
}

/// Event exactly as it appears on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawTimelineEvent {
    event_type: String,
    created: i64,
    user_name: String,
    #[serde(default)]
    metadata: Value,
}

/// One entry in the activity feed. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTimelineEvent", into = "RawTimelineEvent")]
pub struct TimelineEvent {
    /// Unix timestamp (seconds)
    pub created: i64,
    pub user_name: String,
    pub metadata: EventMetadata,
}

impl TimelineEvent {
    pub fn new(created: i64, user_name: impl Into<String>, metadata: EventMetadata) -> Self {
        Self {
            created,
            user_name: user_name.into(),
            metadata,
        }
    }

    pub fn event_type(&self) -> EventType {
        self.metadata.event_type()
    }

    /// The playable listen, for recommendation and like events
    pub fn listen(&self) -> Option<&Listen> {
        match &self.metadata {
            EventMetadata::RecordingRecommendation(listen) | EventMetadata::Like(listen) => {
                Some(listen)
            }
            _ => None,
        }
    }

    /// Render key. Assumes a user never emits two events in the same second.
    pub fn key(&self) -> String {
        format!("event-{}-{}", self.user_name, self.created)
    }
}

impl TryFrom<RawTimelineEvent> for TimelineEvent {
    type Error = FeedError;

    fn try_from(raw: RawTimelineEvent) -> Result<Self, Self::Error> {
        let metadata = EventMetadata::from_parts(&raw.event_type, raw.metadata)?;
        Ok(Self {
            created: raw.created,
            user_name: raw.user_name,
            metadata,
        })
    }
}

impl From<TimelineEvent> for RawTimelineEvent {
    fn from(event: TimelineEvent) -> Self {
        let (event_type, metadata) = event.metadata.into_parts();
        Self {
            event_type,
            created: event.created,
            user_name: event.user_name,
            metadata,
        }
    }
}

/// Errors raised while decoding feed data
#[derive(Debug)]
pub enum FeedError {
    /// Metadata does not have the shape its event type requires
    Metadata { event_type: String, message: String },
    /// Payload is not valid JSON or lacks the envelope
    Json(serde_json::Error),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Metadata {
                event_type,
                message,
            } => write!(f, "invalid metadata for {} event: {}", event_type, message),
            FeedError::Json(e) => write!(f, "invalid feed payload: {}", e),
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeedError::Json(e) => Some(e),
            FeedError::Metadata { .. } => None,
        }
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        FeedError::Json(e)
    }
}

#[derive(Debug, Deserialize)]
struct FeedEnvelope {
    payload: FeedBody,
}

#[derive(Debug, Deserialize)]
struct FeedBody {
    #[serde(default)]
    feed: Vec<Value>,
}

/// Events decoded from one feed payload
#[derive(Debug, Default)]
pub struct FeedBatch {
    pub events: Vec<TimelineEvent>,
    /// Entries dropped because they failed to decode
    pub skipped: usize,
}

/// Parse a `{"payload": {"feed": [...]}}` document
///
/// A malformed entry is logged and skipped; the rest of the batch still loads.
pub fn parse_feed(json: &str) -> Result<FeedBatch, FeedError> {
    let envelope: FeedEnvelope = serde_json::from_str(json)?;
    let mut batch = FeedBatch::default();

    for entry in envelope.payload.feed {
        match serde_json::from_value::<TimelineEvent>(entry) {
            Ok(event) => batch.events.push(event),
            Err(e) => {
                tracing::warn!("Skipping feed entry: {}", e);
                batch.skipped += 1;
            }
        }
    }

    tracing::debug!(
        "Parsed feed batch: {} events, {} skipped",
        batch.events.len(),
        batch.skipped
    );
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_follow_event() {
        let event: TimelineEvent = serde_json::from_value(json!({
            "event_type": "follow",
            "created": 1618000000,
            "user_name": "alice",
            "metadata": {"user_0": "alice", "user_1": "bob"}
        }))
        .unwrap();

        assert_eq!(event.event_type(), EventType::Follow);
        assert_eq!(
            event.metadata,
            EventMetadata::Follow(UserRelationship {
                user_0: "alice".to_string(),
                user_1: "bob".to_string(),
            })
        );
        assert!(event.listen().is_none());
    }

    #[test]
    fn test_parse_like_exposes_listen() {
        let event: TimelineEvent = serde_json::from_value(json!({
            "event_type": "like",
            "created": 1618000000,
            "user_name": "alice",
            "metadata": {
                "listened_at": 1617990000,
                "track_metadata": {"artist_name": "Portishead", "track_name": "Roads"}
            }
        }))
        .unwrap();

        let listen = event.listen().unwrap();
        assert_eq!(listen.track_name(), "Roads");
        assert_eq!(listen.artist_name(), "Portishead");
        assert_eq!(listen.listened_at, Some(1617990000));
    }

    #[test]
    fn test_unknown_event_type_is_kept_verbatim() {
        let event: TimelineEvent = serde_json::from_value(json!({
            "event_type": "listen_party",
            "created": 5,
            "user_name": "carol",
            "metadata": {"room": 7}
        }))
        .unwrap();

        assert_eq!(event.event_type(), EventType::Unknown);
        match &event.metadata {
            EventMetadata::Unknown {
                event_type,
                metadata,
            } => {
                assert_eq!(event_type, "listen_party");
                assert_eq!(metadata, &json!({"room": 7}));
            }
            other => panic!("expected unknown metadata, got {:?}", other),
        }
    }

    #[test]
    fn test_mismatched_metadata_is_rejected() {
        // Relationship metadata tagged as a like
        let result = serde_json::from_value::<TimelineEvent>(json!({
            "event_type": "like",
            "created": 1,
            "user_name": "alice",
            "metadata": {"user_0": "alice", "user_1": "bob"}
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("invalid metadata for like event"), "{}", err);
    }

    #[test]
    fn test_serialize_restores_wire_shape() {
        let event = TimelineEvent::new(
            42,
            "dave",
            EventMetadata::PlaylistCreated(PlaylistMetadata {
                identifier: "https://listenbrainz.org/playlist/abc".to_string(),
                title: "Mix".to_string(),
            }),
        );

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event_type"], "playlist_created");
        assert_eq!(value["created"], 42);
        assert_eq!(value["metadata"]["title"], "Mix");
    }

    #[test]
    fn test_parse_feed_skips_malformed_entries() {
        let json = r#"{
            "payload": {
                "count": 3,
                "feed": [
                    {"event_type": "follow", "created": 3, "user_name": "a",
                     "metadata": {"user_0": "a", "user_1": "b"}},
                    {"event_type": "playlist_created", "created": 2, "user_name": "a",
                     "metadata": {"title": "missing identifier"}},
                    {"event_type": "stop_follow", "created": 1, "user_name": "a",
                     "metadata": {"user_0": "a", "user_1": "c"}}
                ]
            }
        }"#;

        let batch = parse_feed(json).unwrap();
        assert_eq!(batch.events.len(), 2);
        assert_eq!(batch.skipped, 1);
        assert_eq!(batch.events[1].event_type(), EventType::StopFollow);
    }

    #[test]
    fn test_parse_feed_requires_envelope() {
        assert!(matches!(parse_feed("[]"), Err(FeedError::Json(_))));
    }

    #[test]
    fn test_event_type_tags() {
        for event_type in EventType::ALL {
            if event_type != EventType::Unknown {
                assert_eq!(EventType::from_tag(event_type.as_tag()), event_type);
            }
        }
        assert_eq!(EventType::from_tag("unknown"), EventType::Unknown);
    }
}
