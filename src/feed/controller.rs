//! Feed list controller
//!
//! Owns the ordered event sequence and the pagination cursors, and turns each
//! event into a `FeedRow` for the front end. Events are kept in the order
//! they were supplied; nothing here sorts or fetches.

use super::classifier::{event_type_icon, is_listenable_type, EventIcon};
use super::playback::PlaybackCoordinator;
use super::text::{render_event_text, EventText};
use crate::events::{EventType, Listen, TimelineEvent};
use crate::util::timestamp_to_time_ago;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Inline player card for a listenable event
#[derive(Debug, Clone, PartialEq)]
pub struct ListenCard<'a> {
    pub listen: &'a Listen,
    /// Deep-equals the coordinator's current listen
    pub is_current: bool,
}

/// Everything needed to draw one feed entry
#[derive(Debug, Clone, PartialEq)]
pub struct FeedRow<'a> {
    pub key: String,
    pub event_type: EventType,
    pub icon: EventIcon,
    pub text: EventText,
    pub time_ago: String,
    pub card: Option<ListenCard<'a>>,
}

/// Parameters for fetching an adjacent page of events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    /// Only events strictly older than this
    pub max_ts: Option<i64>,
    /// Only events strictly newer than this
    pub min_ts: Option<i64>,
    pub count: usize,
}

impl PageQuery {
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(ts) = self.max_ts {
            params.push(format!("max_ts={}", ts));
        }
        if let Some(ts) = self.min_ts {
            params.push(format!("min_ts={}", ts));
        }
        params.push(format!("count={}", self.count));
        params.join("&")
    }
}

#[derive(Debug, Clone, Default)]
pub struct FeedList {
    events: Vec<TimelineEvent>,
    /// `created` of the oldest loaded event
    next_event_ts: Option<i64>,
    /// `created` of the newest loaded event
    previous_event_ts: Option<i64>,
}

impl FeedList {
    /// Take ownership of a batch sorted newest first
    pub fn new(events: Vec<TimelineEvent>) -> Self {
        warn_duplicate_keys(&events);
        Self {
            next_event_ts: events.last().map(|e| e.created),
            previous_event_ts: events.first().map(|e| e.created),
            events,
        }
    }

    pub fn is_event_listenable(event: &TimelineEvent) -> bool {
        is_listenable_type(event.event_type())
    }

    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn next_event_ts(&self) -> Option<i64> {
        self.next_event_ts
    }

    pub fn previous_event_ts(&self) -> Option<i64> {
        self.previous_event_ts
    }

    /// Playable subset, in feed order
    pub fn listens(&self) -> Vec<&Listen> {
        self.events
            .iter()
            .filter(|e| Self::is_event_listenable(e))
            .filter_map(TimelineEvent::listen)
            .collect()
    }

    /// The listen that plays after `listen` when walking down the feed
    pub fn next_listen_after(&self, listen: &Listen) -> Option<&Listen> {
        let listens = self.listens();
        let idx = listens.iter().position(|l| *l == listen)?;
        listens.get(idx + 1).copied()
    }

    /// Render every event in order
    pub fn rows(
        &self,
        viewer: &str,
        playback: &PlaybackCoordinator,
        now: DateTime<Utc>,
    ) -> Vec<FeedRow<'_>> {
        self.events
            .iter()
            .map(|event| build_row(event, viewer, playback, now))
            .collect()
    }

    /// Add a batch of events older than everything loaded
    pub fn append_older(&mut self, batch: Vec<TimelineEvent>) {
        if batch.is_empty() {
            return;
        }
        self.next_event_ts = batch.last().map(|e| e.created);
        if self.previous_event_ts.is_none() {
            self.previous_event_ts = batch.first().map(|e| e.created);
        }
        self.events.extend(batch);
        warn_duplicate_keys(&self.events);
    }

    /// Add a batch of events newer than everything loaded
    pub fn prepend_newer(&mut self, batch: Vec<TimelineEvent>) {
        if batch.is_empty() {
            return;
        }
        self.previous_event_ts = batch.first().map(|e| e.created);
        if self.next_event_ts.is_none() {
            self.next_event_ts = batch.last().map(|e| e.created);
        }
        self.events.splice(0..0, batch);
        warn_duplicate_keys(&self.events);
    }

    /// Swap in a fresh batch and re-derive both cursors
    pub fn replace(&mut self, batch: Vec<TimelineEvent>) {
        *self = Self::new(batch);
    }

    pub fn older_page_query(&self, count: usize) -> Option<PageQuery> {
        self.next_event_ts.map(|ts| PageQuery {
            max_ts: Some(ts),
            min_ts: None,
            count,
        })
    }

    pub fn newer_page_query(&self, count: usize) -> Option<PageQuery> {
        self.previous_event_ts.map(|ts| PageQuery {
            max_ts: None,
            min_ts: Some(ts),
            count,
        })
    }
}

fn build_row<'a>(
    event: &'a TimelineEvent,
    viewer: &str,
    playback: &PlaybackCoordinator,
    now: DateTime<Utc>,
) -> FeedRow<'a> {
    let event_type = event.event_type();
    let card = if FeedList::is_event_listenable(event) {
        event.listen().map(|listen| ListenCard {
            listen,
            is_current: playback.is_current(listen),
        })
    } else {
        None
    };

    FeedRow {
        key: event.key(),
        event_type,
        icon: event_type_icon(event_type),
        text: render_event_text(event, viewer),
        time_ago: timestamp_to_time_ago(event.created, now),
        card,
    }
}

// Keys are (user_name, created); two events from one user in the same second
// would collide.
fn warn_duplicate_keys(events: &[TimelineEvent]) {
    let mut seen = HashSet::new();
    for event in events {
        let key = event.key();
        if !seen.insert(key.clone()) {
            tracing::warn!("Duplicate feed key {}", key);
        }
    }
}
