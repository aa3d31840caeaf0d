//! User feed page
//!
//! Composes the feed list, alert queue and playback coordinator for one
//! viewer. Built from already-parsed mount props; reading those props is the
//! bootstrap's job (see `mount`).

use super::alerts::{Alert, AlertManager, AlertType};
use super::controller::{FeedList, FeedRow, PageQuery};
use super::playback::PlaybackCoordinator;
use crate::events::{Listen, TimelineEvent};
use crate::util::encode_path_segment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in user viewing the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    /// Anything else the host sends along (id, auth token, ...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CurrentUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// External playback account, passed through to the player untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotifyUser {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub permission: Vec<String>,
}

/// Props handed over by the host at mount time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountProps {
    #[serde(default)]
    pub api_url: Option<String>,
    pub current_user: CurrentUser,
    #[serde(default)]
    pub spotify: SpotifyUser,
}

/// Settings that come from configuration rather than the host
#[derive(Debug, Clone)]
pub struct FeedOptions {
    /// Used when the props carry no api_url
    pub fallback_api_url: String,
    pub events_per_page: usize,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            fallback_api_url: "https://api.listenbrainz.org/1".to_string(),
            events_per_page: 25,
        }
    }
}

#[derive(Debug)]
pub struct FeedPage {
    current_user: CurrentUser,
    api_url: String,
    spotify: SpotifyUser,
    events_per_page: usize,
    feed: FeedList,
    alerts: AlertManager,
    playback: PlaybackCoordinator,
}

impl FeedPage {
    pub fn new(props: MountProps, events: Vec<TimelineEvent>, options: FeedOptions) -> Self {
        let api_url = props
            .api_url
            .filter(|url| !url.is_empty())
            .unwrap_or(options.fallback_api_url);

        Self {
            current_user: props.current_user,
            api_url,
            spotify: props.spotify,
            events_per_page: options.events_per_page,
            feed: FeedList::new(events),
            alerts: AlertManager::new(),
            playback: PlaybackCoordinator::new(),
        }
    }

    pub fn current_user(&self) -> &CurrentUser {
        &self.current_user
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn spotify(&self) -> &SpotifyUser {
        &self.spotify
    }

    pub fn feed(&self) -> &FeedList {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut FeedList {
        &mut self.feed
    }

    pub fn alerts(&self) -> &AlertManager {
        &self.alerts
    }

    pub fn playback(&self) -> &PlaybackCoordinator {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut PlaybackCoordinator {
        &mut self.playback
    }

    pub fn rows(&self, now: DateTime<Utc>) -> Vec<FeedRow<'_>> {
        self.feed.rows(&self.current_user.name, &self.playback, now)
    }

    pub fn listens(&self) -> Vec<&Listen> {
        self.feed.listens()
    }

    pub fn play_listen(&mut self, listen: &Listen) -> bool {
        self.playback.request_play(listen)
    }

    /// Player callback: a different listen is now loaded
    pub fn handle_current_listen_change(&mut self, listen: Listen) {
        tracing::info!(
            "Now playing: {} - {}",
            listen.artist_name(),
            listen.track_name()
        );
        self.playback.set_current(listen);
    }

    pub fn is_current_listen(&self, listen: &Listen) -> bool {
        self.playback.is_current(listen)
    }

    pub fn new_alert(
        &mut self,
        alert_type: AlertType,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Alert {
        self.alerts.raise(alert_type, title, message)
    }

    pub fn on_alert_dismissed(&mut self, alert: &Alert) -> bool {
        self.alerts.dismiss(alert)
    }

    pub fn older_page_query(&self) -> Option<PageQuery> {
        self.feed.older_page_query(self.events_per_page)
    }

    pub fn newer_page_query(&self) -> Option<PageQuery> {
        self.feed.newer_page_query(self.events_per_page)
    }

    /// Feed endpoint for the viewer with the given query appended
    pub fn page_url(&self, query: &PageQuery) -> String {
        format!(
            "{}/user/{}/feed/events?{}",
            self.api_url.trim_end_matches('/'),
            encode_path_segment(&self.current_user.name),
            query.to_query_string()
        )
    }
}
