// TUI application state
//
// Wraps the feed page with the state only the terminal front end needs:
// selection, theme, quit flag, and when each alert toast went on screen.

use crate::config::Config;
use crate::events::TimelineEvent;
use crate::feed::{AlertType, FeedPage};
use crate::logging::LogBuffer;
use crate::player::PlayerUpdate;
use crate::theme::Theme;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Main application state for the TUI
pub struct App {
    pub page: FeedPage,

    /// Index of the selected event
    pub selected: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    pub theme: Theme,

    /// Log buffer for the status line
    pub log_buffer: LogBuffer,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    alert_timeout: Duration,

    /// First time each alert (by id) was drawn
    alert_shown_at: HashMap<i64, Instant>,

    /// Events the page was mounted with, before any extra pages
    first_page: Vec<TimelineEvent>,
}

impl App {
    pub fn new(page: FeedPage, config: &Config, log_buffer: LogBuffer) -> Self {
        let first_page = page.feed().events().to_vec();
        Self {
            page,
            selected: 0,
            should_quit: false,
            theme: Theme::by_name(&config.theme),
            log_buffer,
            start_time: Instant::now(),
            alert_timeout: config.alert_timeout(),
            alert_shown_at: HashMap::new(),
            first_page,
        }
    }

    pub fn event_count(&self) -> usize {
        self.page.feed().len()
    }

    pub fn selected_event(&self) -> Option<&TimelineEvent> {
        self.page.feed().events().get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.event_count() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.event_count().saturating_sub(1);
    }

    /// Play the selected event's listen, or explain why there is none
    pub fn play_selected(&mut self) {
        let Some(event) = self.selected_event() else {
            return;
        };
        let event_type = event.event_type();
        let listen = event.listen().cloned();

        match listen {
            Some(listen) if self.page.is_current_listen(&listen) => {
                tracing::debug!("Already playing {}", listen.track_name());
            }
            Some(listen) => {
                self.page.play_listen(&listen);
            }
            None => {
                self.page.new_alert(
                    AlertType::Info,
                    "Nothing to play",
                    format!("{} events have no track attached", event_type),
                );
            }
        }
    }

    /// Play the listen after the current one, or the first one
    pub fn play_next(&mut self) {
        let next = {
            let feed = self.page.feed();
            match self.page.playback().current() {
                Some(current) => feed.next_listen_after(current).cloned(),
                None => feed.listens().first().map(|l| (*l).clone()),
            }
        };

        match next {
            Some(listen) => {
                self.page.play_listen(&listen);
            }
            None => {
                self.page
                    .new_alert(AlertType::Info, "End of feed", "No more tracks to play");
            }
        }
    }

    /// Drop spliced-in pages and go back to the mount-time batch
    pub fn reset_to_first_page(&mut self) {
        self.page.feed_mut().replace(self.first_page.clone());
        self.selected = 0;
    }

    pub fn dismiss_oldest_alert(&mut self) {
        if let Some(alert) = self.page.alerts().alerts().first().cloned() {
            self.page.on_alert_dismissed(&alert);
            self.alert_shown_at.remove(&alert.id);
        }
    }

    pub fn handle_player_update(&mut self, update: PlayerUpdate) {
        match update {
            PlayerUpdate::CurrentListenChanged(listen) => {
                self.page.handle_current_listen_change(listen);
            }
            PlayerUpdate::Error { headline, message } => {
                tracing::warn!("{}: {}", headline, message);
                self.page.new_alert(AlertType::Danger, headline, message);
            }
        }
    }

    /// Dismiss alerts that have been on screen longer than the timeout
    pub fn expire_alerts(&mut self, now: Instant) {
        let timeout = self.alert_timeout;
        let mut expired = Vec::new();

        for alert in self.page.alerts().alerts() {
            let shown_at = *self.alert_shown_at.entry(alert.id).or_insert(now);
            if now.duration_since(shown_at) >= timeout {
                expired.push(alert.clone());
            }
        }

        for alert in expired {
            self.page.on_alert_dismissed(&alert);
            self.alert_shown_at.remove(&alert.id);
        }
    }

    /// Get formatted uptime string
    pub fn uptime(&self) -> String {
        let elapsed = self.start_time.elapsed().as_secs();
        format!("{:02}:{:02}", elapsed / 60, elapsed % 60)
    }
}
