//! Playback coordinator
//!
//! Tracks which single listen is current and forwards play requests to
//! whatever player is mounted. Requests made while no player is mounted are
//! dropped, not queued.

use crate::events::Listen;

/// Playback engine contract
///
/// Implementations start playback asynchronously and report the new current
/// listen back through their own channel.
pub trait Player {
    fn play_listen(&mut self, listen: &Listen);
}

#[derive(Default)]
pub struct PlaybackCoordinator {
    current: Option<Listen>,
    player: Option<Box<dyn Player + Send>>,
}

impl PlaybackCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, player: Box<dyn Player + Send>) {
        self.player = Some(player);
    }

    pub fn unmount(&mut self) {
        self.player = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.player.is_some()
    }

    pub fn set_current(&mut self, listen: Listen) {
        self.current = Some(listen);
    }

    pub fn current(&self) -> Option<&Listen> {
        self.current.as_ref()
    }

    /// Deep comparison against the current listen
    pub fn is_current(&self, listen: &Listen) -> bool {
        self.current.as_ref() == Some(listen)
    }

    /// Forward to the player if one is mounted; returns whether it was sent
    pub fn request_play(&mut self, listen: &Listen) -> bool {
        match self.player.as_mut() {
            Some(player) => {
                player.play_listen(listen);
                true
            }
            None => {
                tracing::debug!(
                    "No player mounted, dropping play request for {}",
                    listen.track_name()
                );
                false
            }
        }
    }
}

impl std::fmt::Debug for PlaybackCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackCoordinator")
            .field("current", &self.current)
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Player that records every request
    #[derive(Clone, Default)]
    pub(crate) struct RecordingPlayer {
        pub played: Arc<Mutex<Vec<Listen>>>,
    }

    impl Player for RecordingPlayer {
        fn play_listen(&mut self, listen: &Listen) {
            self.played.lock().unwrap().push(listen.clone());
        }
    }

    #[test]
    fn test_is_current_uses_value_equality() {
        let mut playback = PlaybackCoordinator::new();
        let listen = Listen::new("Massive Attack", "Teardrop");
        assert!(!playback.is_current(&listen));

        playback.set_current(listen.clone());
        assert!(playback.is_current(&Listen::new("Massive Attack", "Teardrop")));

        let mut other = listen.clone();
        other.listened_at = Some(1);
        assert!(!playback.is_current(&other));

        let mut other = listen;
        other.track_metadata.release_name = Some("Mezzanine".to_string());
        assert!(!playback.is_current(&other));
    }

    #[test]
    fn test_set_current_replaces_previous() {
        let mut playback = PlaybackCoordinator::new();
        playback.set_current(Listen::new("a", "1"));
        playback.set_current(Listen::new("a", "2"));

        assert!(!playback.is_current(&Listen::new("a", "1")));
        assert_eq!(playback.current().map(|l| l.track_name()), Some("2"));
    }

    #[test]
    fn test_request_play_without_player_is_dropped() {
        let mut playback = PlaybackCoordinator::new();
        assert!(!playback.request_play(&Listen::new("a", "b")));
        assert!(playback.current().is_none());
    }

    #[test]
    fn test_request_play_forwards_to_mounted_player() {
        let player = RecordingPlayer::default();
        let played = player.played.clone();
        let mut playback = PlaybackCoordinator::new();
        playback.mount(Box::new(player));

        let listen = Listen::new("Boards of Canada", "Roygbiv");
        assert!(playback.request_play(&listen));
        assert_eq!(played.lock().unwrap().as_slice(), &[listen.clone()]);

        playback.unmount();
        assert!(!playback.request_play(&listen));
        assert_eq!(played.lock().unwrap().len(), 1);
    }
}
