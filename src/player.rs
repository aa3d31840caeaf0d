// Player - stand-in playback engine
//
// Play requests travel over a bounded channel to a background task, which
// "loads" the track and reports the new current listen back to the UI loop.
// The UI never waits on it: requests are fire-and-forget and results arrive
// later as `PlayerUpdate`s.

use crate::events::Listen;
use crate::feed::{Player, SpotifyUser};
use std::time::Duration;
use tokio::sync::mpsc;

/// Buffered play requests before new ones are dropped
const REQUEST_BUFFER: usize = 16;

/// Simulated time to load a track
const LOAD_DELAY: Duration = Duration::from_millis(300);

/// Messages from the player back to the feed
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerUpdate {
    CurrentListenChanged(Listen),
    Error { headline: String, message: String },
}

/// `Player` handle that forwards requests to the background task
pub struct ChannelPlayer {
    requests: mpsc::Sender<Listen>,
}

impl Player for ChannelPlayer {
    fn play_listen(&mut self, listen: &Listen) {
        // try_send keeps the UI loop from ever blocking on the player
        if let Err(e) = self.requests.try_send(listen.clone()) {
            tracing::warn!("Player not accepting requests: {}", e);
        }
    }
}

/// Start the player task; must be called from within a tokio runtime
pub fn spawn_player(spotify: SpotifyUser) -> (ChannelPlayer, mpsc::Receiver<PlayerUpdate>) {
    let (request_tx, request_rx) = mpsc::channel(REQUEST_BUFFER);
    let (update_tx, update_rx) = mpsc::channel(REQUEST_BUFFER);

    tokio::spawn(run_player(request_rx, update_tx, spotify, LOAD_DELAY));

    (
        ChannelPlayer {
            requests: request_tx,
        },
        update_rx,
    )
}

async fn run_player(
    mut requests: mpsc::Receiver<Listen>,
    updates: mpsc::Sender<PlayerUpdate>,
    spotify: SpotifyUser,
    load_delay: Duration,
) {
    let source = if spotify.access_token.is_some() {
        "spotify"
    } else {
        "preview"
    };
    tracing::debug!("Player started (source: {})", source);

    while let Some(listen) = requests.recv().await {
        let update = if listen.track_name().trim().is_empty() {
            PlayerUpdate::Error {
                headline: "Playback error".to_string(),
                message: "This listen has no track name to search for".to_string(),
            }
        } else {
            tracing::info!(
                "Loading {} - {} via {}",
                listen.artist_name(),
                listen.track_name(),
                source
            );
            tokio::time::sleep(load_delay).await;
            PlayerUpdate::CurrentListenChanged(listen)
        };

        if updates.send(update).await.is_err() {
            // UI loop is gone
            break;
        }
    }

    tracing::debug!("Player stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_play_reports_current_listen() {
        let (mut player, mut updates) = spawn_player(SpotifyUser::default());
        let listen = Listen::new("Four Tet", "Baby");

        player.play_listen(&listen);

        let update = updates.recv().await.unwrap();
        assert_eq!(update, PlayerUpdate::CurrentListenChanged(listen));
    }

    #[tokio::test]
    async fn test_listen_without_track_name_reports_error() {
        let (mut player, mut updates) = spawn_player(SpotifyUser::default());
        player.play_listen(&Listen::new("Someone", "  "));

        match updates.recv().await.unwrap() {
            PlayerUpdate::Error { headline, .. } => assert_eq!(headline, "Playback error"),
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_updates_arrive_in_request_order() {
        let (request_tx, request_rx) = mpsc::channel(4);
        let (update_tx, mut update_rx) = mpsc::channel(4);
        tokio::spawn(run_player(
            request_rx,
            update_tx,
            SpotifyUser::default(),
            Duration::ZERO,
        ));

        let mut player = ChannelPlayer {
            requests: request_tx,
        };
        player.play_listen(&Listen::new("a", "1"));
        player.play_listen(&Listen::new("a", "2"));

        let first = update_rx.recv().await.unwrap();
        let second = update_rx.recv().await.unwrap();
        assert_eq!(first, PlayerUpdate::CurrentListenChanged(Listen::new("a", "1")));
        assert_eq!(second, PlayerUpdate::CurrentListenChanged(Listen::new("a", "2")));
    }
}
