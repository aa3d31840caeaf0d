// Feed core - classification, text, list state, alerts and playback
//
// Everything in here is front-end agnostic: the TUI and the headless printer
// both consume `FeedRow`s produced by `FeedPage`.

pub mod alerts;
pub mod classifier;
pub mod controller;
pub mod page;
pub mod playback;
pub mod text;

pub use alerts::{Alert, AlertManager, AlertType};
pub use classifier::EventIcon;
pub use controller::{FeedList, FeedRow, ListenCard, PageQuery};
pub use page::{CurrentUser, FeedOptions, FeedPage, MountProps, SpotifyUser};
pub use playback::{PlaybackCoordinator, Player};
pub use text::{EventText, TextSegment};
