// Components module - UI building blocks
//
// - Title bar: page heading, viewer, key hint
// - Feed panel: the timeline itself
// - Status bar: counts, cursors, now playing, newest log line
// - Toast: alert stack overlay
//
// Each component is a focused, single-responsibility module.

pub mod feed_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
