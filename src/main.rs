// lbfeed - terminal viewer for a user's listening activity feed
//
// Mounts a feed page for one viewer and shows it either in a TUI or as
// plain text.
//
// Architecture:
// - Events: timeline data model and feed payload decoding
// - Feed: rows, cursors, alerts, and playback coordination
// - Player: background task that plays listens and reports back
// - TUI (ratatui): interactive feed view with alert toasts
// - Mount: bootstrap props and the initial event batch

mod cli;
mod config;
mod events;
mod feed;
mod headless;
mod logging;
mod mount;
mod player;
mod theme;
mod tui;
mod util;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::Config;
use feed::FeedPage;
use logging::LogBuffer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Subcommands run and exit before anything is mounted
    if cli::handle_command(&cli)? {
        return Ok(());
    }

    Config::ensure_config_exists();
    let mut config = Config::from_env();
    if cli.headless {
        config.enable_tui = false;
    }

    let log_buffer = LogBuffer::new();
    // Guard flushes file logs on drop, keep it for the whole run
    let _log_guard = logging::init(&config.logging, &log_buffer, config.enable_tui);

    let props = mount::load_props(cli.props.as_deref())?;
    let batch = mount::load_feed(cli.feed.as_deref())?;
    let mut page = FeedPage::new(props, batch.events, config.feed_options());
    mount::load_pages(&mut page, &cli.older, &cli.newer)?;
    tracing::info!(
        "Mounted feed for {} ({} events, api {})",
        page.current_user().name,
        page.feed().len(),
        page.api_url()
    );

    if !config.enable_tui {
        print!("{}", headless::render_plain(&page, chrono::Utc::now()));
        return Ok(());
    }

    let (player, player_rx) = player::spawn_player(page.spotify().clone());
    page.playback_mut().mount(Box::new(player));

    tui::run_tui(page, player_rx, log_buffer, &config).await
}
