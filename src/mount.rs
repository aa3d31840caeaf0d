// Mount - one-shot bootstrap inputs
//
// The host hands over a props JSON blob (viewer, api url, spotify account)
// and an initial event batch. Props are mandatory: without them there is no
// viewer to render the feed for, so loading fails instead of guessing.

use crate::events::{parse_feed, FeedBatch};
use crate::feed::{FeedPage, MountProps};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Env var that may carry the props blob inline
pub const PROPS_ENV: &str = "LB_FEED_PROPS";

/// Placeholder feed rendered when no feed file is given
pub const FIXTURE_FEED: &str = include_str!("../fixtures/fake-user-feed.json");

pub fn parse_props(json: &str) -> Result<MountProps> {
    serde_json::from_str(json).context("Mount props are not valid JSON")
}

/// Load props from `path`, falling back to the inline env blob
pub fn load_props(path: Option<&Path>) -> Result<MountProps> {
    load_props_from(path, |key| std::env::var(key).ok())
}

/// Same as `load_props` with an explicit environment lookup
pub(crate) fn load_props_from(
    path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<MountProps> {
    if let Some(path) = path {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read props file {}", path.display()))?;
        return parse_props(&json);
    }

    match env(PROPS_ENV) {
        Some(json) if !json.trim().is_empty() => parse_props(&json),
        _ => bail!(
            "No mount props: pass --props <file> or set {} to the props JSON",
            PROPS_ENV
        ),
    }
}

/// Load the initial event batch from `path`, or the bundled fixture
pub fn load_feed(path: Option<&Path>) -> Result<FeedBatch> {
    let batch = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read feed file {}", path.display()))?;
            parse_feed(&json).with_context(|| format!("Invalid feed in {}", path.display()))?
        }
        None => parse_feed(FIXTURE_FEED).context("Bundled fixture feed is invalid")?,
    };

    if batch.skipped > 0 {
        tracing::warn!("{} feed entries could not be decoded", batch.skipped);
    }
    Ok(batch)
}

/// Splice adjacent pages into the feed
///
/// `older` pages go below the loaded events in the order given, `newer`
/// pages go above them, each one newer than the last.
pub fn load_pages(page: &mut FeedPage, older: &[PathBuf], newer: &[PathBuf]) -> Result<()> {
    for path in older {
        let batch = load_feed(Some(path))?;
        page.feed_mut().append_older(batch.events);
    }
    for path in newer {
        let batch = load_feed(Some(path))?;
        page.feed_mut().prepend_newer(batch.events);
    }
    Ok(())
}
