// CLI module - command-line argument parsing and handlers
//
// Running without a subcommand mounts the feed. The config subcommand
// inspects or resets the config file:
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Rewrite config file with defaults

use crate::config::{Config, VERSION};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// lbfeed - terminal viewer for a user's listening activity feed
#[derive(Parser, Debug)]
#[command(name = "lbfeed")]
#[command(version = VERSION)]
#[command(about = "Terminal viewer for a user's listening activity feed", long_about = None)]
pub struct Cli {
    /// Mount props JSON (current_user, api_url, spotify). Falls back to $LB_FEED_PROPS
    #[arg(long, value_name = "FILE")]
    pub props: Option<PathBuf>,

    /// Feed payload JSON to render instead of the bundled placeholder feed
    #[arg(long, value_name = "FILE")]
    pub feed: Option<PathBuf>,

    /// Older page of events to append below the initial batch (repeatable)
    #[arg(long, value_name = "FILE")]
    pub older: Vec<PathBuf>,

    /// Newer page of events to insert above the initial batch (repeatable)
    #[arg(long, value_name = "FILE")]
    pub newer: Vec<PathBuf>,

    /// Print the rendered feed and exit instead of starting the TUI
    #[arg(long)]
    pub headless: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Handle subcommands. Returns true if one was handled (exit after).
pub fn handle_command(cli: &Cli) -> Result<bool> {
    match cli.command {
        Some(Commands::Config { show, path, reset }) => {
            if path {
                handle_config_path()?;
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset()?;
            } else {
                println!("Usage: lbfeed config [--show|--path|--reset]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --path    Show config file path");
                println!("  --reset   Reset config file to defaults");
            }
            Ok(true)
        }
        None => Ok(false), // No subcommand, mount the feed
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mount_args() {
        let cli = Cli::parse_from([
            "lbfeed",
            "--props",
            "props.json",
            "--feed",
            "feed.json",
            "--headless",
        ]);
        assert_eq!(cli.props, Some(PathBuf::from("props.json")));
        assert_eq!(cli.feed, Some(PathBuf::from("feed.json")));
        assert!(cli.headless);
        assert!(cli.older.is_empty());
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_page_files_repeat() {
        let cli = Cli::parse_from([
            "lbfeed", "--older", "p2.json", "--older", "p3.json", "--newer", "p0.json",
        ]);
        assert_eq!(
            cli.older,
            vec![PathBuf::from("p2.json"), PathBuf::from("p3.json")]
        );
        assert_eq!(cli.newer, vec![PathBuf::from("p0.json")]);
    }

    #[test]
    fn test_parse_config_subcommand() {
        let cli = Cli::parse_from(["lbfeed", "config", "--path"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                path: true,
                show: false,
                reset: false
            })
        ));
    }

    #[test]
    fn test_no_subcommand_is_not_handled() {
        let cli = Cli::parse_from(["lbfeed"]);
        assert!(!handle_command(&cli).unwrap());
    }
}
