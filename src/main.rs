#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::FolioConfig;

use crate::context::Session;

/// Session data, resolved before the window opens
static SESSION: OnceLock<Session> = OnceLock::new();

/// Get the session (config + catalog) resolved at startup
pub fn session() -> Session {
    SESSION.get().cloned().unwrap_or_default()
}

/// Folio - art portfolio gallery
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - single-page art portfolio gallery")]
struct Args {
    /// JSON config file (default: <config dir>/folio/config.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable entrance and lightbox animations
    #[arg(long)]
    no_motion: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Get the default config path (<config dir>/folio/config.json)
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
        .join("config.json")
}

/// An explicit `--config` must load. The default location is optional and
/// a broken file there only costs a warning.
fn resolve_config(explicit: Option<&Path>) -> Result<FolioConfig> {
    if let Some(path) = explicit {
        return FolioConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    let path = default_config_path();
    if !path.exists() {
        tracing::debug!(?path, "No config file, using defaults");
        return Ok(FolioConfig::default());
    }

    match FolioConfig::load(&path) {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::warn!("Ignoring config {}: {}", path.display(), e);
            Ok(FolioConfig::default())
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let mut config = resolve_config(args.config.as_deref())?;
    if args.no_motion {
        config.motion = false;
    }

    let catalog = config.catalog().context("Invalid artwork catalog")?;
    let title = format!("{} - {}", config.profile.artist_name, config.profile.tagline);

    tracing::info!(
        artworks = catalog.len(),
        motion = config.motion,
        "Starting '{}'",
        title
    );

    let _ = SESSION.set(Session {
        motion: config.motion(),
        profile: config.profile,
        catalog,
    });

    // Configure desktop window
    let window = WindowBuilder::new()
        .with_title(&title)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
        .with_resizable(true);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);

    Ok(())
}
