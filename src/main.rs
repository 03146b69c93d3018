#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use mangafolio_core::{PreferenceStore, Storage, HACKER_MODE_KEY};
use tracing_subscriber::EnvFilter;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Optional catalog file, set from command line
static CATALOG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// File name of the preferences database inside the data directory
pub const PREFERENCES_FILE: &str = "preferences.redb";

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Catalog file given on the command line, if any
pub fn get_catalog_path() -> Option<PathBuf> {
    CATALOG_PATH.get().cloned()
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mangafolio")
}

/// Mangafolio - manga-themed portfolio
#[derive(Parser, Debug)]
#[command(name = "mangafolio-desktop")]
#[command(about = "Mangafolio - a manga-themed developer portfolio")]
struct Args {
    /// Data directory for the preferences database
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// JSON file with project records to show instead of the built-in ones
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Log filter directive, e.g. "mangafolio=debug" (overrides RUST_LOG)
    #[arg(long)]
    log_filter: Option<String>,

    /// Start in normal mode, clearing a persisted hacker mode
    #[arg(long)]
    reset_mode: bool,
}

fn main() {
    let args = Args::parse();

    let filter = match &args.log_filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let _ = DATA_DIR.set(data_dir.clone());
    if let Some(path) = args.catalog {
        let _ = CATALOG_PATH.set(path);
    }

    if args.reset_mode {
        reset_hacker_mode(&data_dir);
    }

    tracing::info!(?data_dir, catalog = ?get_catalog_path(), "Starting Mangafolio");

    // Configure desktop window
    let config = Config::new()
        .with_background_color(theme::WINDOW_BACKGROUND)
        .with_window(
            WindowBuilder::new()
                .with_title("Mangafolio")
                .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

fn reset_hacker_mode(data_dir: &std::path::Path) {
    let result = Storage::new(data_dir.join(PREFERENCES_FILE))
        .and_then(|storage| storage.set(HACKER_MODE_KEY, "false"));
    match result {
        Ok(()) => tracing::info!("Hacker mode reset"),
        Err(e) => tracing::warn!(error = %e, "Failed to reset hacker mode"),
    }
}
