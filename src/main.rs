#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::Context;
use barantrum_core::logging::LoggingBuilder;
use barantrum_core::{ArchiveConfig, LoreStore, ViewState};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Archive content, loaded once before launch
static LORE: OnceLock<Arc<LoreStore>> = OnceLock::new();

/// Runtime settings, set from command line
static CONFIG: OnceLock<ArchiveConfig> = OnceLock::new();

/// Get the lore store (the embedded asset if nothing was loaded)
pub fn get_lore() -> Arc<LoreStore> {
    LORE.get().cloned().unwrap_or_else(|| {
        Arc::new(LoreStore::builtin().unwrap_or_else(|e| {
            tracing::error!("Embedded lore asset is invalid: {}", e);
            LoreStore::default()
        }))
    })
}

/// Get the runtime configuration (defaults if unset)
pub fn get_config() -> ArchiveConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Barantrum City Archive
#[derive(Parser, Debug)]
#[command(name = "barantrum-desktop")]
#[command(about = "Barantrum City Archive - lore browser")]
struct Args {
    /// Lore file to browse instead of the built-in archive
    #[arg(short, long)]
    lore: Option<PathBuf>,

    /// View to open after the loading screen
    #[arg(short, long, default_value_t = ViewState::Intro)]
    view: ViewState,

    /// Skip the loading screen
    #[arg(long)]
    skip_splash: bool,

    /// Milliseconds between intro characters
    #[arg(long, default_value_t = 15)]
    typing_interval_ms: u64,

    /// Loading screen duration in milliseconds
    #[arg(long, default_value_t = 2500)]
    splash_ms: u64,

    /// Log filter (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

impl Args {
    fn into_config(self) -> ArchiveConfig {
        ArchiveConfig {
            lore_path: self.lore,
            initial_view: self.view,
            skip_splash: self.skip_splash,
            typing_interval_ms: self.typing_interval_ms,
            splash_ms: self.splash_ms,
            ..ArchiveConfig::default()
        }
    }
}

fn load_lore(config: &ArchiveConfig) -> anyhow::Result<LoreStore> {
    match &config.lore_path {
        Some(path) => LoreStore::from_path(path)
            .with_context(|| format!("failed to load lore from {}", path.display())),
        None => LoreStore::builtin().context("embedded lore asset is invalid"),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new().with_target(true);
    if let Some(filter) = &args.log {
        logging = logging.with_filter(filter.clone());
    }
    logging.init();

    let config = args.into_config();

    let lore = load_lore(&config).inspect_err(|e| {
        tracing::error!("Failed to load lore: {:#}", e);
    })?;

    tracing::info!(
        districts = lore.districts.len(),
        associations = lore.associations.len(),
        characters = lore.characters.len(),
        terms = lore.terms.len(),
        view = %config.initial_view,
        "Starting Barantrum City Archive"
    );

    let _ = LORE.set(Arc::new(lore));
    let _ = CONFIG.set(config.clone());

    let desktop = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Barantrum City Archive")
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                config.window_width,
                config.window_height,
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .launch(app::App);

    Ok(())
}
