#![allow(non_snake_case)]

mod app;
mod catalog;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use gearhire_core::logging::LoggingBuilder;
use gearhire_core::SiteConfig;

/// Site config loaded at startup
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site config (loaded from --config or defaults)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gearhire")
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gearhire")
        .join("site.json")
}

/// GearHire - event equipment rental catalog
#[derive(Parser, Debug)]
#[command(name = "gearhire-desktop")]
#[command(about = "GearHire - event equipment rental catalog")]
struct Args {
    /// Site config file (default: <config dir>/gearhire/site.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Data directory (session logs go to <data dir>/logs)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log directory, overriding <data dir>/logs
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Increase console verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let log_dir = args.log_dir.unwrap_or_else(|| data_dir.join("logs"));

    let session_log = LoggingBuilder::new("desktop")
        .with_verbosity(args.verbose)
        .with_logs_dir(Some(log_dir))
        .init()
        .context("initializing logging")?;

    let config = match args.config {
        Some(path) => SiteConfig::load(&path).with_context(|| format!("loading {}", path.display()))?,
        None => SiteConfig::load_or_default(default_config_path())?,
    };
    let title = config.business_name.clone();
    let _ = SITE_CONFIG.set(config);

    tracing::info!(
        data_dir = %data_dir.display(),
        session_log = ?session_log,
        "Starting {}",
        title
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
