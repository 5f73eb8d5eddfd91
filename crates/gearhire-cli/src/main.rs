//! GearHire CLI
//!
//! Thin wrapper around gearhire-core for checking popover behaviour without
//! opening the desktop site.
//!
//! ## Usage
//!
//! ```bash
//! # Where does a product-grid menu land for a trigger near the bottom?
//! gearhire place --rect 750,1160,1200,780 --region product-grid
//!
//! # Build a messaging link
//! gearhire link "+52 55 1234 5678" --text "Is the tent available?"
//!
//! # Replay an interaction script
//! gearhire simulate session.txt --viewport 1280x800
//!
//! # Site config
//! gearhire config init ./site.json
//! gearhire config check ./site.json
//! gearhire config show --config ./site.json
//!
//! # Summarize interaction logs written by the desktop app
//! gearhire logs ~/.local/share/gearhire/logs
//! ```

mod script;
mod simulate;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gearhire_core::geometry;
use gearhire_core::logging::{read_entries, InteractionStats, LoggingBuilder};
use gearhire_core::{MessagingLink, Region, SiteConfig, Size};

use crate::script::{parse_rect, parse_script, parse_size};

/// GearHire - popover placement and contact link tooling
#[derive(Parser)]
#[command(name = "gearhire")]
#[command(version = "0.1.0")]
#[command(about = "GearHire - popover placement and contact link tooling")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Also write a JSONL session log into this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve where a popover would be placed
    Place {
        /// Trigger rect as top,left,right,bottom
        #[arg(long, allow_hyphen_values = true)]
        rect: Option<String>,

        /// Viewport as WIDTHxHEIGHT
        #[arg(long, default_value = "1280x800")]
        viewport: String,

        /// Popover as WIDTHxHEIGHT (overrides the region default)
        #[arg(long)]
        popover: Option<String>,

        /// Region whose default popover size to use
        #[arg(long, default_value = "product-grid")]
        region: Region,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Build a messaging deep link
    Link {
        /// Phone number in any format
        phone: String,

        /// Pre-filled message
        #[arg(short, long)]
        text: Option<String>,
    },

    /// Replay an interaction script against a headless viewport
    Simulate {
        /// Script file, one step per line
        script: PathBuf,

        #[arg(long, default_value = "product-grid")]
        region: Region,

        #[arg(long, default_value = "1280x800")]
        viewport: String,

        /// Site config supplying the region's menu
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// Site configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Summarize JSONL interaction logs
    Logs {
        /// Directory containing *.jsonl session files
        dir: PathBuf,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config as JSON
    Show {
        /// Config file (default: <config dir>/gearhire/site.json)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate a config file
    Check { path: PathBuf },
    /// Write the built-in config to a file
    Init {
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Default site config location (<config dir>/gearhire/site.json)
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gearhire")
        .join("site.json")
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading site config");
            SiteConfig::load(path).with_context(|| format!("loading {}", path.display()))
        }
        None => {
            let path = default_config_path();
            tracing::debug!(path = %path.display(), exists = path.exists(), "Loading default site config");
            Ok(SiteConfig::load_or_default(path)?)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingBuilder::new("cli")
        .with_verbosity(cli.verbose)
        .with_logs_dir(cli.log_dir.clone())
        .init()
        .context("initializing logging")?;

    match cli.command {
        Commands::Place {
            rect,
            viewport,
            popover,
            region,
            json,
        } => {
            let viewport = parse_size(&viewport)?;
            let popover = match popover {
                Some(p) => parse_size(&p)?,
                None => region.default_popover_size(),
            };
            let rect = rect.as_deref().map(parse_rect).transpose()?;
            let placement = geometry::resolve_or_center(rect, popover, viewport);

            if json {
                println!("{}", serde_json::to_string_pretty(&placement)?);
            } else {
                println!("Viewport: {}", viewport);
                println!("Popover:  {}", popover);
                match rect {
                    Some(r) => println!(
                        "Trigger:  top={} left={} right={} bottom={}",
                        r.top, r.left, r.right, r.bottom
                    ),
                    None => println!("Trigger:  (none, centered fallback)"),
                }
                println!();
                println!("  top:   {}", placement.top);
                println!("  left:  {}", placement.left);
                println!(
                    "  side:  {}",
                    if placement.place_above { "above" } else { "below" }
                );
            }
        }

        Commands::Link { phone, text } => {
            let mut link = MessagingLink::new(phone);
            if let Some(text) = text {
                link = link.text(text);
            }
            println!("{}", link.to_url()?);
        }

        Commands::Simulate {
            script,
            region,
            viewport,
            config,
            json,
        } => {
            let viewport: Size = parse_size(&viewport)?;
            let settings = match config {
                Some(path) => load_config(Some(&path))?.region(region),
                None => SiteConfig::default().region(region),
            };
            let source = std::fs::read_to_string(&script)
                .with_context(|| format!("reading {}", script.display()))?;
            let steps = parse_script(&source)?;
            let reports = simulate::run(region, viewport, settings, &steps)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                println!("Region: {}  Viewport: {}", region, viewport);
                println!();
                for report in &reports {
                    println!("{}", report.render());
                }
            }

            if let Some(last) = reports.last() {
                if last.open.is_none() && last.listeners != 0 {
                    bail!("{} listeners left attached after close", last.listeners);
                }
            }
        }

        Commands::Config { action } => match action {
            ConfigAction::Show { config } => {
                let config = load_config(config.as_deref())?;
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigAction::Check { path } => {
                let config = load_config(Some(&path))?;
                println!("Config OK: {}", path.display());
                println!("  Business: {}", config.business_name);
                for region in Region::ALL {
                    let settings = config.region(region);
                    let labels: Vec<&str> = settings.actions.iter().map(|a| a.label.as_str()).collect();
                    println!("  {:<16} {:<10} {}", region, settings.popover.to_string(), labels.join(" | "));
                }
            }
            ConfigAction::Init { path, force } => {
                if path.exists() && !force {
                    bail!("{} already exists (use --force to overwrite)", path.display());
                }
                SiteConfig::default().save(&path)?;
                println!("Wrote default config to {}", path.display());
            }
        },

        Commands::Logs { dir, json } => {
            let entries = read_entries(&dir).with_context(|| format!("reading logs in {}", dir.display()))?;
            let stats = InteractionStats::from_entries(&entries);
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", stats.render());
            }
        }
    }

    Ok(())
}
