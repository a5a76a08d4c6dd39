//! Arrow tooltip demo
//!
//! Usage:
//!   tooltip-demo                       # all nine sides
//!   tooltip-demo --side leading-top    # one anchor
//!   tooltip-demo --animate --no-arrow
//!   tooltip-demo --config my.json      # load a saved TooltipConfig

use std::path::PathBuf;

use arrow_tooltip::config::default_path;
use arrow_tooltip::iced_app::{run_demo, DemoOptions};
use arrow_tooltip::{TooltipConfig, TooltipSide};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tooltip-demo")]
#[command(about = "Show arrow tooltips around anchors")]
struct Cli {
    /// Show a single anchor with its tooltip on this side
    #[arg(short, long, value_enum)]
    side: Option<TooltipSide>,

    /// Enable the nudge animation
    #[arg(short, long)]
    animate: bool,

    /// Hide the arrow
    #[arg(long)]
    no_arrow: bool,

    /// Start with tooltips hidden
    #[arg(long)]
    hidden: bool,

    /// Tooltip config JSON (defaults to the user config file when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Explicit `--config` must load; the default file is optional.
fn load_config(path: Option<PathBuf>) -> arrow_tooltip::Result<TooltipConfig> {
    if let Some(path) = path {
        return TooltipConfig::load(&path);
    }
    let path = default_path();
    if !path.exists() {
        return Ok(TooltipConfig::default());
    }
    match TooltipConfig::load(&path) {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::warn!("Ignoring {}: {}", path.display(), e);
            Ok(TooltipConfig::default())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = load_config(cli.config)?;
    if cli.animate {
        config.enable_animation = true;
    }
    if cli.no_arrow {
        config.show_arrow = false;
    }

    run_demo(DemoOptions {
        config: Some(config),
        side: cli.side,
        start_hidden: cli.hidden,
    })
}
