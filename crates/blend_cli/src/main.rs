//! Blend CLI
//!
//! Inspect the design system from the command line:
//!
//! ```bash
//! # Resolved tag tokens for the dark theme on a phone-sized viewport
//! blend tokens tag --theme dark --width 375
//!
//! # How many attachment chips fit in a 400px row
//! blend cutoff --container 400 --widths 80,90,70,60,50
//!
//! # Cost of a month of usage
//! blend pricing --usage usage.json --days 30
//! ```

use anyhow::Result;
use blend_cli::commands::{self, BreakpointSource, Component, MetricOverrides};
use blend_cli::config::{BlendConfig, DEFAULT_CONFIG_FILE};
use blend_monitor::UsageSnapshot;
use blend_theme::Breakpoint;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "blend")]
#[command(about = "Blend design system tools")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults apply if it does not exist)
    #[arg(long, short, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a component's resolved token table as JSON
    Tokens {
        #[arg(value_enum)]
        component: Component,

        /// Theme name (light or dark)
        #[arg(long)]
        theme: Option<String>,

        /// Breakpoint (sm or lg)
        #[arg(long, conflicts_with = "width")]
        breakpoint: Option<Breakpoint>,

        /// Viewport width to derive the breakpoint from
        #[arg(long)]
        width: Option<f32>,
    },

    /// Compute how many attachment chips fit in a row
    Cutoff {
        /// Container width in pixels
        #[arg(long)]
        container: f32,

        /// Chip widths, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        widths: Vec<f32>,

        /// Gap between chips
        #[arg(long)]
        gap: Option<f32>,

        /// Space kept free at the end of the row
        #[arg(long)]
        buffer: Option<f32>,

        /// Width reserved for the "+N more" trigger
        #[arg(long)]
        more: Option<f32>,
    },

    /// Estimate costs for a usage snapshot
    Pricing {
        /// Usage snapshot JSON (all zero if omitted)
        #[arg(long)]
        usage: Option<PathBuf>,

        /// Days covered by the snapshot
        #[arg(long, default_value = "30")]
        days: u32,
    },
}

fn init_logging(verbose: bool, configured: Option<&str>) {
    let fallback = if verbose {
        "debug"
    } else {
        configured.unwrap_or("info")
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = BlendConfig::load(&cli.config)?;

    init_logging(cli.verbose, config.logging.level.as_deref());
    tracing::debug!("using configuration from {}", cli.config.display());

    let output = match cli.command {
        Commands::Tokens {
            component,
            theme,
            breakpoint,
            width,
        } => {
            let source = match (breakpoint, width) {
                (Some(bp), _) => BreakpointSource::Explicit(bp),
                (None, Some(width)) => BreakpointSource::Width(width),
                (None, None) => BreakpointSource::Default,
            };
            commands::tokens(&config, component, theme.as_deref(), source)?
        }
        Commands::Cutoff {
            container,
            widths,
            gap,
            buffer,
            more,
        } => {
            let overrides = MetricOverrides {
                gap,
                buffer,
                more_trigger_width: more,
            };
            commands::cutoff(&config, container, &widths, overrides)
        }
        Commands::Pricing { usage, days } => {
            let snapshot = match usage {
                Some(path) => commands::load_usage(&path)?,
                None => UsageSnapshot::default(),
            };
            commands::pricing(&config, &snapshot, days)
        }
    };

    println!("{}", output.trim_end());
    Ok(())
}
