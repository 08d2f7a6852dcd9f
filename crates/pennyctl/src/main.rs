//! Penny Control - CLI for inspecting Penny progression
//!
//! Loads a usage snapshot and prints the derived XP, level, phase and
//! milestone state.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use penny_progress::ProgressError;
use pennyctl::commands::{self, Output};
use pennyctl::config::PennyConfig;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// Version is embedded at build time
const VERSION: &str = env!("PENNY_VERSION");

#[derive(Parser)]
#[command(name = "pennyctl")]
#[command(about = "Penny - progression engine inspector", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (defaults to ~/.config/penny/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show progress for a usage snapshot
    Status {
        /// Snapshot JSON file ("-" reads stdin)
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },

    /// Show details for one level
    Level {
        level: u32,
    },

    /// Show the level table
    Levels {
        /// Last level to show (capped at 1000)
        #[arg(long, default_value_t = 25)]
        up_to: u32,
    },

    /// List the milestone catalog
    Milestones {
        /// Validate the catalog and fail on problems
        #[arg(long)]
        check: bool,
    },

    /// Print a celebration message for a milestone
    Celebrate {
        milestone: String,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        let code = err
            .downcast_ref::<ProgressError>()
            .map(|e| e.exit_code())
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = PennyConfig::load(cli.config.as_deref())?;
    debug!(?config, "configuration loaded");
    let output = Output::from_config(&config, cli.json);

    let rendered = match cli.command {
        Commands::Status { snapshot } => {
            let path = commands::resolve_snapshot_path(snapshot, &config)?;
            let snapshot = commands::read_snapshot(&path)?;
            commands::status(&snapshot, &output)?
        }
        Commands::Level { level } => commands::level(level, &output)?,
        Commands::Levels { up_to } => commands::levels(up_to, &output)?,
        Commands::Milestones { check } => commands::milestones(check, &output)?,
        Commands::Celebrate { milestone } => commands::celebrate(&milestone)?,
    };

    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
