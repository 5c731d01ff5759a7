//! `seekbar` command line entry point.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Interactive seek bar for a simulated media player.
#[derive(Parser)]
#[command(name = "seekbar", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drag or step the seek bar of a simulated player in the terminal
    Play {
        /// Media duration in seconds
        #[arg(short, long, default_value_t = 120.0)]
        duration: f64,

        /// Config file to use instead of the user config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Keep the time tooltip inside the player (overrides the config)
        #[arg(long)]
        keep_tooltips_inside: bool,
    },

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show {
        /// Config file to use instead of the user config
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the user config file location
    Path,
}

fn main() -> Result<()> {
    // Use RUST_LOG if set; stay quiet otherwise so the terminal UI is not disturbed
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            duration,
            config,
            keep_tooltips_inside,
        } => {
            if !duration.is_finite() || duration <= 0.0 {
                anyhow::bail!("Duration must be a positive number of seconds");
            }
            let mut config = commands::load_config(config.as_deref())?;
            if keep_tooltips_inside {
                config = config.with_keep_tooltips_inside(true);
            }
            commands::play::handle_play(duration, &config)
        }
        Commands::Config(ConfigCommands::Show { config }) => {
            commands::config::handle_show(config.as_deref())
        }
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(),
    }
}
