use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

use cli::theme::ThemeFormat;

#[derive(Parser)]
#[command(name = "windscan")]
#[command(about = "Load, validate and scan a utility-class stylesheet config")]
#[command(version)]
struct Cli {
    /// Path to the project root (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to windscan.toml in the project root)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default config into the project root
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,

        /// Write windscan.json instead of windscan.toml
        #[arg(long)]
        json: bool,
    },

    /// Load and validate the config (exit 1 if invalid)
    Check,

    /// Scan content files for utility classes and report colour usage
    Scan {
        /// List every distinct candidate token
        #[arg(long)]
        tokens: bool,
    },

    /// Print the effective colour tokens
    Theme {
        /// Output format
        #[arg(long, value_enum, default_value_t = ThemeFormat::Css)]
        format: ThemeFormat,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Determine the project root
    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Init { force, json } => {
            cli::init::init_command(&work_dir, config_path, force, json).await?;
        }
        Commands::Check => {
            if !cli::check::check_command(&work_dir, config_path).await? {
                std::process::exit(1);
            }
        }
        Commands::Scan { tokens } => {
            cli::scan::scan_command(&work_dir, config_path, tokens).await?;
        }
        Commands::Theme { format } => {
            cli::theme::theme_command(&work_dir, config_path, format).await?;
        }
    }

    Ok(())
}
