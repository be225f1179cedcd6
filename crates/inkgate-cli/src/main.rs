mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    artist::ArtistSubcommand, booking::BookingSubcommand, config::ConfigSubcommand,
    gate::GateSubcommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "inkgate",
    about = "Booking eligibility gate and request tracker for tattoo studios",
    version,
    propagate_version = true
)]
struct Cli {
    /// Studio root (default: auto-detect from .inkgate/ or .git/)
    #[arg(long, global = true, env = "INKGATE_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize inkgate in the current directory
    Init {
        /// Studio name (default: directory name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Run or inspect the eligibility gate
    Gate {
        #[command(subcommand)]
        subcommand: GateSubcommand,
    },

    /// Manage artists and their capability flags
    Artist {
        #[command(subcommand)]
        subcommand: ArtistSubcommand,
    },

    /// Manage booking requests
    Booking {
        #[command(subcommand)]
        subcommand: BookingSubcommand,
    },

    /// Inspect and validate the studio configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Start the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "4650")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init { name } => cmd::init::run(&root, name.as_deref()),
        Commands::Gate { subcommand } => cmd::gate::run(&root, subcommand, cli.json),
        Commands::Artist { subcommand } => cmd::artist::run(&root, subcommand, cli.json),
        Commands::Booking { subcommand } => cmd::booking::run(&root, subcommand, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
        Commands::Serve { port } => cmd::serve::run(&root, port),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
