//! CLI definition using clap

use clap::{Parser, Subcommand};
use estaciona_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "estaciona")]
#[command(author = "fmazzoli")]
#[command(version)]
#[command(about = "Request parking time for a registered vehicle by email")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compose a parking-request email and open the mail client
    Park {
        /// Vehicle to park: id, nickname, or plate. Defaults to the last
        /// used vehicle, or the first registered one.
        #[arg(long, short = 'v')]
        vehicle: Option<String>,

        /// Parking duration in minutes
        #[arg(long, short = 'm', default_value = "30")]
        minutes: u32,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,

        /// Print the mailto URL instead of opening the mail client
        #[arg(long)]
        dry_run: bool,
    },

    /// Manage registered vehicles
    Vehicle {
        #[command(subcommand)]
        command: VehicleCommands,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the store directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum VehicleCommands {
    /// Register a new vehicle
    Add {
        /// Display name (e.g., "Auto de Flor")
        nickname: String,

        /// License plate (stored trimmed and uppercased)
        plate: String,
    },

    /// List registered vehicles
    List,

    /// Edit a registered vehicle
    Edit {
        /// Vehicle id
        id: String,

        /// New nickname
        #[arg(long)]
        nickname: Option<String>,

        /// New license plate
        #[arg(long)]
        plate: Option<String>,
    },

    /// Remove a registered vehicle
    Remove {
        /// Vehicle id
        id: String,
    },
}
