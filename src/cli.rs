use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::entities::DeviceStatus;

/// devmon - single-user inventory tool for network devices
#[derive(Parser, Debug)]
#[command(name = "devmon")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'devmon' without arguments for the interactive menu.")]
pub struct Cli {
    /// Path to a devmon.toml configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a device to the inventory
    Add {
        /// Device ID (unique, case-insensitive)
        #[arg(long)]
        id: String,

        /// Device name
        #[arg(long)]
        name: String,

        /// IPv4 address
        #[arg(long)]
        ip: String,

        /// Initial status (defaults to offline)
        #[arg(long, value_enum)]
        status: Option<DeviceStatus>,
    },

    /// Update a device's operational status
    Status {
        /// Device ID
        id: String,

        /// New status
        #[arg(value_enum)]
        status: DeviceStatus,
    },

    /// Search by ID (exact) or name (substring)
    Search {
        /// Query string
        query: String,
    },

    /// Sort the inventory by 'name' or 'status' and persist the order
    Sort {
        /// Sort criterion
        criterion: String,
    },

    /// Remove a device by ID
    Remove {
        /// Device ID
        id: String,
    },

    /// Print the full inventory
    List,

    /// Print per-status totals
    Report,
}
