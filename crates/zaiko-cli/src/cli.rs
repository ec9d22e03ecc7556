//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use zaiko_types::OutputFormat;

#[derive(Parser)]
#[command(name = "zaiko-manager")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Car dealership inventory manager")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Inventory file override. Uses config value if not specified.
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a car to the inventory
    Add {
        /// Manufacturer (e.g. "Toyota")
        make: String,

        /// Model name
        model: String,

        /// Manufacturing year
        year: String,

        /// Asking price
        price: String,
    },

    /// Remove every car matching the given model(s), case-insensitive
    Remove {
        /// One or more model names
        #[arg(required = true)]
        models: Vec<String>,
    },

    /// Toggle sale status on every car matching the given model(s)
    Toggle {
        /// One or more model names
        #[arg(required = true)]
        models: Vec<String>,
    },

    /// Search the inventory
    Search {
        /// Filter by make (case-insensitive exact match)
        #[arg(long)]
        make: Option<String>,

        /// Minimum price
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum price
        #[arg(long)]
        max_price: Option<f64>,

        /// Minimum year
        #[arg(long)]
        min_year: Option<i32>,
    },

    /// List the full inventory
    List,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default inventory file
        #[arg(long)]
        set_file: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
