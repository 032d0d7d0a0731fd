use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "registrar")]
#[command(
    author,
    version,
    about = "Seed a student registration database and print its contents"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database file (overrides the config file)
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Use a throwaway in-memory database
    #[arg(long, global = true, conflicts_with = "database")]
    pub in_memory: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recreate the tables, insert the sample rows and print them (default)
    Run {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the current table contents without reseeding
    Report {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check row counts and foreign-key references against the sample data
    Verify,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        #[arg(value_name = "CONFIG")]
        file: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
