//! CLI argument definitions using clap
//!
//! Commands:
//! - inventario serve [--port <port>] [--data-file <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sistema de Gestión de Inventarios - REST API
#[derive(Parser, Debug)]
#[command(name = "inventario")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the inventory HTTP server
    Serve {
        /// Port to listen on (falls back to the PORT environment
        /// variable, then 3000)
        #[arg(long)]
        port: Option<u16>,

        /// Path of the JSON file holding the product collection
        #[arg(long, default_value = "products.json")]
        data_file: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
