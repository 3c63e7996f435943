//! # CLI
//!
//! Argument parsing and process bootstrap for the inventory server.

pub mod args;
pub mod commands;
pub mod errors;

pub use commands::run;
pub use errors::{CliError, CliResult};
