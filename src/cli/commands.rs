//! CLI command implementations.
//!
//! `serve` is the only command: it builds the file store, assembles the
//! HTTP server and blocks on it inside a tokio runtime.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::http::{HttpServer, ServerConfig};
use crate::store::FileStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Default port when neither --port nor PORT is given.
const DEFAULT_PORT: u16 = 3000;

/// Parse arguments and dispatch the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging();

    match cli.command {
        Command::Serve { port, data_file } => serve(port, data_file),
    }
}

fn init_logging() {
    // RUST_LOG wins; default to info.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Resolve the port to listen on: flag, then PORT environment variable,
/// then the default.
fn resolve_port(flag: Option<u16>) -> CliResult<u16> {
    if let Some(port) = flag {
        return Ok(port);
    }

    match env::var("PORT") {
        Ok(raw) => raw.parse().map_err(|_| CliError::InvalidPort(raw)),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

fn serve(port: Option<u16>, data_file: PathBuf) -> CliResult<()> {
    let port = resolve_port(port)?;
    let store = FileStore::new(data_file);

    tracing::info!("product file: {}", store.path().display());

    let server = HttpServer::with_config(Arc::new(store), ServerConfig::with_port(port));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    runtime.block_on(server.start()).map_err(CliError::Server)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_flag_wins() {
        assert_eq!(resolve_port(Some(8080)).unwrap(), 8080);
    }

    #[test]
    fn test_invalid_port_message_names_the_value() {
        let error = CliError::InvalidPort("abc".to_string());
        assert!(error.to_string().contains("'abc'"));
    }
}
