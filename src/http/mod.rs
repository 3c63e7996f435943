//! # HTTP API
//!
//! REST surface over the product store: request validation, status
//! mapping, and the uniform `{success, ...}` response envelope.

pub mod config;
pub mod errors;
pub mod response;
pub mod routes;
pub mod server;
pub mod validate;

pub use config::ServerConfig;
pub use errors::ApiError;
pub use server::HttpServer;
