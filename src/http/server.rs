//! # HTTP Server
//!
//! Assembles the product routes, the API description route, the
//! enveloped 404 fallback and the middleware stack into the served
//! application.

use std::io;
use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::config::ServerConfig;
use super::response::ErrorResponse;
use super::routes::{api_info, not_found, product_routes, SharedStore};

/// HTTP server for the inventory API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(store: SharedStore) -> Self {
        Self::with_config(store, ServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(store: SharedStore, config: ServerConfig) -> Self {
        let router = Self::build_router(store);
        Self { config, router }
    }

    /// Build the router with all endpoints and middleware
    fn build_router(store: SharedStore) -> Router {
        // Permissive CORS: the browser UI is served separately during
        // development.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .merge(product_routes(store))
            .route("/api", get(api_info))
            .fallback(not_found)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(handle_panic))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        tracing::info!("inventory API listening on http://{}", addr);
        tracing::info!("product endpoints under /products, description at /api");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Shape a handler panic into the uniform envelope. A panic in one
/// request must not affect subsequent requests.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "panic".to_string()
    };

    tracing::error!("request handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Error interno del servidor", Some(detail))),
    )
        .into_response()
}
