//! HTTP API Server
//!
//! Builds the axum application and runs it until shutdown.

use std::any::Any;

use axum::{
    Router,
    http::HeaderValue,
    response::{IntoResponse, Response},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use addrbook_core::{AddressBookService, Config, UserAddressBookService};

use crate::error::ApiError;
use crate::handlers::fallback;
use crate::routes::routes;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Single-tenant registry
    pub books: AddressBookService,
    /// Multi-tenant registry
    pub users: UserAddressBookService,
}

impl AppState {
    /// Fresh, empty registries
    pub fn new(config: Config) -> Self {
        Self {
            config,
            books: AddressBookService::new(),
            users: UserAddressBookService::new(),
        }
    }
}

/// Build the full application: routes, fallback and middleware
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.allowed_origins);

    Router::new()
        .merge(routes())
        .fallback(fallback)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(cors::Any)
        .allow_headers(cors::Any)
}

/// Convert a handler panic into a 500 envelope
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}

/// Start the HTTP API server and serve until Ctrl+C
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    let addr = config.server.socket_addr()?;
    let app = app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
