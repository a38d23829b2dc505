//! # Data Service
//!
//! HTTP server exposing the dataset file as JSON.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{log_event_with_fields, Event};

use super::config::ServiceConfig;
use super::routes::{data_routes, health_routes, DataState};

/// HTTP server for the student performance dataset
pub struct DataService {
    config: ServiceConfig,
    router: Router,
}

impl DataService {
    /// Create a new service with default configuration
    pub fn new() -> Self {
        Self::with_config(ServiceConfig::default())
    }

    /// Create a new service with custom configuration
    pub fn with_config(config: ServiceConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    fn build_router(config: &ServiceConfig) -> Router {
        let state = Arc::new(DataState::new(config.loader()));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(data_routes(state))
            .layer(cors)
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;

        log_event_with_fields(
            Event::ServiceListening,
            &[
                ("addr", &addr.to_string()),
                ("dataset_path", &self.config.dataset_path.display().to_string()),
            ],
        );

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for DataService {
    fn default() -> Self {
        Self::new()
    }
}
