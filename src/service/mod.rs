//! Data service
//!
//! A single read-only endpoint, `GET /dados`, returning every row of the
//! dataset file as a JSON object keyed by column name. Failures map to
//! 404 (missing or empty), 400 (malformed) or 500 with a `detail` body.

mod config;
mod errors;
mod routes;
mod server;

pub use config::{ConfigError, ServiceConfig};
pub use errors::{ErrorResponse, ServiceError, ServiceResult};
pub use routes::{data_routes, health_routes, DadosResponse, DataState, HealthResponse};
pub use server::DataService;
