//! Data service routes
//!
//! `GET /dados` re-reads the dataset file on every request, so edits to the
//! file are visible on the next call without a restart.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use uuid::Uuid;

use crate::dataset::{DatasetLoader, Table};
use crate::observability::{log_event_with_fields, Event};

use super::errors::{ServiceError, ServiceResult};

/// State shared by the data routes
pub struct DataState {
    loader: DatasetLoader,
}

impl DataState {
    pub fn new(loader: DatasetLoader) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &DatasetLoader {
        &self.loader
    }
}

/// Successful `/dados` body: `{"dados": [row, ...]}`, each row keyed in
/// column order
#[derive(Debug)]
pub struct DadosResponse {
    table: Table,
}

impl DadosResponse {
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
}

struct Rows<'a>(&'a Table);

impl Serialize for Rows<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.rows())
    }
}

impl Serialize for DadosResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("dados", &Rows(&self.table))?;
        map.end()
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create data routes
pub fn data_routes(state: Arc<DataState>) -> Router {
    Router::new()
        .route("/dados", get(dados_handler))
        .with_state(state)
}

/// Health check route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn dados_handler(State(state): State<Arc<DataState>>) -> ServiceResult<Json<DadosResponse>> {
    let request_id = Uuid::new_v4().to_string();
    log_event_with_fields(
        Event::RequestReceived,
        &[("request_id", &request_id), ("route", "/dados")],
    );

    let result = read_table(state).await;

    match &result {
        Ok(table) => log_event_with_fields(
            Event::RequestServed,
            &[
                ("request_id", &request_id),
                ("rows", &table.row_count().to_string()),
                ("status", "200"),
            ],
        ),
        Err(e) => log_event_with_fields(
            Event::RequestFailed,
            &[
                ("request_id", &request_id),
                ("status", e.status_code().as_str()),
                ("reason", &e.to_string()),
            ],
        ),
    }

    result.map(|table| Json(DadosResponse::new(table)))
}

async fn read_table(state: Arc<DataState>) -> ServiceResult<Table> {
    tokio::task::spawn_blocking(move || state.loader().load_table())
        .await
        .map_err(|e| ServiceError::Internal(e.to_string()))?
        .map_err(ServiceError::from)
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("ok"));
    }

    #[test]
    fn test_dados_keeps_column_order() {
        let table = Table::from_raw(
            vec!["school".into(), "G3".into(), "age".into()],
            vec![vec!["GP".into(), "11".into(), "17".into()]],
        );
        let json = serde_json::to_string(&DadosResponse::new(table)).unwrap();
        assert_eq!(json, r#"{"dados":[{"school":"GP","G3":11,"age":17}]}"#);
    }
}
