//! HTTP API for the automations table.
//!
//! The router is a thin shell around the query engine: it decodes the
//! request, asks the [`AutomationSource`] for a snapshot, runs the query
//! and serializes the page.

mod error;
pub mod request;
pub mod source;

use std::sync::Arc;

use autotable_query::{PageResult, sample_values};
use autotable_types::Column;
use axum::{
    Router,
    extract::{Path, Query, State},
    response::Json,
    routing::get,
};
use tower_http::cors::CorsLayer;

pub use error::{ApiError, ErrorBody, SourceError, SourceResult};
pub use request::{AutomationsParams, SampleParams};
pub use source::{AutomationSource, InMemorySource, JsonFileSource};

pub const HEALTH_MESSAGE: &str = "Hello! I am healthy!";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn AutomationSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn AutomationSource>) -> Self {
        Self { source }
    }
}

async fn health_handler() -> &'static str {
    HEALTH_MESSAGE
}

async fn automations_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<PageResult>, ApiError> {
    let query = pairs.into_iter().collect::<AutomationsParams>().into_query()?;
    let records = state.source.load().await?;
    Ok(Json(query.run(&records)))
}

async fn samples_handler(
    State(state): State<AppState>,
    Path(column): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let column: Column = column.parse().map_err(|_| ApiError::UnknownColumn(column))?;
    let limit = pairs.into_iter().collect::<SampleParams>().limit()?;
    let records = state.source.load().await?;
    Ok(Json(sample_values(&records, column, limit)))
}

/// Build the HTTP API router over the given data source.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/automations", get(automations_handler))
        .route("/automations/columns/{column}/samples", get(samples_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
