//! Error types for the HTTP layer and the data source.

use autotable_query::QueryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, warn};

/// Result type for data source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors raised while materializing the collection.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The backing store could not be read or parsed.
    #[error("automations unavailable from {}: {reason}", path.display())]
    DataUnavailable { path: PathBuf, reason: String },
}

/// Errors returned from request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("unknown column: {0}")]
    UnknownColumn(String),
}

/// JSON body of every error response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorBody {
    pub message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Query(_) => StatusCode::BAD_REQUEST,
            Self::Source(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UnknownColumn(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, "request rejected");
        }
        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
