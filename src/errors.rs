use actix_web::{HttpResponse, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced by the record stores and the salary grid. The JSON
/// bodies mirror what the clients already handle: `{"error": "Not found"}`
/// on a missing id, `{"error": "Server error"}` when persistence fails.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no record with id {id} in {collection}")]
    NotFound { collection: String, id: u64 },

    #[error("failed to persist {key}: {source}")]
    Persistence {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("stored document under {key} is malformed: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl actix_web::ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            StoreError::Persistence { .. } | StoreError::Corrupt { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            StoreError::NotFound { .. } => HttpResponse::NotFound().json(json!({
                "error": "Not found"
            })),
            StoreError::Persistence { .. } | StoreError::Corrupt { .. } => {
                tracing::error!(error = %self, "store operation failed");
                HttpResponse::InternalServerError().json(json!({
                    "error": "Server error"
                }))
            }
        }
    }
}
