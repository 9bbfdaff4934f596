//! HTTP mapping of song store errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::song_store::SongStoreError;

impl IntoResponse for SongStoreError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            SongStoreError::NotFound(_) => (StatusCode::NOT_FOUND, "Song not found".to_string()),
            // Duplicate song numbers are reported as a bad request.
            SongStoreError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            SongStoreError::Storage(e) => {
                error!("Song store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}
