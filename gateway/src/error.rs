//! API error mapping. Upstream feed loss is never surfaced as an error;
//! handlers degrade those payloads instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InvalidInput(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InvalidInput(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<neo_catalog::CatalogError> for ApiError {
    fn from(err: neo_catalog::CatalogError) -> Self {
        match err {
            neo_catalog::CatalogError::NotFound(id) => {
                ApiError::NotFound(format!("asteroid {id} not found"))
            }
            other => ApiError::InvalidInput(other.to_string()),
        }
    }
}
