//! Typed API error for HTTP handlers.
//!
//! Converts catalog errors into HTTP responses with a JSON body and status code.
//! Handlers return `Result<Json<T>, ApiError>` so the client always gets a
//! readable reason instead of a bare `StatusCode`.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use product_catalog_core::CatalogError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` logs the real error server-side and returns a static message
/// to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — query string could not be decoded at all, including a
    /// repeated parameter (`?q=a&q=b`, or `minPrice` alongside `min_price`).
    BadRequest(String),
    /// 404 Not Found — requested product doesn't exist.
    NotFound(String),
    /// 422 Unprocessable Entity — parameter present but malformed or out of range.
    UnprocessableEntity(String),
    /// 500 Internal Server Error — unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(_) => Self::NotFound(err.to_string()),
            CatalogError::InvalidQuery(msg) => Self::UnprocessableEntity(msg),
            _ => Self::Internal(err.into()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::from(CatalogError::NotFound(42)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_query_maps_to_422() {
        let err =
            ApiError::from(CatalogError::InvalidQuery("limit must be greater than 0".to_owned()));
        assert!(matches!(err, ApiError::UnprocessableEntity(ref m) if m.contains("limit")));
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_catalog_io_error_is_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "catalog.json");
        let response = ApiError::from(CatalogError::Io(io)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
