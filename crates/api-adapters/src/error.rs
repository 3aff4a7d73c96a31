//! Maps `DomainError` onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domains::DomainError;
use tracing::error;

use crate::response::ApiResponse;

const SERVER_FAILURE: &str = "terjadi kegagalan pada server kami";

/// Wrapper that lets handlers use `?` on service results.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            DomainError::Payload(_) => StatusCode::BAD_REQUEST,
            DomainError::Authentication(_) => StatusCode::UNAUTHORIZED,
            DomainError::Authorization(_) => StatusCode::FORBIDDEN,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self.0 {
            DomainError::Internal(detail) => {
                error!(%detail, "request failed on the server side");
                ApiResponse::error(SERVER_FAILURE)
            }
            other => ApiResponse::fail(other.to_string()),
        };
        (status, Json(body)).into_response()
    }
}
