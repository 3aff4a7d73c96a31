//! Request extractors: the authenticated caller and the raw JSON payload.

use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    http::{header::AUTHORIZATION, request::Parts},
    Json,
};
use domains::DomainError;
use serde_json::Value;

use crate::{error::ApiError, state::AppState};

/// The user id carried by a valid `Authorization: Bearer <token>` header.
#[derive(Debug, Clone)]
pub struct AuthUser(pub String);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(DomainError::missing_authentication)?;

        Ok(Self(state.tokens.verify(token)?))
    }
}

/// Request body as untyped JSON; shape checks happen in the domain layer so
/// that the messages stay entity-specific.
#[derive(Debug, Clone)]
pub struct JsonPayload(pub Value);

impl<S: Send + Sync> FromRequest<S> for JsonPayload {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| DomainError::Payload(rejection.body_text()))?;
        Ok(Self(value))
    }
}
