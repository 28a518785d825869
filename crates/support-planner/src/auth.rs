//! Bearer-session boundary. Issuing sessions and hashing passwords happen elsewhere;
//! this crate only asks a [`SessionVerifier`] who a presented token belongs to.

use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves a bearer credential to the account it was issued for.
pub trait SessionVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Option<UserId>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("authorization header missing")]
    Missing,
    #[error("authorization header is not a bearer credential")]
    Malformed,
    #[error("session is invalid or expired")]
    Rejected,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let payload = json!({ "error": self.to_string() });
        (StatusCode::UNAUTHORIZED, Json(payload)).into_response()
    }
}

pub fn bearer_token(headers: &HeaderMap) -> Result<Option<&str>, AuthError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };
    let value = value.to_str().map_err(|_| AuthError::Malformed)?;
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::Malformed)?;
    Ok(Some(token))
}

/// Anonymous callers resolve to `None`; a presented but unknown token is rejected.
pub fn optional_user(
    verifier: &dyn SessionVerifier,
    headers: &HeaderMap,
) -> Result<Option<UserId>, AuthError> {
    match bearer_token(headers)? {
        Some(token) => verifier.verify(token).map(Some).ok_or(AuthError::Rejected),
        None => Ok(None),
    }
}

pub fn require_user(
    verifier: &dyn SessionVerifier,
    headers: &HeaderMap,
) -> Result<UserId, AuthError> {
    optional_user(verifier, headers)?.ok_or(AuthError::Missing)
}
