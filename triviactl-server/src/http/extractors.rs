//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{parse_payload, NewTrivia, ValidationError};

/// Extract and validate a trivia creation body
///
/// Reads the raw body instead of `Json<T>` so every parse failure maps
/// to the same `Invalid JSON data` response.
pub struct TriviaPayload(pub NewTrivia);

impl<S> FromRequest<S> for TriviaPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .map(|v| v.to_str().unwrap_or_default().to_owned());

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::InvalidPayload))?;

        let new = parse_payload(content_type.as_deref(), &body)?;
        Ok(Self(new))
    }
}

/// Extract an integer record id from path
///
/// A non-integer segment does not name a record route, so it is a 404.
pub struct TriviaId(pub i64);

impl<S> FromRequestParts<S> for TriviaId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::RouteNotFound)?;

        // Plain digits only: no sign, no whitespace
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ApiError::RouteNotFound);
        }

        let id = id.parse::<i64>().map_err(|_| ApiError::RouteNotFound)?;
        Ok(Self(id))
    }
}
