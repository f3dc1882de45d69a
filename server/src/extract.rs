//! `Query` / `Json` / `Path` wrappers whose rejections are [`ValidationError`]s.

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use govgate_abi::U256;
use serde::de::DeserializeOwned;

use crate::error::ValidationError;

pub struct ValidQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(v)| Self(v))
            .map_err(|e| ValidationError::new(e.body_text()))
    }
}

pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(v)| Self(v))
            .map_err(|e| ValidationError::new(e.body_text()))
    }
}

/// A `{proposalId}` path segment: base-10 digits fitting in uint256.
pub struct ProposalIdPath(pub U256);

#[async_trait]
impl<S> FromRequestParts<S> for ProposalIdPath
where
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ValidationError::new(e.body_text()))?;
        parse_proposal_id(&raw).map(Self)
    }
}

pub fn parse_proposal_id(raw: &str) -> Result<U256, ValidationError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new(format!(
            "proposalId '{raw}' is not a valid integer"
        )));
    }
    U256::from_str_radix(raw, 10)
        .map_err(|_| ValidationError::new(format!("proposalId '{raw}' exceeds uint256")))
}
