use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use govgate_governor::GovernorError;
use serde_json::json;
use thiserror::Error;

use crate::envelope::ApiCode;

/// Handler failures that are reported inside an [`Envelope`](crate::Envelope).
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("CHAIN_RPC_FAIL: {0}")]
    ChainRead(GovernorError),

    #[error("target/value failed policy checks")]
    PolicyRejected,

    #[error("SIMULATION_FAIL: {0}")]
    Simulation(GovernorError),
}

impl GatewayError {
    pub fn code(&self) -> ApiCode {
        match self {
            Self::ChainRead(_) => ApiCode::ChainRpcFail,
            Self::PolicyRejected => ApiCode::PolicyRejected,
            Self::Simulation(_) => ApiCode::SimulationFail,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Malformed request input. Rendered as HTTP 422 `{"detail": ...}` with no envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{detail}")]
pub struct ValidationError {
    pub detail: String,
}

impl ValidationError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "detail": self.detail })),
        )
            .into_response()
    }
}
