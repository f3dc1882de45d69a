//! The `{code, data, message}` response envelope.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Serialize, Serializer};

use crate::error::GatewayError;

/// Envelope outcome codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCode {
    Ok,
    PolicyRejected,
    ChainRpcFail,
    SimulationFail,
}

impl ApiCode {
    pub const fn as_u32(self) -> u32 {
        match self {
            Self::Ok => 0,
            Self::PolicyRejected => 40001,
            Self::ChainRpcFail => 50001,
            Self::SimulationFail => 50002,
        }
    }
}

impl Serialize for ApiCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.as_u32())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub code: ApiCode,
    pub data: T,
    pub message: String,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self::with_message(data, "ok")
    }

    /// Success code with a custom message.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            code: ApiCode::Ok,
            data,
            message: message.into(),
        }
    }

    /// Failure envelope; `data` is the route's empty value (`[]` or `null`).
    pub fn failure(err: &GatewayError, data: T) -> Self {
        Self {
            code: err.code(),
            data,
            message: err.message(),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn codes_serialize_as_integers() {
        let env = Envelope::ok(vec![1, 2]);
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"code": 0, "data": [1, 2], "message": "ok"})
        );
        assert_eq!(ApiCode::PolicyRejected.as_u32(), 40001);
        assert_eq!(ApiCode::ChainRpcFail.as_u32(), 50001);
        assert_eq!(ApiCode::SimulationFail.as_u32(), 50002);
    }

    #[test]
    fn failure_takes_code_and_message_from_error() {
        let env: Envelope<Option<()>> = Envelope::failure(&GatewayError::PolicyRejected, None);
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"code": 40001, "data": null, "message": "target/value failed policy checks"})
        );
    }
}
