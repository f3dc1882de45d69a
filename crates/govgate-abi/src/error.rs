//! Error types for ABI encoding and decoding.

use thiserror::Error;

/// Errors raised while loading an ABI or converting values to/from ABI bytes.
#[derive(Debug, Error)]
pub enum AbiError {
    #[error("invalid ABI JSON: {reason}")]
    InvalidAbi { reason: String },

    #[error("{kind} '{name}' not found in ABI")]
    MissingItem { kind: &'static str, name: String },

    #[error("ABI encode failed: {reason}")]
    Encode { reason: String },

    #[error("ABI decode failed: {reason}")]
    Decode { reason: String },

    #[error("invalid address '{input}'")]
    InvalidAddress { input: String },

    #[error("topic mismatch: expected {expected}, got {got}")]
    TopicMismatch { expected: String, got: String },
}

impl AbiError {
    pub fn encode(reason: impl Into<String>) -> Self {
        Self::Encode {
            reason: reason.into(),
        }
    }

    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode {
            reason: reason.into(),
        }
    }
}
