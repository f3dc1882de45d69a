//! Event log decoding against a JSON-ABI event definition.
//!
//! - `topics[0]` → event topic (keccak256 of the signature), verified
//! - `topics[1..]` → indexed inputs in declaration order
//! - `data` → non-indexed inputs, ABI-encoded as a parameter sequence

use alloy_core::dyn_abi::{DynSolType, DynSolValue};
use alloy_dyn_abi::Specifier;
use alloy_json_abi::Event;
use alloy_primitives::B256;

use crate::error::AbiError;
use crate::fingerprint::event_topic;
use crate::value::{normalize, AbiValue};

/// Decoded event inputs in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLog {
    pub fields: Vec<(String, AbiValue)>,
}

impl DecodedLog {
    /// Get a field value by name.
    pub fn field(&self, name: &str) -> Option<&AbiValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Get a field or fail with a decode error naming it.
    pub fn require(&self, name: &str) -> Result<&AbiValue, AbiError> {
        self.field(name)
            .ok_or_else(|| AbiError::decode(format!("missing field '{name}'")))
    }
}

/// Indexed reference types are stored as the keccak256 of their encoding,
/// so the original value cannot be recovered from the topic.
fn is_hashed_when_indexed(ty: &DynSolType) -> bool {
    matches!(
        ty,
        DynSolType::String
            | DynSolType::Bytes
            | DynSolType::Array(_)
            | DynSolType::FixedArray(..)
            | DynSolType::Tuple(_)
    )
}

fn decode_topic(topic: &B256, ty: &DynSolType) -> Result<AbiValue, AbiError> {
    if is_hashed_when_indexed(ty) {
        return Ok(AbiValue::Bytes(topic.to_vec()));
    }
    ty.abi_decode(topic.as_slice())
        .map(normalize)
        .map_err(|e| AbiError::decode(format!("topic decode: {e}")))
}

/// Decode one log emitted by `event`.
pub fn decode_event_log(
    event: &Event,
    topics: &[B256],
    data: &[u8],
) -> Result<DecodedLog, AbiError> {
    let expected = event_topic(&event.signature());
    match topics.first() {
        Some(t) if *t == expected => {}
        Some(t) => {
            return Err(AbiError::TopicMismatch {
                expected: format!("{expected:#x}"),
                got: format!("{t:#x}"),
            })
        }
        None => return Err(AbiError::decode("log has no topics")),
    }

    let mut indexed = Vec::new();
    let mut body = Vec::new();
    for (i, input) in event.inputs.iter().enumerate() {
        let ty = input.resolve().map_err(|e| AbiError::InvalidAbi {
            reason: format!("event '{}' input {i}: {e}", event.name),
        })?;
        let name = if input.name.is_empty() {
            format!("arg{i}")
        } else {
            input.name.clone()
        };
        if input.indexed {
            indexed.push((i, name, ty));
        } else {
            body.push((i, name, ty));
        }
    }

    let mut fields: Vec<(usize, String, AbiValue)> = Vec::with_capacity(event.inputs.len());

    for (n, (i, name, ty)) in indexed.into_iter().enumerate() {
        let topic = topics
            .get(n + 1)
            .ok_or_else(|| AbiError::decode(format!("missing topic for indexed '{name}'")))?;
        fields.push((i, name, decode_topic(topic, &ty)?));
    }

    if !body.is_empty() {
        let tuple = DynSolType::Tuple(body.iter().map(|(_, _, t)| t.clone()).collect());
        let decoded = tuple
            .abi_decode_params(data)
            .map_err(|e| AbiError::decode(format!("event '{}' data: {e}", event.name)))?;
        let values = match decoded {
            DynSolValue::Tuple(vals) => vals,
            other => vec![other],
        };
        for ((i, name, _), val) in body.into_iter().zip(values) {
            fields.push((i, name, normalize(val)));
        }
    }

    fields.sort_by_key(|(i, _, _)| *i);
    Ok(DecodedLog {
        fields: fields.into_iter().map(|(_, n, v)| (n, v)).collect(),
    })
}
