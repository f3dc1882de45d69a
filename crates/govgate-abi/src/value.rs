//! Normalized ABI values.
//!
//! `AbiValue` is what callers build arguments from and what decoders hand
//! back, so no other crate has to match on alloy's `DynSolValue` directly.

use alloy_core::dyn_abi::{DynSolType, DynSolValue};
use alloy_primitives::{Address, FixedBytes, I256, U256};
use std::fmt;

use crate::address::to_checksum;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiValue {
    Uint(U256),
    Int(I256),
    Bool(bool),
    Address(Address),
    Str(String),
    /// Dynamic `bytes` and fixed `bytesN` alike
    Bytes(Vec<u8>),
    Array(Vec<AbiValue>),
    Tuple(Vec<AbiValue>),
}

impl AbiValue {
    pub fn as_uint(&self) -> Option<U256> {
        match self {
            AbiValue::Uint(u) => Some(*u),
            _ => None,
        }
    }

    pub fn as_address(&self) -> Option<Address> {
        match self {
            AbiValue::Address(a) => Some(*a),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AbiValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Short type tag used in mismatch messages.
    fn kind(&self) -> &'static str {
        match self {
            AbiValue::Uint(_) => "uint",
            AbiValue::Int(_) => "int",
            AbiValue::Bool(_) => "bool",
            AbiValue::Address(_) => "address",
            AbiValue::Str(_) => "string",
            AbiValue::Bytes(_) => "bytes",
            AbiValue::Array(_) => "array",
            AbiValue::Tuple(_) => "tuple",
        }
    }
}

impl fmt::Display for AbiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbiValue::Uint(u) => write!(f, "{u}"),
            AbiValue::Int(i) => write!(f, "{i}"),
            AbiValue::Bool(b) => write!(f, "{b}"),
            AbiValue::Address(a) => write!(f, "{}", to_checksum(a)),
            AbiValue::Str(s) => write!(f, "{s}"),
            AbiValue::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
            AbiValue::Array(items) | AbiValue::Tuple(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Convert a decoded `DynSolValue` into an `AbiValue`.
pub fn normalize(val: DynSolValue) -> AbiValue {
    match val {
        DynSolValue::Bool(b) => AbiValue::Bool(b),
        DynSolValue::Int(i, _bits) => AbiValue::Int(i),
        DynSolValue::Uint(u, _bits) => AbiValue::Uint(u),
        DynSolValue::FixedBytes(bytes, size) => AbiValue::Bytes(bytes[..size].to_vec()),
        DynSolValue::Bytes(b) => AbiValue::Bytes(b),
        DynSolValue::String(s) => AbiValue::Str(s),
        DynSolValue::Address(a) => AbiValue::Address(a),
        DynSolValue::Array(vals) | DynSolValue::FixedArray(vals) => {
            AbiValue::Array(vals.into_iter().map(normalize).collect())
        }
        DynSolValue::Tuple(fields) => AbiValue::Tuple(fields.into_iter().map(normalize).collect()),
        // Function pointers (address ++ selector) surface as raw bytes
        DynSolValue::Function(f) => AbiValue::Bytes(f.to_vec()),
    }
}

/// Convert an `AbiValue` to the alloy `DynSolValue` for the expected type.
pub fn to_dyn_value(val: &AbiValue, expected: &DynSolType) -> Result<DynSolValue, String> {
    match (val, expected) {
        (AbiValue::Bool(b), DynSolType::Bool) => Ok(DynSolValue::Bool(*b)),

        (AbiValue::Uint(u), DynSolType::Uint(bits)) => {
            if *bits < 256 && u.bit_len() > *bits {
                return Err(format!("value {u} does not fit in uint{bits}"));
            }
            Ok(DynSolValue::Uint(*u, *bits))
        }

        (AbiValue::Int(i), DynSolType::Int(bits)) => Ok(DynSolValue::Int(*i, *bits)),

        (AbiValue::Address(a), DynSolType::Address) => Ok(DynSolValue::Address(*a)),

        (AbiValue::Bytes(b), DynSolType::Bytes) => Ok(DynSolValue::Bytes(b.clone())),

        (AbiValue::Bytes(b), DynSolType::FixedBytes(n)) => {
            if b.len() > *n {
                return Err(format!("bytes{n}: got {} bytes", b.len()));
            }
            let mut word = [0u8; 32];
            word[..b.len()].copy_from_slice(b);
            Ok(DynSolValue::FixedBytes(FixedBytes::from(word), *n))
        }

        (AbiValue::Str(s), DynSolType::String) => Ok(DynSolValue::String(s.clone())),

        (AbiValue::Array(elems), DynSolType::Array(inner)) => {
            let dyn_elems: Result<Vec<_>, _> =
                elems.iter().map(|e| to_dyn_value(e, inner)).collect();
            Ok(DynSolValue::Array(dyn_elems?))
        }

        (AbiValue::Array(elems), DynSolType::FixedArray(inner, len)) => {
            if elems.len() != *len {
                return Err(format!(
                    "fixed array length mismatch: expected {len}, got {}",
                    elems.len()
                ));
            }
            let dyn_elems: Result<Vec<_>, _> =
                elems.iter().map(|e| to_dyn_value(e, inner)).collect();
            Ok(DynSolValue::FixedArray(dyn_elems?))
        }

        (AbiValue::Tuple(fields), DynSolType::Tuple(types)) => {
            if fields.len() != types.len() {
                return Err(format!(
                    "tuple arity mismatch: expected {}, got {}",
                    types.len(),
                    fields.len()
                ));
            }
            let dyn_elems: Result<Vec<_>, _> = fields
                .iter()
                .zip(types.iter())
                .map(|(v, t)| to_dyn_value(v, t))
                .collect();
            Ok(DynSolValue::Tuple(dyn_elems?))
        }

        _ => Err(format!("cannot convert {} to {expected}", val.kind())),
    }
}
