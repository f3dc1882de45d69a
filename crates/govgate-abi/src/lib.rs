//! # govgate-abi
//!
//! EVM ABI helpers for the governance gateway, built on `alloy-rs`.
//!
//! - [`encoder`]: function-call calldata encoding and `eth_call` output decoding
//! - [`event`]: event log decoding (indexed topics + data payload)
//! - [`fingerprint`]: keccak256 event topics and function selectors
//! - [`address`]: EIP-55 checksum parsing/rendering
//! - [`value`]: [`AbiValue`], the normalized value type passed across crate boundaries

pub mod address;
pub mod encoder;
pub mod error;
pub mod event;
pub mod fingerprint;
pub mod value;

pub use address::{checksum, to_checksum};
pub use encoder::{decode_outputs, encode_call, find_function, parse_abi};
pub use error::AbiError;
pub use event::{decode_event_log, DecodedLog};
pub use fingerprint::{event_topic, keccak256};
pub use value::AbiValue;

pub use alloy_json_abi::{Event, JsonAbi};
pub use alloy_primitives::{Address, B256, I256, U256};
