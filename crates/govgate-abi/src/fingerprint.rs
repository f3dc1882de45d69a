//! keccak256 fingerprints of ABI signatures.
//!
//! The topic of an EVM event is the keccak256 hash of its canonical
//! signature, e.g. `keccak256("Transfer(address,address,uint256)")`.

use alloy_primitives::B256;
use tiny_keccak::{Hasher, Keccak};

/// keccak256 over arbitrary bytes.
pub fn keccak256(input: &[u8]) -> B256 {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(input);
    hasher.finalize(&mut output);
    B256::from(output)
}

/// Compute `topics[0]` for an event signature string `"Name(type1,type2,...)"`.
pub fn event_topic(signature: &str) -> B256 {
    keccak256(signature.as_bytes())
}

/// First four bytes of the signature hash.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    let mut out = [0u8; 4];
    out.copy_from_slice(&hash[..4]);
    out
}
