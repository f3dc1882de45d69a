//! `eth_getLogs` filter/result types and hex quantity helpers.

use govgate_abi::{Address, B256};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::str::FromStr;

use crate::error::RpcError;

/// A raw EVM log as returned by `eth_getLogs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLog {
    pub address: String,
    pub topics: Vec<String>,
    pub data: String,
    /// `None` for pending logs
    #[serde(default)]
    pub block_number: Option<String>,
    #[serde(default)]
    pub transaction_hash: Option<String>,
    #[serde(default)]
    pub log_index: Option<String>,
    #[serde(default)]
    pub removed: Option<bool>,
}

impl RawLog {
    pub fn block_number_u64(&self) -> Option<u64> {
        self.block_number.as_deref().and_then(|b| parse_hex_u64(b).ok())
    }

    /// Topics parsed as 32-byte words.
    pub fn topics_b256(&self) -> Result<Vec<B256>, RpcError> {
        self.topics
            .iter()
            .map(|t| {
                B256::from_str(t)
                    .map_err(|e| RpcError::InvalidResponse(format!("invalid topic '{t}': {e}")))
            })
            .collect()
    }

    /// The `data` payload as bytes.
    pub fn data_bytes(&self) -> Result<Vec<u8>, RpcError> {
        decode_hex_data(&self.data)
    }
}

/// Filter for `eth_getLogs` over an inclusive block range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    pub address: Address,
    /// Positional topic filter; `topics[0]` is the event topic.
    pub topics: Vec<B256>,
    pub from_block: u64,
    pub to_block: u64,
}

impl LogFilter {
    /// The JSON-RPC filter object.
    pub fn to_json(&self) -> Value {
        let topics: Vec<String> = self.topics.iter().map(|t| format!("{t:#x}")).collect();
        json!({
            "fromBlock": to_hex_quantity(self.from_block),
            "toBlock": to_hex_quantity(self.to_block),
            "address": self.address.to_checksum(None),
            "topics": topics,
        })
    }
}

/// Parse a hex quantity (`0x`-prefixed or bare) to u64.
pub fn parse_hex_u64(s: &str) -> Result<u64, RpcError> {
    let hex = s.strip_prefix("0x").unwrap_or(s);
    u64::from_str_radix(hex, 16)
        .map_err(|e| RpcError::InvalidResponse(format!("invalid hex quantity '{s}': {e}")))
}

/// Render a u64 as a minimal JSON-RPC hex quantity.
pub fn to_hex_quantity(n: u64) -> String {
    format!("0x{n:x}")
}

/// Decode `0x`-prefixed hex data; `"0x"` is empty.
pub fn decode_hex_data(s: &str) -> Result<Vec<u8>, RpcError> {
    let hex = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(hex).map_err(|e| RpcError::InvalidResponse(format!("invalid hex data: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_quantities() {
        assert_eq!(parse_hex_u64("0x1").unwrap(), 1);
        assert_eq!(parse_hex_u64("0xff").unwrap(), 255);
        assert_eq!(parse_hex_u64("1234").unwrap(), 0x1234);
        assert!(parse_hex_u64("0xzz").is_err());
        assert_eq!(to_hex_quantity(0), "0x0");
        assert_eq!(to_hex_quantity(255), "0xff");
    }

    #[test]
    fn raw_log_from_node_json() {
        let log: RawLog = serde_json::from_value(json!({
            "address": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
            "topics": ["0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"],
            "data": "0x00ff",
            "blockNumber": "0x12a05f200",
            "transactionHash": "0xabc",
            "logIndex": "0x5",
            "removed": false
        }))
        .unwrap();
        assert_eq!(log.block_number_u64(), Some(5_000_000_000));
        assert_eq!(log.data_bytes().unwrap(), vec![0x00, 0xff]);
        assert_eq!(log.topics_b256().unwrap().len(), 1);
    }

    #[test]
    fn filter_json_uses_checksum_and_hex_blocks() {
        let filter = LogFilter {
            address: "0xd8da6bf26964af9d7eed9e03e53415d37aa96045".parse().unwrap(),
            topics: vec![B256::ZERO],
            from_block: 16,
            to_block: 4096,
        };
        let v = filter.to_json();
        assert_eq!(v["fromBlock"], "0x10");
        assert_eq!(v["toBlock"], "0x1000");
        assert_eq!(v["address"], "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
        assert_eq!(v["topics"][0], format!("0x{}", "0".repeat(64)));
    }
}
