//! `ChainClient`: the operations the governor adapter needs from a node.

use async_trait::async_trait;
use govgate_abi::{AbiError, AbiValue, Address, JsonAbi, U256};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{ChainError, RpcError};
use crate::log::{decode_hex_data, parse_hex_u64, LogFilter, RawLog};
use crate::request::JsonRpcRequest;
use crate::transport::RpcTransport;

/// Chain access used by the gateway. Every method is a single attempt.
///
/// # Object Safety
/// The trait is object-safe and is stored as `Arc<dyn ChainClient>`.
#[async_trait]
pub trait ChainClient: Send + Sync {
    async fn current_block_number(&self) -> Result<u64, RpcError>;

    /// Logs matching `filter`, in chain order.
    async fn get_logs(&self, filter: &LogFilter) -> Result<Vec<RawLog>, RpcError>;

    /// Read-only contract call at `latest`, decoded against the function outputs.
    async fn call(
        &self,
        to: Address,
        abi: &JsonAbi,
        function_name: &str,
        args: &[AbiValue],
    ) -> Result<Vec<AbiValue>, ChainError>;

    async fn estimate_gas(
        &self,
        from: Address,
        to: Address,
        data: &[u8],
        value: U256,
    ) -> Result<u64, RpcError>;

    /// `0x`-prefixed calldata for `function_name(args...)`. Never touches the node.
    fn encode_call(
        &self,
        abi: &JsonAbi,
        function_name: &str,
        args: &[AbiValue],
    ) -> Result<String, AbiError> {
        let calldata = govgate_abi::encode_call(abi, function_name, args)?;
        Ok(format!("0x{}", hex::encode(calldata)))
    }
}

/// `ChainClient` over a JSON-RPC transport.
pub struct JsonRpcChainClient<T> {
    transport: T,
    next_id: AtomicU64,
}

impl<T: RpcTransport> JsonRpcChainClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn request<R: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<R, RpcError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let resp = self
            .transport
            .send(JsonRpcRequest::new(id, method, params))
            .await?;
        let result = resp.into_result().map_err(|e| {
            tracing::debug!(method, code = e.code, error = %e.message, "rpc error response");
            RpcError::Rpc(e)
        })?;
        Ok(serde_json::from_value(result)?)
    }
}

#[async_trait]
impl<T: RpcTransport> ChainClient for JsonRpcChainClient<T> {
    async fn current_block_number(&self) -> Result<u64, RpcError> {
        let hex: String = self.request("eth_blockNumber", vec![]).await?;
        parse_hex_u64(&hex)
    }

    async fn get_logs(&self, filter: &LogFilter) -> Result<Vec<RawLog>, RpcError> {
        self.request("eth_getLogs", vec![filter.to_json()]).await
    }

    async fn call(
        &self,
        to: Address,
        abi: &JsonAbi,
        function_name: &str,
        args: &[AbiValue],
    ) -> Result<Vec<AbiValue>, ChainError> {
        let data = self.encode_call(abi, function_name, args)?;
        let tx = json!({
            "to": to.to_checksum(None),
            "data": data,
        });
        let hex: String = self.request("eth_call", vec![tx, json!("latest")]).await?;
        let bytes = decode_hex_data(&hex)?;
        Ok(govgate_abi::decode_outputs(abi, function_name, &bytes)?)
    }

    async fn estimate_gas(
        &self,
        from: Address,
        to: Address,
        data: &[u8],
        value: U256,
    ) -> Result<u64, RpcError> {
        let tx = json!({
            "from": from.to_checksum(None),
            "to": to.to_checksum(None),
            "data": format!("0x{}", hex::encode(data)),
            "value": format!("{value:#x}"),
        });
        let hex: String = self.request("eth_estimateGas", vec![tx]).await?;
        parse_hex_u64(&hex)
    }
}
