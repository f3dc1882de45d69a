//! govgate-rpc: the chain-facing side of the gateway.
//!
//! - [`ChainClient`]: the async trait the governor adapter talks to
//! - [`JsonRpcChainClient`]: its implementation over any [`RpcTransport`]
//! - [`HttpTransport`]: `reqwest`-backed JSON-RPC 2.0 transport
//! - [`JsonRpcRequest`] / [`JsonRpcResponse`]: wire types
//! - [`RawLog`] / [`LogFilter`]: `eth_getLogs` input and output
//!
//! Every call is single-shot: no retries, no failover. Failures surface
//! immediately so the caller can decide how to degrade.

pub mod client;
pub mod error;
pub mod log;
pub mod request;
pub mod transport;

pub use client::{ChainClient, JsonRpcChainClient};
pub use error::{ChainError, RpcError};
pub use log::{parse_hex_u64, to_hex_quantity, LogFilter, RawLog};
pub use request::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcId};
pub use transport::{HttpTransport, RpcTransport};
