use govgate_abi::AbiError;
use govgate_rpc::{ChainError, RpcError};
use thiserror::Error;

/// Errors surfaced by [`GovernorAdapter`](crate::GovernorAdapter) operations.
#[derive(Debug, Error)]
pub enum GovernorError {
    /// The node could not be reached or rejected the request.
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// Bad address, argument or ABI payload.
    #[error(transparent)]
    Abi(#[from] AbiError),
}

impl GovernorError {
    /// Returns `true` if the node (not the input) is at fault.
    pub fn is_chain_failure(&self) -> bool {
        matches!(self, Self::Rpc(_))
    }
}

impl From<ChainError> for GovernorError {
    fn from(e: ChainError) -> Self {
        match e {
            ChainError::Rpc(e) => Self::Rpc(e),
            ChainError::Abi(e) => Self::Abi(e),
        }
    }
}
