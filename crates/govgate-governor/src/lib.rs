//! govgate-governor: domain layer over a [`ChainClient`](govgate_rpc::ChainClient).
//!
//! Knows the governor ABI, the `ProposalCreated` event topic, the proposal
//! state enumeration and the target allow-list, and turns raw chain reads
//! into [`ProposalSummary`] / [`ProposalDetail`] values.

pub mod abi;
pub mod adapter;
pub mod config;
pub mod error;
pub mod policy;
pub mod state;
pub mod types;

pub use abi::GovernorAbi;
pub use adapter::{proposal_title, resolve_start_block, GovernorAdapter};
pub use config::GovernorConfig;
pub use error::GovernorError;
pub use policy::{AllowList, PolicyCheckResult};
pub use state::ProposalState;
pub use types::{ProposalAction, ProposalDetail, ProposalPage, ProposalSummary};
