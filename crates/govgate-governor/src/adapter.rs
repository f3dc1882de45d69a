//! `GovernorAdapter`: proposal discovery, state reads and proposal simulation.
//!
//! # Listing
//! ```text
//! eth_blockNumber ──► window [start, latest] ──► eth_getLogs(ProposalCreated)
//!      └─ keep last `limit` logs ──► decode + state(id) per log ──► ProposalPage
//! ```
//! A log that fails to decode, or whose state read fails, is skipped and
//! counted; only the block-number lookup and the log query abort a listing.

use govgate_abi::{checksum, decode_event_log, AbiError, AbiValue, Address, U256};
use govgate_rpc::{ChainClient, LogFilter, RawLog};
use std::sync::Arc;

use crate::config::GovernorConfig;
use crate::error::GovernorError;
use crate::policy::PolicyCheckResult;
use crate::state::ProposalState;
use crate::types::{ProposalDetail, ProposalPage, ProposalSummary};

/// Maximum title length, in characters.
pub const TITLE_MAX_CHARS: usize = 60;

/// Detail responses cannot recover the description from a state read.
pub const DESCRIPTION_PLACEHOLDER: &str = "Refer to on-chain description.";

/// Resolve a listing offset to an absolute start block.
///
/// Negative offsets count back from `latest` and clamp at genesis;
/// non-negative offsets are absolute block numbers.
pub fn resolve_start_block(latest: u64, from_block_offset: i64) -> u64 {
    if from_block_offset < 0 {
        latest.saturating_sub(from_block_offset.unsigned_abs())
    } else {
        from_block_offset as u64
    }
}

/// First [`TITLE_MAX_CHARS`] characters of the description, or `"Proposal <id>"`.
pub fn proposal_title(id: &U256, description: &str) -> String {
    if description.is_empty() {
        format!("Proposal {id}")
    } else {
        description.chars().take(TITLE_MAX_CHARS).collect()
    }
}

/// Parse a base-10 wei amount into a uint256.
fn parse_wei(input: &str) -> Result<U256, AbiError> {
    let digits = input.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AbiError::encode(format!(
            "fundWei '{input}' is not an unsigned integer"
        )));
    }
    U256::from_str_radix(digits, 10)
        .map_err(|e| AbiError::encode(format!("fundWei '{input}' does not fit in uint256: {e}")))
}

fn uint_to_u64(value: &AbiValue, field: &str) -> Result<u64, AbiError> {
    let u = value
        .as_uint()
        .ok_or_else(|| AbiError::decode(format!("'{field}' is not an unsigned integer")))?;
    u64::try_from(u).map_err(|_| AbiError::decode(format!("'{field}' value {u} exceeds u64")))
}

pub struct GovernorAdapter {
    chain: Arc<dyn ChainClient>,
    config: GovernorConfig,
}

impl GovernorAdapter {
    pub fn new(chain: Arc<dyn ChainClient>, config: GovernorConfig) -> Self {
        Self { chain, config }
    }

    pub fn config(&self) -> &GovernorConfig {
        &self.config
    }

    /// List the most recent `limit` proposals created in the resolved block window.
    pub async fn list_proposals(
        &self,
        dao: &str,
        from_block_offset: i64,
        limit: usize,
    ) -> Result<ProposalPage, GovernorError> {
        let dao = checksum(dao)?;
        let latest = self.chain.current_block_number().await?;
        let start = resolve_start_block(latest, from_block_offset);

        let filter = LogFilter {
            address: dao,
            topics: vec![self.config.abi.proposal_created_topic()],
            from_block: start,
            to_block: latest,
        };
        let logs = self.chain.get_logs(&filter).await?;
        tracing::debug!(
            dao = %dao,
            from_block = start,
            to_block = latest,
            found = logs.len(),
            limit,
            "proposal logs fetched"
        );

        let window = &logs[logs.len().saturating_sub(limit)..];
        let mut page = ProposalPage::default();
        for log in window {
            match self.summarize(dao, log).await {
                Ok(summary) => page.proposals.push(summary),
                Err(e) => {
                    page.skipped += 1;
                    tracing::warn!(
                        dao = %dao,
                        tx = log.transaction_hash.as_deref().unwrap_or("?"),
                        error = %e,
                        "skipping undecodable proposal log"
                    );
                }
            }
        }
        Ok(page)
    }

    async fn summarize(&self, dao: Address, log: &RawLog) -> Result<ProposalSummary, GovernorError> {
        let topics = log.topics_b256()?;
        let data = log.data_bytes()?;
        let decoded = decode_event_log(self.config.abi.proposal_created(), &topics, &data)?;

        let id = decoded
            .require("proposalId")?
            .as_uint()
            .ok_or_else(|| AbiError::decode("'proposalId' is not an unsigned integer"))?;
        let proposer = decoded
            .require("proposer")?
            .as_address()
            .ok_or_else(|| AbiError::decode("'proposer' is not an address"))?;
        let start = uint_to_u64(decoded.require("startBlock")?, "startBlock")?;
        let end = uint_to_u64(decoded.require("endBlock")?, "endBlock")?;
        let description = decoded
            .require("description")?
            .as_str()
            .ok_or_else(|| AbiError::decode("'description' is not a string"))?;

        let state = self.read_state(dao, id).await?;

        Ok(ProposalSummary {
            id: id.to_string(),
            title: proposal_title(&id, description),
            state,
            proposer: proposer.to_checksum(None),
            start,
            end,
        })
    }

    async fn read_state(&self, dao: Address, proposal_id: U256) -> Result<ProposalState, GovernorError> {
        let outputs = self
            .chain
            .call(
                dao,
                self.config.abi.abi(),
                crate::abi::GovernorAbi::STATE,
                &[AbiValue::Uint(proposal_id)],
            )
            .await?;
        let code = outputs
            .first()
            .ok_or_else(|| AbiError::decode("state() returned no value"))?;
        Ok(ProposalState::from_code(uint_to_u64(code, "state")?))
    }

    /// Current state of one proposal. Title and description are placeholders.
    pub async fn get_proposal_detail(
        &self,
        dao: &str,
        proposal_id: U256,
    ) -> Result<ProposalDetail, GovernorError> {
        let dao = checksum(dao)?;
        let state = self.read_state(dao, proposal_id).await?;
        Ok(ProposalDetail {
            id: proposal_id.to_string(),
            title: format!("Proposal {proposal_id}"),
            description: DESCRIPTION_PLACEHOLDER.to_string(),
            actions: Vec::new(),
            state,
        })
    }

    /// `proposeAI((title, description, fundWei), target)` calldata, `0x`-prefixed.
    pub fn encode_propose_calldata(
        &self,
        title: &str,
        description: &str,
        fund_wei: &str,
        target: &str,
        dao: &str,
    ) -> Result<String, GovernorError> {
        checksum(dao)?;
        let target = checksum(target)?;
        let fund = parse_wei(fund_wei)?;

        let args = [
            AbiValue::Tuple(vec![
                AbiValue::Str(title.to_string()),
                AbiValue::Str(description.to_string()),
                AbiValue::Uint(fund),
            ]),
            AbiValue::Address(target),
        ];
        Ok(self
            .chain
            .encode_call(self.config.abi.abi(), crate::abi::GovernorAbi::PROPOSE_AI, &args)?)
    }

    /// Estimate gas for sending `calldata` to `dao` from `from_address`.
    ///
    /// `from_address` only shapes the estimate; nothing is ever sent.
    pub async fn estimate_simulation_gas(
        &self,
        from_address: &str,
        dao: &str,
        calldata: &str,
        value: U256,
    ) -> Result<u64, GovernorError> {
        let from = checksum(from_address)?;
        let to = checksum(dao)?;
        let hex_data = calldata.strip_prefix("0x").unwrap_or(calldata);
        let data = hex::decode(hex_data)
            .map_err(|e| AbiError::decode(format!("calldata is not hex: {e}")))?;
        Ok(self.chain.estimate_gas(from, to, &data, value).await?)
    }

    pub fn run_policy_checks(&self, target: &str, value: U256) -> PolicyCheckResult {
        PolicyCheckResult::evaluate(&self.config.allow_list, target, value)
    }
}
