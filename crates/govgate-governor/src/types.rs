//! Response-shaped proposal types. Derived per request, never persisted.

use serde::Serialize;

use crate::state::ProposalState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalSummary {
    /// uint256 proposal id, decimal
    pub id: String,
    pub title: String,
    pub state: ProposalState,
    /// EIP-55 checksummed
    pub proposer: String,
    pub start: u64,
    pub end: u64,
}

/// One proposal action. Not recoverable from a single state read, so detail
/// responses currently carry none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalAction {
    pub target: String,
    pub value: String,
    pub signature: String,
    pub calldata: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub actions: Vec<ProposalAction>,
    pub state: ProposalState,
}

/// Result of a listing: the entries that decoded, plus how many were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProposalPage {
    pub proposals: Vec<ProposalSummary>,
    pub skipped: usize,
}

impl ProposalPage {
    pub fn active_count(&self) -> usize {
        self.proposals.iter().filter(|p| p.state.is_active()).count()
    }
}
