//! Request and response bodies of the `/v1/dao` routes.

use govgate_governor::PolicyCheckResult;
use serde::{Deserialize, Serialize};

/// Sender used for gas estimation when the request names none.
pub const DEFAULT_FROM_ADDRESS: &str = "0x0000000000000000000000000000000000000001";

pub const DEFAULT_FROM_BLOCK: i64 = -5000;
pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 200;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub tvl: f64,
    pub supply: String,
    pub active_proposals: usize,
    pub peg_deviation: f64,
    pub degraded: bool,
}

impl MetricsSnapshot {
    pub fn healthy(active_proposals: usize) -> Self {
        Self {
            tvl: 0.0,
            supply: "0".into(),
            active_proposals,
            peg_deviation: 0.0,
            degraded: false,
        }
    }

    pub fn degraded() -> Self {
        Self {
            degraded: true,
            ..Self::healthy(0)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub calldata: String,
    pub value: String,
    pub gas_estimate: u64,
    pub checks: PolicyCheckResult,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateRequest {
    #[serde(default)]
    pub dao: Option<String>,
    pub title: String,
    pub description: String,
    pub fund_amount_wei: String,
    pub target: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
}

fn default_from_address() -> String {
    DEFAULT_FROM_ADDRESS.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct DaoQuery {
    pub dao: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalsQuery {
    pub dao: String,
    #[serde(default = "default_from_block")]
    pub from_block: i64,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_from_block() -> i64 {
    DEFAULT_FROM_BLOCK
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub ts: i64,
}
