//! Pre-flight policy checks for simulated proposals.

use govgate_abi::{checksum, AbiError, Address, U256};
use serde::Serialize;
use std::collections::BTreeSet;

/// Permitted proposal targets. Empty means unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    targets: BTreeSet<Address>,
}

impl AllowList {
    /// Parse a comma-separated address list; blank entries are ignored.
    pub fn parse(csv: &str) -> Result<Self, AbiError> {
        let targets = csv
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(checksum)
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self { targets })
    }

    pub fn from_addresses(addrs: impl IntoIterator<Item = Address>) -> Self {
        Self {
            targets: addrs.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// A target that does not parse as an address is never admitted by a
    /// non-empty list.
    pub fn permits(&self, target: &str) -> bool {
        if self.targets.is_empty() {
            return true;
        }
        checksum(target)
            .map(|addr| self.targets.contains(&addr))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyCheckResult {
    /// No on-chain pause hook is wired yet; always `false`.
    pub paused: bool,
    pub budget_ok: bool,
    pub target_ok: bool,
}

impl PolicyCheckResult {
    pub fn evaluate(allow_list: &AllowList, target: &str, value: U256) -> Self {
        Self {
            paused: false,
            budget_ok: value.is_zero(),
            target_ok: allow_list.permits(target),
        }
    }

    pub fn passed(&self) -> bool {
        self.target_ok && self.budget_ok
    }
}
