use govgate_abi::Address;

use crate::abi::GovernorAbi;
use crate::policy::AllowList;

/// Read-only configuration loaded once at startup.
#[derive(Debug, Clone)]
pub struct GovernorConfig {
    pub abi: GovernorAbi,
    pub allow_list: AllowList,
    /// Governor used when a simulate request omits `dao`.
    pub default_dao: Address,
}

impl GovernorConfig {
    pub fn new(abi: GovernorAbi, allow_list: AllowList, default_dao: Address) -> Self {
        Self {
            abi,
            allow_list,
            default_dao,
        }
    }
}
