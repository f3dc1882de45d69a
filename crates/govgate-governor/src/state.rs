//! Governor proposal lifecycle states.

use serde::{Serialize, Serializer};
use std::fmt;

/// `IGovernor.ProposalState`, plus a catch-all for codes outside 0..=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProposalState {
    Pending,
    Active,
    Canceled,
    Defeated,
    Succeeded,
    Queued,
    Expired,
    Executed,
    /// Rendered as the raw numeric code
    Unknown(u64),
}

impl ProposalState {
    const TABLE: [ProposalState; 8] = [
        ProposalState::Pending,
        ProposalState::Active,
        ProposalState::Canceled,
        ProposalState::Defeated,
        ProposalState::Succeeded,
        ProposalState::Queued,
        ProposalState::Expired,
        ProposalState::Executed,
    ];

    pub fn from_code(code: u64) -> Self {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::TABLE.get(i).copied())
            .unwrap_or(Self::Unknown(code))
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for ProposalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Active => write!(f, "Active"),
            Self::Canceled => write!(f, "Canceled"),
            Self::Defeated => write!(f, "Defeated"),
            Self::Succeeded => write!(f, "Succeeded"),
            Self::Queued => write!(f, "Queued"),
            Self::Expired => write!(f, "Expired"),
            Self::Executed => write!(f, "Executed"),
            Self::Unknown(code) => write!(f, "{code}"),
        }
    }
}

impl Serialize for ProposalState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
