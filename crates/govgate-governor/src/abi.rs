//! The governor contract ABI as shipped with the gateway.

use govgate_abi::{event_topic, find_function, parse_abi, AbiError, Event, JsonAbi, B256};

/// Parsed governor ABI with the pieces the adapter needs resolved up front.
#[derive(Debug, Clone)]
pub struct GovernorAbi {
    abi: JsonAbi,
    proposal_created: Event,
    proposal_created_topic: B256,
}

impl GovernorAbi {
    pub const PROPOSAL_CREATED: &'static str = "ProposalCreated";
    pub const STATE: &'static str = "state";
    pub const PROPOSE_AI: &'static str = "proposeAI";

    /// Parse ABI JSON; fails unless `ProposalCreated`, `state` and `proposeAI` are all present.
    pub fn from_json(abi_json: &str) -> Result<Self, AbiError> {
        let abi = parse_abi(abi_json)?;

        let proposal_created = abi
            .events()
            .find(|e| e.name == Self::PROPOSAL_CREATED)
            .cloned()
            .ok_or_else(|| AbiError::MissingItem {
                kind: "event",
                name: Self::PROPOSAL_CREATED.to_string(),
            })?;
        find_function(&abi, Self::STATE)?;
        find_function(&abi, Self::PROPOSE_AI)?;

        let proposal_created_topic = event_topic(&proposal_created.signature());
        Ok(Self {
            abi,
            proposal_created,
            proposal_created_topic,
        })
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    pub fn proposal_created(&self) -> &Event {
        &self.proposal_created
    }

    pub fn proposal_created_topic(&self) -> B256 {
        self.proposal_created_topic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED: &str = include_str!("../../../abi/AIProposalGovernor.json");

    #[test]
    fn shipped_abi_loads() {
        let abi = GovernorAbi::from_json(SHIPPED).unwrap();
        assert_eq!(
            abi.proposal_created_topic(),
            event_topic(
                "ProposalCreated(uint256,address,address[],uint256[],string[],bytes[],uint256,uint256,string)"
            )
        );
    }

    #[test]
    fn missing_event_is_rejected() {
        let json = r#"[
            {"type":"function","name":"state","inputs":[{"name":"id","type":"uint256"}],"outputs":[{"name":"","type":"uint8"}],"stateMutability":"view"},
            {"type":"function","name":"proposeAI","inputs":[],"outputs":[],"stateMutability":"nonpayable"}
        ]"#;
        let err = GovernorAbi::from_json(json).unwrap_err();
        assert!(matches!(err, AbiError::MissingItem { kind: "event", .. }));
    }

    #[test]
    fn missing_propose_function_is_rejected() {
        let json = r#"[
            {"type":"event","name":"ProposalCreated","anonymous":false,"inputs":[]},
            {"type":"function","name":"state","inputs":[{"name":"id","type":"uint256"}],"outputs":[{"name":"","type":"uint8"}],"stateMutability":"view"}
        ]"#;
        let err = GovernorAbi::from_json(json).unwrap_err();
        assert!(err.to_string().contains("proposeAI"));
    }
}
