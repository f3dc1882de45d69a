use axum::extract::State;
use govgate_governor::{ProposalDetail, ProposalSummary};

use crate::app::AppState;
use crate::envelope::Envelope;
use crate::error::{GatewayError, ValidationError};
use crate::extract::{ProposalIdPath, ValidQuery};
use crate::model::{DaoQuery, ProposalsQuery, MAX_LIMIT};

/// `GET /v1/dao/proposals`
pub async fn list(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ProposalsQuery>,
) -> Result<Envelope<Vec<ProposalSummary>>, ValidationError> {
    if !(1..=MAX_LIMIT).contains(&query.limit) {
        return Err(ValidationError::new(format!(
            "limit must be between 1 and {MAX_LIMIT}, got {}",
            query.limit
        )));
    }

    let result = state
        .adapter
        .list_proposals(&query.dao, query.from_block, query.limit as usize)
        .await;
    Ok(match result {
        Ok(page) => Envelope::ok(page.proposals),
        Err(e) => {
            let err = GatewayError::ChainRead(e);
            tracing::warn!(dao = %query.dao, error = %err, "proposal listing failed");
            Envelope::failure(&err, Vec::new())
        }
    })
}

/// `GET /v1/dao/proposals/{proposalId}`
pub async fn detail(
    State(state): State<AppState>,
    ProposalIdPath(proposal_id): ProposalIdPath,
    ValidQuery(query): ValidQuery<DaoQuery>,
) -> Envelope<Option<ProposalDetail>> {
    match state
        .adapter
        .get_proposal_detail(&query.dao, proposal_id)
        .await
    {
        Ok(detail) => Envelope::ok(Some(detail)),
        Err(e) => {
            let err = GatewayError::ChainRead(e);
            tracing::warn!(dao = %query.dao, %proposal_id, error = %err, "proposal detail failed");
            Envelope::failure(&err, None)
        }
    }
}
