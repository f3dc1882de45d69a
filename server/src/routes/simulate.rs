//! `POST /v1/dao/simulate`: policy checks, calldata and a gas estimate. Nothing is sent.

use axum::extract::State;
use govgate_abi::U256;
use govgate_governor::GovernorAdapter;

use crate::app::AppState;
use crate::envelope::Envelope;
use crate::error::GatewayError;
use crate::extract::ValidJson;
use crate::model::{SimulateRequest, SimulationResult};

pub async fn simulate(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<SimulateRequest>,
) -> Envelope<Option<SimulationResult>> {
    match run(&state.adapter, req).await {
        Ok(result) => Envelope::ok(Some(result)),
        Err(err) => {
            tracing::warn!(error = %err, "simulation rejected");
            Envelope::failure(&err, None)
        }
    }
}

async fn run(
    adapter: &GovernorAdapter,
    req: SimulateRequest,
) -> Result<SimulationResult, GatewayError> {
    // proposal value is always zero
    let checks = adapter.run_policy_checks(&req.target, U256::ZERO);
    if !checks.passed() {
        return Err(GatewayError::PolicyRejected);
    }

    let dao = match req.dao.as_deref().map(str::trim) {
        Some(dao) if !dao.is_empty() => dao.to_string(),
        _ => adapter.config().default_dao.to_checksum(None),
    };

    let calldata = adapter
        .encode_propose_calldata(
            &req.title,
            &req.description,
            &req.fund_amount_wei,
            &req.target,
            &dao,
        )
        .map_err(GatewayError::Simulation)?;
    let gas_estimate = adapter
        .estimate_simulation_gas(&req.from_address, &dao, &calldata, U256::ZERO)
        .await
        .map_err(GatewayError::Simulation)?;

    tracing::debug!(dao = %dao, gas_estimate, "simulation ok");
    Ok(SimulationResult {
        calldata,
        value: "0".into(),
        gas_estimate,
        checks,
        warnings: Vec::new(),
    })
}
