//! Router-level tests against a scripted chain.

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use govgate_abi::{AbiValue, Address, JsonAbi, U256};
use govgate_governor::{AllowList, GovernorAbi, GovernorAdapter, GovernorConfig};
use govgate_rpc::{ChainClient, ChainError, LogFilter, RawLog, RpcError};
use govgate_server::{cors_layer, router, AppState};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

const SHIPPED: &str = include_str!("../../abi/AIProposalGovernor.json");
const DAO: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
const ABC: &str = "0xabc0000000000000000000000000000000000001";
const DEF: &str = "0xdef0000000000000000000000000000000000002";

#[derive(Default)]
struct FakeChain {
    down: bool,
    state_code: u64,
    gas: u64,
    calls: AtomicUsize,
}

impl FakeChain {
    fn down() -> Self {
        Self {
            down: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), RpcError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.down {
            Err(RpcError::Http("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ChainClient for FakeChain {
    async fn current_block_number(&self) -> Result<u64, RpcError> {
        self.check()?;
        Ok(1_000)
    }

    async fn get_logs(&self, _filter: &LogFilter) -> Result<Vec<RawLog>, RpcError> {
        self.check()?;
        Ok(Vec::new())
    }

    async fn call(
        &self,
        _to: Address,
        _abi: &JsonAbi,
        _function_name: &str,
        _args: &[AbiValue],
    ) -> Result<Vec<AbiValue>, ChainError> {
        self.check()?;
        Ok(vec![AbiValue::Uint(U256::from(self.state_code))])
    }

    async fn estimate_gas(
        &self,
        _from: Address,
        _to: Address,
        _data: &[u8],
        _value: U256,
    ) -> Result<u64, RpcError> {
        self.check()?;
        Ok(self.gas)
    }
}

fn app(chain: Arc<FakeChain>, allowed: &str) -> Router {
    let config = GovernorConfig::new(
        GovernorAbi::from_json(SHIPPED).unwrap(),
        AllowList::parse(allowed).unwrap(),
        DAO.parse().unwrap(),
    );
    let adapter = GovernorAdapter::new(chain, config);
    router(AppState::new(adapter), cors_layer("*").unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let resp = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read(resp).await
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    read(app.oneshot(req).await.unwrap()).await
}

async fn read(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn simulate_body(target: &str) -> Value {
    json!({
        "title": "Grant",
        "description": "Fund the round",
        "fundAmountWei": "1000",
        "target": target
    })
}

#[tokio::test]
async fn healthz_reports_ok() {
    let (status, body) = get(app(Arc::default(), ""), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["ts"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn metrics_degrade_when_chain_is_down() {
    let (status, body) = get(
        app(Arc::new(FakeChain::down()), ""),
        &format!("/v1/dao/metrics?dao={DAO}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["message"], "degraded");
    assert_eq!(body["data"]["degraded"], true);
    assert_eq!(body["data"]["activeProposals"], 0);
    assert_eq!(body["data"]["supply"], "0");
}

#[tokio::test]
async fn metrics_ok_with_no_proposals() {
    let (_, body) = get(app(Arc::default(), ""), &format!("/v1/dao/metrics?dao={DAO}")).await;
    assert_eq!(body["message"], "ok");
    assert_eq!(body["data"]["degraded"], false);
}

#[tokio::test]
async fn proposal_list_failure_is_50001_with_empty_data() {
    let (status, body) = get(
        app(Arc::new(FakeChain::down()), ""),
        &format!("/v1/dao/proposals?dao={DAO}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 50001);
    assert_eq!(body["data"], json!([]));
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("CHAIN_RPC_FAIL: "));
    assert!(message.contains("connection refused"));
}

#[tokio::test]
async fn proposal_list_validates_query() {
    let chain = Arc::new(FakeChain::default());
    for uri in [
        "/v1/dao/proposals".to_string(),
        format!("/v1/dao/proposals?dao={DAO}&limit=0"),
        format!("/v1/dao/proposals?dao={DAO}&limit=201"),
        format!("/v1/dao/proposals?dao={DAO}&fromBlock=tip"),
    ] {
        let (status, body) = get(app(chain.clone(), ""), &uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert!(body["detail"].is_string(), "{uri}");
    }
    assert_eq!(chain.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn proposal_detail_maps_state() {
    let chain = Arc::new(FakeChain {
        state_code: 4,
        ..Default::default()
    });
    let (_, body) = get(app(chain, ""), &format!("/v1/dao/proposals/7?dao={DAO}")).await;
    assert_eq!(body["code"], 0);
    assert_eq!(
        body["data"],
        json!({
            "id": "7",
            "title": "Proposal 7",
            "description": "Refer to on-chain description.",
            "actions": [],
            "state": "Succeeded"
        })
    );
}

#[tokio::test]
async fn proposal_detail_failure_has_null_data() {
    let (_, body) = get(
        app(Arc::new(FakeChain::down()), ""),
        &format!("/v1/dao/proposals/7?dao={DAO}"),
    )
    .await;
    assert_eq!(body["code"], 50001);
    assert_eq!(body["data"], Value::Null);
    assert!(body["message"].as_str().unwrap().starts_with("CHAIN_RPC_FAIL: "));
}

#[tokio::test]
async fn proposal_detail_rejects_non_integer_id() {
    let (status, _) = get(app(Arc::default(), ""), &format!("/v1/dao/proposals/abc?dao={DAO}")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn simulate_rejects_target_outside_allow_list_without_chain_calls() {
    let chain = Arc::new(FakeChain::default());
    let (status, body) = post_json(app(chain.clone(), ABC), "/v1/dao/simulate", simulate_body(DEF)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"code": 40001, "data": null, "message": "target/value failed policy checks"})
    );
    assert_eq!(chain.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn simulate_returns_calldata_and_gas() {
    let chain = Arc::new(FakeChain {
        gas: 123_456,
        ..Default::default()
    });
    let (_, body) = post_json(app(chain.clone(), ABC), "/v1/dao/simulate", simulate_body(ABC)).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["message"], "ok");
    let data = &body["data"];
    assert!(data["calldata"].as_str().unwrap().starts_with("0x"));
    assert_eq!(data["value"], "0");
    assert_eq!(data["gasEstimate"], 123_456);
    assert_eq!(data["checks"], json!({"paused": false, "budgetOk": true, "targetOk": true}));
    assert_eq!(data["warnings"], json!([]));
    // only the gas estimate touches the chain
    assert_eq!(chain.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn simulate_failures_are_50002() {
    let (_, body) = post_json(
        app(Arc::new(FakeChain::down()), ""),
        "/v1/dao/simulate",
        simulate_body(ABC),
    )
    .await;
    assert_eq!(body["code"], 50002);
    assert_eq!(body["data"], Value::Null);
    assert!(body["message"].as_str().unwrap().starts_with("SIMULATION_FAIL: "));

    let mut bad_fund = simulate_body(ABC);
    bad_fund["fundAmountWei"] = json!("ten");
    let chain = Arc::new(FakeChain::default());
    let (_, body) = post_json(app(chain.clone(), ""), "/v1/dao/simulate", bad_fund).await;
    assert_eq!(body["code"], 50002);
    assert_eq!(chain.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn simulate_rejects_malformed_body() {
    let (status, body) = post_json(
        app(Arc::default(), ""),
        "/v1/dao/simulate",
        json!({"title": "missing the rest"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn cors_mirrors_origin_with_credentials() {
    let req = Request::get("/healthz")
        .header(header::ORIGIN, "https://app.example.org")
        .body(Body::empty())
        .unwrap();
    let resp = app(Arc::default(), "").oneshot(req).await.unwrap();
    let headers = resp.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://app.example.org"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}
