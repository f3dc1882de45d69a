//! `govgate`: serve the governance gateway.
//!
//! ```bash
//! RPC_URL=https://rpc.example.org DAO_ADDRESS=0x... govgate --bind 0.0.0.0:8000
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use govgate_abi::checksum;
use govgate_governor::{AllowList, GovernorAbi, GovernorAdapter, GovernorConfig};
use govgate_rpc::{HttpTransport, JsonRpcChainClient};
use govgate_server::{cors_layer, init_tracing, router, AppState, Config};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(&config.log_config());

    let abi_json = std::fs::read_to_string(&config.abi_path)
        .with_context(|| format!("reading governor ABI from {}", config.abi_path.display()))?;
    let abi = GovernorAbi::from_json(&abi_json)
        .with_context(|| format!("loading governor ABI {}", config.abi_path.display()))?;
    let allow_list =
        AllowList::parse(&config.allowed_targets).context("parsing ALLOWED_TARGETS")?;
    let default_dao = checksum(&config.dao_address).context("parsing DAO_ADDRESS")?;

    let transport = HttpTransport::new(
        config.rpc_url.clone(),
        Duration::from_secs(config.rpc_timeout_secs),
    )
    .context("building RPC transport")?;
    let chain = Arc::new(JsonRpcChainClient::new(transport));

    let allowed_targets = allow_list.len();
    let adapter = GovernorAdapter::new(chain, GovernorConfig::new(abi, allow_list, default_dao));
    let cors = cors_layer(&config.frontend_origin).context("parsing FRONTEND_ORIGIN")?;
    let app = router(AppState::new(adapter), cors);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    tracing::info!(
        bind = %config.bind,
        rpc_url = %config.rpc_url,
        default_dao = %default_dao,
        allowed_targets,
        "govgate listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server failed")?;
    tracing::info!("govgate stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "cannot listen for ctrl-c; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
