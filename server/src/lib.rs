//! govgate-server: HTTP gateway over a Governor contract.
//!
//! # Routes
//! ```text
//! GET  /healthz
//! GET  /v1/dao/metrics?dao=<addr>
//! GET  /v1/dao/proposals?dao=<addr>&fromBlock=-5000&limit=20
//! GET  /v1/dao/proposals/{proposalId}?dao=<addr>
//! POST /v1/dao/simulate
//! ```
//!
//! Every `/v1` response body is an [`Envelope`] and is served with HTTP 200;
//! the envelope `code` carries the outcome.

pub mod app;
pub mod config;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod model;
pub mod routes;
pub mod telemetry;

pub use app::{cors_layer, router, AppState};
pub use config::Config;
pub use envelope::{ApiCode, Envelope};
pub use error::{GatewayError, ValidationError};
pub use telemetry::{init_tracing, LogConfig};
