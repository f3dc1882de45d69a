use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use govgate_governor::GovernorAdapter;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes::{health, metrics, proposals, simulate};

/// Shared handler state. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub adapter: Arc<GovernorAdapter>,
}

impl AppState {
    pub fn new(adapter: GovernorAdapter) -> Self {
        Self {
            adapter: Arc::new(adapter),
        }
    }
}

/// CORS for `origin` with credentials allowed.
///
/// `*` mirrors the caller's origin, since a literal wildcard cannot be
/// combined with credentials.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let allow_origin = if origin.trim() == "*" {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::exact(HeaderValue::from_str(origin.trim())?)
    };
    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

pub fn router(state: AppState, cors: CorsLayer) -> Router {
    let dao = Router::new()
        .route("/metrics", get(metrics::metrics))
        .route("/proposals", get(proposals::list))
        .route("/proposals/:proposal_id", get(proposals::detail))
        .route("/simulate", post(simulate::simulate));

    Router::new()
        .route("/healthz", get(health::healthz))
        .nest("/v1/dao", dao)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
