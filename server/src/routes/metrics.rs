//! `GET /v1/dao/metrics`: headline numbers; chain failures degrade instead of failing.

use axum::extract::State;

use crate::app::AppState;
use crate::envelope::Envelope;
use crate::extract::ValidQuery;
use crate::model::{DaoQuery, MetricsSnapshot};

const METRICS_FROM_BLOCK: i64 = -5000;
const METRICS_LIMIT: usize = 100;

pub async fn metrics(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<DaoQuery>,
) -> Envelope<MetricsSnapshot> {
    match state
        .adapter
        .list_proposals(&query.dao, METRICS_FROM_BLOCK, METRICS_LIMIT)
        .await
    {
        Ok(page) => Envelope::ok(MetricsSnapshot::healthy(page.active_count())),
        Err(e) => {
            tracing::warn!(dao = %query.dao, error = %e, "metrics degraded");
            Envelope::with_message(MetricsSnapshot::degraded(), "degraded")
        }
    }
}
