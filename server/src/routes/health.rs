use axum::Json;

use crate::model::Health;

pub async fn healthz() -> Json<Health> {
    Json(Health {
        status: "ok",
        ts: chrono::Utc::now().timestamp(),
    })
}
