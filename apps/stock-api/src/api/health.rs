//! Readiness endpoint backed by a database ping

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use database::postgres::{DatabaseConnection, check_health};
use serde::Serialize;

#[derive(Serialize)]
struct ReadyResponse {
    status: &'static str,
}

async fn ready(State(db): State<DatabaseConnection>) -> (StatusCode, Json<ReadyResponse>) {
    match check_health(&db).await {
        Ok(()) => (StatusCode::OK, Json(ReadyResponse { status: "ready" })),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyResponse {
                    status: "unavailable",
                }),
            )
        }
    }
}

pub fn router(db: DatabaseConnection) -> Router {
    Router::new().route("/ready", get(ready)).with_state(db)
}
