use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - service description
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Storefront Admin API",
        "version": version,
        "endpoints": {
            "stores": "/api/stores[/:storeId] (owner only)",
            "billboards": "/api/:storeId/billboards[/:billboardId] (reads public, writes owner only)",
            "categories": "/api/:storeId/categories[/:categoryId] (reads public, writes owner only)",
            "health": "/health",
        }
    }))
}

/// GET /health - datastore liveness
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.datastore.ping().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}
