// handlers/mod.rs - HTTP handlers
//
// Public: /, /health, /api/Auth/Login
// Protected (JWT gate): /api/Auth/WhoAmI and every resource route

pub mod auth;
pub mod resources;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{json, Value};

use crate::app::AppState;

/// GET / - service information
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Inventory API",
        "version": version,
        "description": "Products, categories, inventory, marketplaces and expenses over PostgreSQL",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "login": "POST /api/Auth/Login (public - token acquisition)",
            "whoami": "GET /api/Auth/WhoAmI (protected)",
            "products": "/Products/* (protected)",
            "categories": "/Categories/* (protected)",
            "inventory": "/Inventory/* (protected)",
            "marketplaces": "/Marketplaces/* (protected)",
            "expenses": "/Expenses/* (protected)",
        }
    }))
}

/// GET /health - opens a connection and pings the database
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.database.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
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
