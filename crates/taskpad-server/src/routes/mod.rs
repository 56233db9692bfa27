mod comments;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use taskpad_service::LocalService;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub struct InnerAppState {
    pub service: LocalService,
}

pub type AppState = Arc<InnerAppState>;

/// Assemble the comment API router. Authentication sits in front of this
/// router upstream; everything here assumes the caller is already authorized
/// for the account in the path.
pub fn build_router(service: LocalService) -> Router {
    let state: AppState = Arc::new(InnerAppState { service });

    Router::new()
        .route("/api/health", get(health))
        .merge(comments::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
