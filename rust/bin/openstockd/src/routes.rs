//! Route registration — module routes + system endpoints.

use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tracing::debug;

/// Build the complete router with all routes.
pub fn build_router(module_routes: Vec<(&str, Router)>) -> Router {
    let mut app = Router::new()
        .route("/health", get(health))
        .route("/version", get(version));

    // Module routers own their full paths; merge them at the root.
    for (name, router) in module_routes {
        debug!(module = name, "mounting routes");
        app = app.merge(router);
    }

    app
}

async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": "openstockd",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
