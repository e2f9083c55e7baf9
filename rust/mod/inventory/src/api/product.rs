use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use openstock_core::normalize::coerce_i64;
use openstock_core::ServiceError;

use super::AppState;
use crate::service::ProductPatch;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/erase", get(erase_products))
        .route("/product/{pid}", get(get_product).post(update_product))
        .route("/scan", put(scan))
}

// Response bodies carry an application-level `status` field: 0 for
// success, nonzero otherwise. Only the get/update not-found cases leave
// HTTP 200 — and those two disagree about `status` (1 vs 0), which is
// part of the wire contract.

async fn list_products(State(svc): State<AppState>) -> Result<Response, ServiceError> {
    info!("list products");
    let products = svc.list_products()?;
    Ok(Json(json!({"status": 0, "products": products})).into_response())
}

async fn get_product(
    State(svc): State<AppState>,
    Path(pid): Path<u64>,
) -> Result<Response, ServiceError> {
    info!(pid, "get product");
    match svc.get_product(pid as i64)? {
        Some(product) => Ok(Json(json!({"status": 0, "product": product})).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({"status": 1, "msg": "unknown"})),
        )
            .into_response()),
    }
}

#[derive(Debug, Deserialize)]
struct ScanBody {
    #[serde(default)]
    barcode: Option<String>,
    #[serde(default)]
    quantity: Option<serde_json::Value>,
}

async fn scan(
    State(svc): State<AppState>,
    Json(body): Json<ScanBody>,
) -> Result<Response, ServiceError> {
    let barcode = body.barcode.unwrap_or_default();
    if barcode.is_empty() {
        // Rejected in the body, not the HTTP status.
        return Ok(Json(json!({"status": 1, "msg": "Empty barcode"})).into_response());
    }

    let quantity = body.quantity.as_ref().and_then(coerce_i64);
    info!(%barcode, "scan");
    let outcome = svc.scan(&barcode, quantity)?;
    Ok(Json(json!({"status": 0, "msg": outcome.code()})).into_response())
}

#[derive(Debug, Deserialize)]
struct UpdateBody {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default)]
    quantity: Option<serde_json::Value>,
}

async fn update_product(
    State(svc): State<AppState>,
    Path(pid): Path<u64>,
    Json(body): Json<UpdateBody>,
) -> Result<Response, ServiceError> {
    info!(pid, "update product");
    let patch = ProductPatch {
        title: body.title,
        comment: body.comment,
        quantity: body.quantity.as_ref().and_then(coerce_i64),
    };
    match svc.update_product(pid as i64, patch)? {
        Some(product) => Ok(Json(json!({"status": 0, "product": product})).into_response()),
        // Unlike get, the update envelope keeps status 0 on not-found.
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({"status": 0, "msg": "unknown"})),
        )
            .into_response()),
    }
}

async fn erase_products(State(svc): State<AppState>) -> Json<serde_json::Value> {
    info!("erase all products");
    match svc.erase_all() {
        Ok(()) => Json(json!({"status": 0})),
        Err(err) => {
            // The one operation that reports store failure in the body.
            warn!(%err, "erase failed");
            Json(json!({"status": 1}))
        }
    }
}
