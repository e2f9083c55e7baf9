pub mod product;

use std::sync::Arc;

use axum::Router;

use crate::service::InventoryService;

/// Shared handler state.
pub type AppState = Arc<InventoryService>;

/// Build the inventory API router.
///
/// Routes carry their full paths (`/products`, `/scan`, ...) — the server
/// merges this router at the root rather than nesting it under a prefix.
pub fn router(state: AppState) -> Router {
    product::routes().with_state(state)
}
