pub mod api;
pub mod model;
pub mod service;

use std::sync::Arc;

use axum::Router;
use openstock_core::Module;

use service::InventoryService;

/// Inventory module — product stock tracking by barcode scan.
pub struct InventoryModule {
    service: Arc<InventoryService>,
}

impl InventoryModule {
    pub fn new(service: InventoryService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl Module for InventoryModule {
    fn name(&self) -> &str {
        "inventory"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }
}
