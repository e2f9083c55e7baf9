pub mod product;
pub mod schema;

use std::sync::Arc;

use openstock_core::ServiceError;
use openstock_sql::{Row, SQLStore};

use crate::model::Product;

pub use product::ProductPatch;

/// Inventory service — business logic over the SQL store.
///
/// The store handle is injected at construction; handlers share the
/// service behind an `Arc` and keep no other state between requests.
pub struct InventoryService {
    pub(crate) sql: Arc<dyn SQLStore>,
}

impl InventoryService {
    pub fn new(sql: Arc<dyn SQLStore>) -> Result<Self, ServiceError> {
        schema::init_schema(sql.as_ref())?;
        Ok(Self { sql })
    }
}

/// Map a `products` row into a Product.
pub(crate) fn product_from_row(row: &Row) -> Result<Product, ServiceError> {
    Ok(Product {
        pid: row
            .get_i64("pid")
            .ok_or_else(|| ServiceError::Internal("products row missing pid".into()))?,
        barcode: row.get_str("barcode").unwrap_or_default().to_string(),
        quantity: row.get_i64("quantity").unwrap_or(0),
        title: row.get_str("title").map(str::to_string),
        comment: row.get_str("comment").map(str::to_string),
    })
}
