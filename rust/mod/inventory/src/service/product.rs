use openstock_core::normalize::{clamp_quantity, sanitize_text, scan_quantity};
use openstock_core::ServiceError;
use openstock_sql::Value;
use tracing::info;

use super::{product_from_row, InventoryService};
use crate::model::{Product, ScanOutcome};

/// Optional fields accepted by the update operation. Omitted fields
/// keep their stored values.
#[derive(Debug, Default, Clone)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub comment: Option<String>,
    pub quantity: Option<i64>,
}

fn opt_text(value: &Option<String>) -> Value {
    match value {
        Some(s) => Value::Text(s.clone()),
        None => Value::Null,
    }
}

impl InventoryService {
    /// All products, ascending pid.
    pub fn list_products(&self) -> Result<Vec<Product>, ServiceError> {
        let rows = self
            .sql
            .query(
                "SELECT pid, barcode, quantity, title, comment FROM products ORDER BY pid",
                &[],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        rows.iter().map(product_from_row).collect()
    }

    /// Look up a product by pid. Absent rows are `Ok(None)`, not an error:
    /// the handler owns the not-found envelope.
    pub fn get_product(&self, pid: i64) -> Result<Option<Product>, ServiceError> {
        let row = self
            .sql
            .query_one(
                "SELECT pid, barcode, quantity, title, comment FROM products WHERE pid = ?1",
                &[Value::Integer(pid)],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        row.as_ref().map(product_from_row).transpose()
    }

    /// Upsert by barcode: insert a new row if none matches, otherwise
    /// increment the matching rows' quantity atomically in one UPDATE.
    ///
    /// The existence check and the following insert/update are separate
    /// statements with no transaction around them. Two concurrent scans of
    /// the same new barcode can both see count 0 and insert twice; later
    /// scans then increment every matching row. Known limitation.
    pub fn scan(&self, barcode: &str, quantity: Option<i64>) -> Result<ScanOutcome, ServiceError> {
        let quantity = scan_quantity(quantity);

        let count = self
            .sql
            .query_one(
                "SELECT COUNT(pid) AS cnt FROM products WHERE barcode = ?1",
                &[Value::Text(barcode.to_string())],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?
            .and_then(|row| row.get_i64("cnt"))
            .unwrap_or(0);

        if count == 0 {
            self.sql
                .exec(
                    "INSERT INTO products (quantity, barcode) VALUES (?1, ?2)",
                    &[Value::Integer(quantity), Value::Text(barcode.to_string())],
                )
                .map_err(|e| ServiceError::Storage(e.to_string()))?;
            info!(barcode, quantity, "product inserted");
            Ok(ScanOutcome::Inserted)
        } else {
            self.sql
                .exec(
                    "UPDATE products SET quantity = quantity + ?1 WHERE barcode = ?2",
                    &[Value::Integer(quantity), Value::Text(barcode.to_string())],
                )
                .map_err(|e| ServiceError::Storage(e.to_string()))?;
            info!(barcode, quantity, "quantity incremented");
            Ok(ScanOutcome::Updated)
        }
    }

    /// Merge the provided fields into the stored row and rewrite it.
    ///
    /// Text fields pass through sanitization; quantity clamps at 0. The
    /// UPDATE rewrites all three mutable columns, so omitted fields are
    /// written back unchanged. Absent pid → `Ok(None)`.
    pub fn update_product(
        &self,
        pid: i64,
        patch: ProductPatch,
    ) -> Result<Option<Product>, ServiceError> {
        let Some(mut product) = self.get_product(pid)? else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            product.title = Some(sanitize_text(&title));
        }
        if let Some(comment) = patch.comment {
            product.comment = Some(sanitize_text(&comment));
        }
        if let Some(quantity) = patch.quantity {
            product.quantity = clamp_quantity(quantity);
        }

        self.sql
            .exec(
                "UPDATE products SET quantity = ?1, comment = ?2, title = ?3 WHERE pid = ?4",
                &[
                    Value::Integer(product.quantity),
                    opt_text(&product.comment),
                    opt_text(&product.title),
                    Value::Integer(pid),
                ],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        info!(pid, "product updated");
        Ok(Some(product))
    }

    /// Delete every row, unconditionally.
    pub fn erase_all(&self) -> Result<(), ServiceError> {
        self.sql
            .exec("DELETE FROM products", &[])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        info!("all products erased");
        Ok(())
    }
}
