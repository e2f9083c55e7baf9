use openstock_core::ServiceError;
use openstock_sql::SQLStore;

/// SQL DDL statements to initialize the inventory schema.
///
/// `barcode` gets a lookup index for the scan path but no UNIQUE
/// constraint: barcode uniqueness is handler logic, and the scan
/// check-then-act sequence can legitimately leave duplicates (see the
/// note on [`super::InventoryService::scan`]).
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS products (
        pid INTEGER PRIMARY KEY AUTOINCREMENT,
        barcode TEXT NOT NULL,
        quantity INTEGER NOT NULL DEFAULT 0,
        title TEXT,
        comment TEXT
    )",
    "CREATE INDEX IF NOT EXISTS idx_products_barcode ON products(barcode)",
];

pub fn init_schema(sql: &dyn SQLStore) -> Result<(), ServiceError> {
    for stmt in SCHEMA {
        sql.exec(stmt, &[])
            .map_err(|e| ServiceError::Storage(format!("schema init failed: {}", e)))?;
    }
    Ok(())
}
