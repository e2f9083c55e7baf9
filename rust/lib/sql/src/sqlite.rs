use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use rusqlite::types::ValueRef;
use rusqlite::Connection;

use crate::error::SQLError;
use crate::traits::{Row, SQLStore, Value};

/// SqliteStore is a SQLStore implementation backed by rusqlite
/// (bundled SQLite). The connection is serialized behind a mutex;
/// each statement holds it only for its own duration.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create a SQLite database at the given path.
    pub fn open(path: &Path) -> Result<Self, SQLError> {
        let conn = Connection::open(path).map_err(|e| SQLError::Open(e.to_string()))?;

        // WAL mode for concurrent readers; wait out writer contention
        // instead of failing immediately with SQLITE_BUSY.
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|e| SQLError::Open(e.to_string()))?;
        conn.busy_timeout(Duration::from_secs(5))
            .map_err(|e| SQLError::Open(e.to_string()))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory SQLite database (useful for tests).
    pub fn open_in_memory() -> Result<Self, SQLError> {
        let conn = Connection::open_in_memory().map_err(|e| SQLError::Open(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

/// Convert our Value enum to rusqlite's ToSql.
fn bind_params(params: &[Value]) -> Vec<Box<dyn rusqlite::types::ToSql + '_>> {
    params
        .iter()
        .map(|v| -> Box<dyn rusqlite::types::ToSql + '_> {
            match v {
                Value::Null => Box::new(rusqlite::types::Null),
                Value::Integer(i) => Box::new(*i),
                Value::Real(f) => Box::new(*f),
                Value::Text(s) => Box::new(s.as_str()),
                Value::Blob(b) => Box::new(b.as_slice()),
            }
        })
        .collect()
}

/// Read the raw column value at an index without driver-side coercion.
fn column_value(row: &rusqlite::Row, idx: usize) -> Value {
    match row.get_ref(idx) {
        Ok(ValueRef::Integer(i)) => Value::Integer(i),
        Ok(ValueRef::Real(f)) => Value::Real(f),
        Ok(ValueRef::Text(t)) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        Ok(ValueRef::Blob(b)) => Value::Blob(b.to_vec()),
        Ok(ValueRef::Null) | Err(_) => Value::Null,
    }
}

impl SQLStore for SqliteStore {
    fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, SQLError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| SQLError::Query(e.to_string()))?;

        let bound = bind_params(params);
        let param_refs: Vec<&dyn rusqlite::types::ToSql> =
            bound.iter().map(|b| b.as_ref()).collect();

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| SQLError::Query(e.to_string()))?;

        let column_names: Vec<String> = stmt
            .column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let rows = stmt
            .query_map(param_refs.as_slice(), |row| {
                let columns = column_names
                    .iter()
                    .enumerate()
                    .map(|(i, name)| (name.clone(), column_value(row, i)))
                    .collect();
                Ok(Row { columns })
            })
            .map_err(|e| SQLError::Query(e.to_string()))?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row.map_err(|e| SQLError::Query(e.to_string()))?);
        }
        Ok(result)
    }

    fn exec(&self, sql: &str, params: &[Value]) -> Result<u64, SQLError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| SQLError::Exec(e.to_string()))?;

        let bound = bind_params(params);
        let param_refs: Vec<&dyn rusqlite::types::ToSql> =
            bound.iter().map(|b| b.as_ref()).collect();

        let affected = conn
            .execute(sql, param_refs.as_slice())
            .map_err(|e| SQLError::Exec(e.to_string()))?;

        Ok(affected as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .exec(
                "CREATE TABLE items (id INTEGER PRIMARY KEY, name TEXT, note TEXT)",
                &[],
            )
            .unwrap();
        store
    }

    #[test]
    fn test_exec_and_query() {
        let store = test_store();

        let affected = store
            .exec(
                "INSERT INTO items (name, note) VALUES (?1, ?2)",
                &[Value::Text("widget".into()), Value::Null],
            )
            .unwrap();
        assert_eq!(affected, 1);

        let rows = store.query("SELECT id, name, note FROM items", &[]).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get_i64("id"), Some(1));
        assert_eq!(rows[0].get_str("name"), Some("widget"));
        assert_eq!(rows[0].get("note"), Some(&Value::Null));
        assert_eq!(rows[0].get_str("note"), None);
    }

    #[test]
    fn test_query_one() {
        let store = test_store();
        assert!(store
            .query_one("SELECT id FROM items WHERE id = ?1", &[Value::Integer(1)])
            .unwrap()
            .is_none());

        store
            .exec(
                "INSERT INTO items (name) VALUES (?1)",
                &[Value::Text("a".into())],
            )
            .unwrap();
        let row = store
            .query_one("SELECT COUNT(id) AS cnt FROM items", &[])
            .unwrap()
            .unwrap();
        assert_eq!(row.get_i64("cnt"), Some(1));
    }

    #[test]
    fn test_bad_sql_is_an_error() {
        let store = test_store();
        assert!(store.query("SELECT nope FROM missing", &[]).is_err());
        assert!(store.exec("INSERT INTO missing VALUES (1)", &[]).is_err());
    }
}
