use crate::error::SQLError;

/// A dynamically-typed SQL parameter or column value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

/// A row returned from a SQL query — column name to value.
#[derive(Debug, Clone)]
pub struct Row {
    pub columns: Vec<(String, Value)>,
}

impl Row {
    /// Get a column value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Get a text column by name. `NULL` columns yield `None`.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Value::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get an integer column by name. `NULL` columns yield `None`.
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(Value::Integer(i)) => Some(*i),
            _ => None,
        }
    }
}

/// A synchronous SQL store executing parameterized statements.
///
/// Statements use `?N` positional placeholders bound from `params`.
/// There is no transaction surface: each call is one statement, and
/// callers that sequence several statements get no atomicity across them.
pub trait SQLStore: Send + Sync {
    /// Run a SELECT, returning all rows.
    fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, SQLError>;

    /// Run a statement, returning the number of affected rows.
    fn exec(&self, sql: &str, params: &[Value]) -> Result<u64, SQLError>;

    /// Run a SELECT expected to yield at most one row.
    fn query_one(&self, sql: &str, params: &[Value]) -> Result<Option<Row>, SQLError> {
        Ok(self.query(sql, params)?.into_iter().next())
    }
}
