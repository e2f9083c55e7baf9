use thiserror::Error;

#[derive(Error, Debug)]
pub enum SQLError {
    #[error("failed to open database: {0}")]
    Open(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("statement failed: {0}")]
    Exec(String),
}
