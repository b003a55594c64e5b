use thiserror::Error;

use crate::traits::{BasketApiError, CatalogApiError};

#[derive(Debug, Error)]
pub enum SqliteDatabaseError {
    #[error("Database connection error: {0}")]
    DriverError(#[from] sqlx::Error),
    #[error("Database query error: {0}")]
    QueryError(String),
}

impl From<SqliteDatabaseError> for CatalogApiError {
    fn from(e: SqliteDatabaseError) -> Self {
        CatalogApiError::DatabaseError(e.to_string())
    }
}

impl From<SqliteDatabaseError> for BasketApiError {
    fn from(e: SqliteDatabaseError) -> Self {
        BasketApiError::DatabaseError(e.to_string())
    }
}
