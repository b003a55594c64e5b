use thiserror::Error;

use crate::{
    api::catalog_objects::WineFilter,
    db_types::{ReferenceEntity, ReferenceKind, Wine},
};

#[derive(Debug, Clone, Error)]
pub enum CatalogApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("No wine with id {0} exists")]
    WineNotFound(i64),
}

impl From<sqlx::Error> for CatalogApiError {
    fn from(e: sqlx::Error) -> Self {
        CatalogApiError::DatabaseError(e.to_string())
    }
}

/// The `CatalogManagement` trait defines behaviour for querying the wine catalog.
///
/// The catalog is read-only from the storefront's point of view. Reference entities (colors,
/// flavours, wine types, grape varieties) are resolved with explicit id lookups rather than
/// relationship navigation, so backends never need to hydrate object graphs.
#[allow(async_fn_in_trait)]
pub trait CatalogManagement {
    /// Fetches all wines matching the filter. An empty filter matches every wine.
    async fn fetch_wines(&self, filter: &WineFilter) -> Result<Vec<Wine>, CatalogApiError>;

    /// Fetches the wine with the given id. If no such wine exists, `None` is returned.
    async fn fetch_wine_by_id(&self, wine_id: i64) -> Result<Option<Wine>, CatalogApiError>;

    /// Fetches a single reference entity by kind and id. If no such row exists, `None` is
    /// returned.
    async fn fetch_reference(
        &self,
        kind: ReferenceKind,
        id: i64,
    ) -> Result<Option<ReferenceEntity>, CatalogApiError>;

    /// Fetches all reference entities of the given kind, ordered by name.
    async fn fetch_references(&self, kind: ReferenceKind) -> Result<Vec<ReferenceEntity>, CatalogApiError>;
}
