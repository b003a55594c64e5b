//! Unified API for browsing the wine catalog.

use std::fmt::Debug;

use log::*;

use crate::{
    api::catalog_objects::{WineDetails, WineFilter},
    db_types::{ReferenceEntity, ReferenceKind, Wine},
    traits::{CatalogApiError, CatalogManagement},
};

/// The `CatalogApi` provides a unified API for querying the wine catalog.
pub struct CatalogApi<B> {
    db: B,
}

impl<B: Debug> Debug for CatalogApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CatalogApi ({:?})", self.db)
    }
}

impl<B> CatalogApi<B>
where B: CatalogManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// Fetches all wines matching the given filter criteria. There is no pagination; the full
    /// result set is returned.
    pub async fn filter_wines(&self, filter: &WineFilter) -> Result<Vec<Wine>, CatalogApiError> {
        debug!("🍷️ Filtering wines. {filter}");
        let wines = self.db.fetch_wines(filter).await?;
        debug!("🍷️ Found {} wines matching the criteria", wines.len());
        Ok(wines)
    }

    /// Fetches the wine with the given id, failing with [`CatalogApiError::WineNotFound`] when no
    /// such wine exists.
    pub async fn wine_or_fail(&self, wine_id: i64) -> Result<Wine, CatalogApiError> {
        self.db.fetch_wine_by_id(wine_id).await?.ok_or_else(|| {
            warn!("🍷️ Wine with id {wine_id} not found");
            CatalogApiError::WineNotFound(wine_id)
        })
    }

    /// Fetches a wine together with its color, flavour, type and grape reference entities. The
    /// references are resolved with explicit id lookups rather than relationship navigation.
    pub async fn wine_details(&self, wine_id: i64) -> Result<WineDetails, CatalogApiError> {
        let wine = self.wine_or_fail(wine_id).await?;
        let color = self.reference_or_fail(ReferenceKind::Color, wine.color_id).await?;
        let flavour = self.reference_or_fail(ReferenceKind::Flavour, wine.flavour_id).await?;
        let wine_type = match wine.type_id {
            Some(id) => self.db.fetch_reference(ReferenceKind::WineType, id).await?,
            None => None,
        };
        let grape = match wine.grape_id {
            Some(id) => self.db.fetch_reference(ReferenceKind::Grape, id).await?,
            None => None,
        };
        trace!("🍷️ Loaded details for {}", wine.name);
        Ok(WineDetails { wine, color, flavour, wine_type, grape })
    }

    /// Lists all reference entities of the given kind, ordered by name. The storefront uses this
    /// to build the filter choices.
    pub async fn references(&self, kind: ReferenceKind) -> Result<Vec<ReferenceEntity>, CatalogApiError> {
        self.db.fetch_references(kind).await
    }

    // A wine's mandatory references are guaranteed by foreign keys; a miss here means the
    // catalog data itself is inconsistent.
    async fn reference_or_fail(&self, kind: ReferenceKind, id: i64) -> Result<ReferenceEntity, CatalogApiError> {
        self.db.fetch_reference(kind, id).await?.ok_or_else(|| {
            error!("🍷️ Missing {kind} record #{id}. The catalog references are inconsistent.");
            CatalogApiError::DatabaseError(format!("Missing {kind} record #{id}"))
        })
    }

    pub fn db(&self) -> &B {
        &self.db
    }
}
