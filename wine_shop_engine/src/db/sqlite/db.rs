use std::fmt::Debug;

use log::*;
use sqlx::SqlitePool;
use wss_common::Price;

use crate::{
    api::catalog_objects::WineFilter,
    db::sqlite::{baskets, db_url, new_pool, wines, SqliteDatabaseError},
    db_types::{Basket, BasketItem, ReferenceEntity, ReferenceKind, Wine},
    traits::{BasketApiError, BasketManagement, CatalogApiError, CatalogManagement},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    /// Creates a new database API object using the URL from `WSS_DATABASE_URL`, or the default.
    pub async fn new(max_connections: u32) -> Result<Self, SqliteDatabaseError> {
        let url = db_url();
        SqliteDatabase::new_with_url(url.as_str(), max_connections).await
    }

    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, SqliteDatabaseError> {
        trace!("Creating new database connection pool with url {url}");
        let pool = new_pool(url, max_connections).await?;
        let url = url.to_string();
        Ok(Self { url, pool })
    }

    /// The URL of the database.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Returns a reference to the database connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Brings the schema up to date. Called once at server startup.
    pub async fn run_migrations(&self) -> Result<(), SqliteDatabaseError> {
        sqlx::migrate!("./src/db/sqlite/migrations")
            .run(&self.pool)
            .await
            .map_err(|e| SqliteDatabaseError::QueryError(e.to_string()))?;
        info!("🗃️ Database migrations complete");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl CatalogManagement for SqliteDatabase {
    async fn fetch_wines(&self, filter: &WineFilter) -> Result<Vec<Wine>, CatalogApiError> {
        let mut conn = self.pool.acquire().await?;
        let wines = wines::fetch_wines(filter, &mut conn).await?;
        Ok(wines)
    }

    async fn fetch_wine_by_id(&self, wine_id: i64) -> Result<Option<Wine>, CatalogApiError> {
        let mut conn = self.pool.acquire().await?;
        let wine = wines::fetch_wine_by_id(wine_id, &mut conn).await?;
        Ok(wine)
    }

    async fn fetch_reference(
        &self,
        kind: ReferenceKind,
        id: i64,
    ) -> Result<Option<ReferenceEntity>, CatalogApiError> {
        let mut conn = self.pool.acquire().await?;
        let entity = wines::fetch_reference(kind, id, &mut conn).await?;
        Ok(entity)
    }

    async fn fetch_references(&self, kind: ReferenceKind) -> Result<Vec<ReferenceEntity>, CatalogApiError> {
        let mut conn = self.pool.acquire().await?;
        let entities = wines::fetch_references(kind, &mut conn).await?;
        Ok(entities)
    }
}

impl BasketManagement for SqliteDatabase {
    async fn fetch_basket_by_session(&self, session_id: &str) -> Result<Option<Basket>, BasketApiError> {
        let mut conn = self.pool.acquire().await?;
        let basket = baskets::fetch_basket_by_session(session_id, &mut conn).await?;
        Ok(basket)
    }

    async fn create_basket(&self, session_id: &str) -> Result<Basket, BasketApiError> {
        let mut conn = self.pool.acquire().await?;
        let basket = baskets::insert_basket(session_id, &mut conn).await?;
        debug!("🗃️ Basket #{} has been saved in the DB for session {session_id}", basket.id);
        Ok(basket)
    }

    async fn delete_basket(&self, session_id: &str) -> Result<bool, BasketApiError> {
        let mut tx = self.pool.begin().await?;
        let basket = match baskets::fetch_basket_by_session(session_id, &mut tx).await? {
            Some(basket) => basket,
            None => return Ok(false),
        };
        baskets::delete_basket(basket.id, &mut tx).await?;
        tx.commit().await?;
        debug!("🗃️ Basket #{} and its line items have been deleted", basket.id);
        Ok(true)
    }

    async fn reassign_basket_session(
        &self,
        old_session_id: &str,
        new_session_id: &str,
    ) -> Result<bool, BasketApiError> {
        let mut conn = self.pool.acquire().await?;
        let moved = baskets::update_session_id(old_session_id, new_session_id, &mut conn).await?;
        Ok(moved > 0)
    }

    /// Takes a quantity delta for a (basket, wine) pair, and in a single atomic transaction,
    /// * resolves the basket and the wine,
    /// * creates the line item, or adds the delta to the existing item's quantity,
    /// * verifies the resulting quantity against the wine's current stock quantity,
    /// * stores line price = unit price × resulting quantity.
    ///
    /// If the stock check fails, the transaction is rolled back and nothing is persisted.
    async fn upsert_basket_item(
        &self,
        session_id: &str,
        wine_id: i64,
        qty: i64,
    ) -> Result<BasketItem, BasketApiError> {
        let mut tx = self.pool.begin().await?;
        let basket = baskets::fetch_basket_by_session(session_id, &mut tx)
            .await?
            .ok_or_else(|| BasketApiError::BasketNotFound(session_id.to_string()))?;
        let wine = wines::fetch_wine_by_id(wine_id, &mut tx)
            .await?
            .ok_or(BasketApiError::WineNotFound(wine_id))?;
        let existing = baskets::fetch_basket_item(basket.id, wine_id, &mut tx).await?;
        let new_qty = existing.as_ref().map(|item| item.quantity).unwrap_or_default() + qty;
        if new_qty > wine.stock_quantity {
            warn!("🗃️ Cannot add more than available stock. Wine: {}", wine.name);
            return Err(BasketApiError::InsufficientStock {
                wine: wine.name,
                requested: new_qty,
                available: wine.stock_quantity,
            });
        }
        let line_price = wine.price * new_qty;
        let item = match existing {
            Some(item) => baskets::update_basket_item(item.id, new_qty, line_price, &mut tx).await?,
            None => baskets::insert_basket_item(basket.id, wine_id, new_qty, line_price, &mut tx).await?,
        };
        tx.commit().await?;
        debug!("🗃️ {} is in basket #{} with quantity {new_qty} ({line_price})", wine.name, basket.id);
        Ok(item)
    }

    async fn update_basket_item_quantity(
        &self,
        session_id: &str,
        wine_id: i64,
        qty: i64,
    ) -> Result<BasketItem, BasketApiError> {
        let mut tx = self.pool.begin().await?;
        let basket = baskets::fetch_basket_by_session(session_id, &mut tx)
            .await?
            .ok_or_else(|| BasketApiError::BasketNotFound(session_id.to_string()))?;
        let wine = wines::fetch_wine_by_id(wine_id, &mut tx)
            .await?
            .ok_or(BasketApiError::WineNotFound(wine_id))?;
        let item = baskets::fetch_basket_item(basket.id, wine_id, &mut tx)
            .await?
            .ok_or_else(|| BasketApiError::ItemNotFound(wine.name.clone()))?;
        if qty > wine.stock_quantity {
            warn!(
                "🗃️ Cannot update basket item: Not enough stock. Wine: {} (Requested: {qty}, Available: {})",
                wine.name, wine.stock_quantity
            );
            return Err(BasketApiError::InsufficientStock {
                wine: wine.name,
                requested: qty,
                available: wine.stock_quantity,
            });
        }
        let item = baskets::update_basket_item(item.id, qty, wine.price * qty, &mut tx).await?;
        tx.commit().await?;
        debug!("🗃️ {} in basket #{} now has quantity {qty} ({})", wine.name, basket.id, item.price);
        Ok(item)
    }

    async fn delete_basket_item(&self, session_id: &str, wine_id: i64) -> Result<(), BasketApiError> {
        let mut tx = self.pool.begin().await?;
        let basket = baskets::fetch_basket_by_session(session_id, &mut tx)
            .await?
            .ok_or_else(|| BasketApiError::BasketNotFound(session_id.to_string()))?;
        let wine = wines::fetch_wine_by_id(wine_id, &mut tx)
            .await?
            .ok_or(BasketApiError::WineNotFound(wine_id))?;
        let deleted = baskets::delete_basket_item(basket.id, wine_id, &mut tx).await?;
        if deleted == 0 {
            return Err(BasketApiError::ItemNotFound(wine.name));
        }
        tx.commit().await?;
        debug!("🗃️ {} has been removed from basket #{}", wine.name, basket.id);
        Ok(())
    }

    async fn fetch_basket_items(&self, session_id: &str) -> Result<Vec<BasketItem>, BasketApiError> {
        let mut conn = self.pool.acquire().await?;
        let basket = baskets::fetch_basket_by_session(session_id, &mut conn)
            .await?
            .ok_or_else(|| BasketApiError::BasketNotFound(session_id.to_string()))?;
        let items = baskets::fetch_items_for_basket(basket.id, &mut conn).await?;
        Ok(items)
    }

    async fn fetch_basket_total(&self, session_id: &str) -> Result<Price, BasketApiError> {
        let mut conn = self.pool.acquire().await?;
        let basket = baskets::fetch_basket_by_session(session_id, &mut conn)
            .await?
            .ok_or_else(|| BasketApiError::BasketNotFound(session_id.to_string()))?;
        let total = baskets::basket_total(basket.id, &mut conn).await?;
        Ok(total)
    }
}
