use thiserror::Error;
use wss_common::Price;

use crate::db_types::{Basket, BasketItem};

#[derive(Debug, Clone, Error)]
pub enum BasketApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("No basket exists for session {0}")]
    BasketNotFound(String),
    #[error("No wine with id {0} exists")]
    WineNotFound(i64),
    #[error("{0} is not in the basket")]
    ItemNotFound(String),
    #[error("Not enough stock for {wine}. Requested {requested}, but only {available} left")]
    InsufficientStock { wine: String, requested: i64, available: i64 },
    #[error("{0} is not a valid quantity for a basket item")]
    InvalidQuantity(i64),
}

impl From<sqlx::Error> for BasketApiError {
    fn from(e: sqlx::Error) -> Self {
        BasketApiError::DatabaseError(e.to_string())
    }
}

/// The `BasketManagement` trait defines behaviour for storing baskets and reconciling their line
/// items against wine stock.
///
/// Every mutation runs as a single atomic read-check-write transaction in the backend, so
/// concurrent mutations to the same (basket, wine) pair are serialized by the storage layer's
/// transaction isolation rather than by application-level locking. A failed mutation leaves no
/// partial state behind.
#[allow(async_fn_in_trait)]
pub trait BasketManagement {
    /// Fetches the basket for the given session token. If no basket exists, `None` is returned.
    async fn fetch_basket_by_session(&self, session_id: &str) -> Result<Option<Basket>, BasketApiError>;

    /// Creates and persists a new, empty basket for the session.
    async fn create_basket(&self, session_id: &str) -> Result<Basket, BasketApiError>;

    /// Deletes the basket for the session along with all of its line items. Returns `true` if a
    /// basket was deleted, and `false` if there was nothing to delete.
    async fn delete_basket(&self, session_id: &str) -> Result<bool, BasketApiError>;

    /// Moves the basket for `old_session_id` to `new_session_id`. Returns `true` if a basket was
    /// moved, and `false` if no basket exists for the old session.
    async fn reassign_basket_session(
        &self,
        old_session_id: &str,
        new_session_id: &str,
    ) -> Result<bool, BasketApiError>;

    /// Creates a line item with quantity `qty`, or increments an existing item's quantity by
    /// `qty`. The stored line price is recomputed as unit price × resulting quantity.
    ///
    /// Fails with [`BasketApiError::InsufficientStock`] and discards the change if the resulting
    /// quantity would exceed the wine's stock quantity.
    async fn upsert_basket_item(
        &self,
        session_id: &str,
        wine_id: i64,
        qty: i64,
    ) -> Result<BasketItem, BasketApiError>;

    /// Overwrites an existing line item's quantity and recomputes its line price. Fails with
    /// [`BasketApiError::ItemNotFound`] if the wine is not in the basket, and with
    /// [`BasketApiError::InsufficientStock`] (leaving the item unchanged) if `qty` exceeds the
    /// wine's stock quantity.
    async fn update_basket_item_quantity(
        &self,
        session_id: &str,
        wine_id: i64,
        qty: i64,
    ) -> Result<BasketItem, BasketApiError>;

    /// Deletes the line item for the given wine. Fails with [`BasketApiError::ItemNotFound`] if
    /// no such item exists; other line items are untouched.
    async fn delete_basket_item(&self, session_id: &str, wine_id: i64) -> Result<(), BasketApiError>;

    /// All line items for the session's basket, ordered by wine id ascending.
    async fn fetch_basket_items(&self, session_id: &str) -> Result<Vec<BasketItem>, BasketApiError>;

    /// The sum of the stored line prices for the session's basket. Zero for an empty basket.
    async fn fetch_basket_total(&self, session_id: &str) -> Result<Price, BasketApiError>;
}
