//! Basket reconciliation and lifecycle flows.

use std::fmt::Debug;

use log::*;
use wss_common::Price;

use crate::{
    api::basket_objects::BasketContents,
    db_types::{Basket, BasketItem},
    traits::{BasketApiError, BasketManagement},
};

/// `BasketApi` is the primary API for mutating and querying session baskets in response to
/// storefront events.
///
/// Each line item tracks a single (basket, wine) pair. Mutations are reconciled against the
/// wine's current stock quantity inside a single backend transaction, so a failed mutation never
/// leaves partial state behind.
pub struct BasketApi<B> {
    db: B,
}

impl<B> Debug for BasketApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BasketApi")
    }
}

impl<B> BasketApi<B>
where B: BasketManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// Returns the existing basket for the session, or creates and persists a new empty one.
    pub async fn get_or_create_basket(&self, session_id: &str) -> Result<Basket, BasketApiError> {
        if let Some(basket) = self.db.fetch_basket_by_session(session_id).await? {
            debug!("🧺️ Using existing basket #{} for session {session_id}", basket.id);
            return Ok(basket);
        }
        let basket = self.db.create_basket(session_id).await?;
        info!("🧺️ Created new basket for session {session_id}");
        Ok(basket)
    }

    /// Deletes the basket for the session, along with its line items. A missing basket is a
    /// logged no-op.
    pub async fn delete_basket(&self, session_id: &str) -> Result<bool, BasketApiError> {
        let deleted = self.db.delete_basket(session_id).await?;
        if deleted {
            info!("🧺️ Deleted basket for session {session_id}");
        } else {
            warn!("🧺️ No basket found for session {session_id}. Nothing to delete.");
        }
        Ok(deleted)
    }

    /// Moves an existing basket to a new session identifier. A missing basket is a logged no-op.
    pub async fn reassign_session(&self, old_session_id: &str, new_session_id: &str) -> Result<bool, BasketApiError> {
        let moved = self.db.reassign_basket_session(old_session_id, new_session_id).await?;
        if moved {
            info!("🧺️ Moved basket from session {old_session_id} to {new_session_id}");
        } else {
            warn!("🧺️ No basket found for session {old_session_id}. Nothing to move.");
        }
        Ok(moved)
    }

    /// Adds `quantity` units of a wine to the session's basket, creating the line item if it is
    /// not present yet. The basket must already exist.
    ///
    /// If the resulting quantity would exceed the wine's stock quantity, the change is discarded
    /// and [`BasketApiError::InsufficientStock`] is returned. Quantities below 1 are rejected
    /// with [`BasketApiError::InvalidQuantity`].
    pub async fn add_item(&self, session_id: &str, wine_id: i64, quantity: i64) -> Result<BasketItem, BasketApiError> {
        if quantity < 1 {
            return Err(BasketApiError::InvalidQuantity(quantity));
        }
        debug!("🧺️ Adding {quantity} of wine #{wine_id} to the basket for session {session_id}");
        let item = self.db.upsert_basket_item(session_id, wine_id, quantity).await?;
        debug!("🧺️ Wine #{wine_id} now has quantity {} (line price {})", item.quantity, item.price);
        Ok(item)
    }

    /// Overwrites the quantity of an existing line item and recomputes its line price.
    ///
    /// A quantity of zero removes the line item and returns `None`; negative quantities are
    /// rejected with [`BasketApiError::InvalidQuantity`]. Quantities above the wine's stock
    /// quantity leave the item unchanged and return [`BasketApiError::InsufficientStock`].
    pub async fn set_item_quantity(
        &self,
        session_id: &str,
        wine_id: i64,
        quantity: i64,
    ) -> Result<Option<BasketItem>, BasketApiError> {
        if quantity < 0 {
            return Err(BasketApiError::InvalidQuantity(quantity));
        }
        if quantity == 0 {
            self.db.delete_basket_item(session_id, wine_id).await?;
            info!("🧺️ Quantity 0 removed wine #{wine_id} from the basket for session {session_id}");
            return Ok(None);
        }
        let item = self.db.update_basket_item_quantity(session_id, wine_id, quantity).await?;
        debug!("🧺️ Wine #{wine_id} quantity set to {} (line price {})", item.quantity, item.price);
        Ok(Some(item))
    }

    /// Removes a wine's line item from the session's basket. Fails with
    /// [`BasketApiError::ItemNotFound`] if the wine is not in the basket.
    pub async fn remove_item(&self, session_id: &str, wine_id: i64) -> Result<(), BasketApiError> {
        self.db.delete_basket_item(session_id, wine_id).await?;
        info!("🧺️ Removed wine #{wine_id} from the basket for session {session_id}");
        Ok(())
    }

    /// All line items for the session's basket, ordered by wine id ascending.
    pub async fn items(&self, session_id: &str) -> Result<Vec<BasketItem>, BasketApiError> {
        self.db.fetch_basket_items(session_id).await
    }

    /// The sum of all stored line prices. Zero for an empty basket.
    pub async fn total_cost(&self, session_id: &str) -> Result<Price, BasketApiError> {
        self.db.fetch_basket_total(session_id).await
    }

    /// Fetches the line items and the total in one call. This is what the basket view renders.
    pub async fn contents(&self, session_id: &str) -> Result<BasketContents, BasketApiError> {
        let items = self.db.fetch_basket_items(session_id).await?;
        let total = self.db.fetch_basket_total(session_id).await?;
        Ok(BasketContents { items, total })
    }

    pub fn db(&self) -> &B {
        &self.db
    }
}
