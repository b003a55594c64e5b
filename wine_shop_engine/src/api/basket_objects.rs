use serde::{Deserialize, Serialize};
use wss_common::Price;

use crate::db_types::BasketItem;

/// A snapshot of a basket: line items ordered by wine id, and the sum of their stored prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasketContents {
    pub items: Vec<BasketItem>,
    pub total: Price,
}

impl BasketContents {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
