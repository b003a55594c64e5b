use std::fmt::Display;

use serde::{Deserialize, Serialize};
use wine_shop_engine::db_types::{BasketItem, ReferenceEntity, Wine};
use wss_common::Price;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse {
    pub success: bool,
    pub message: String,
}

impl JsonResponse {
    pub fn success<S: Display>(message: S) -> Self {
        Self { success: true, message: message.to_string() }
    }

    pub fn failure<S: Display>(message: S) -> Self {
        Self { success: false, message: message.to_string() }
    }
}

/// The catalog view. `searched` distinguishes the empty home page from a search with no results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPage {
    pub wines: Vec<Wine>,
    pub searched: bool,
}

impl CatalogPage {
    pub fn empty() -> Self {
        Self { wines: Vec::new(), searched: false }
    }
}

/// The choices offered by the catalog filter form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptions {
    pub colors: Vec<ReferenceEntity>,
    pub flavours: Vec<ReferenceEntity>,
    pub types: Vec<ReferenceEntity>,
    pub grapes: Vec<ReferenceEntity>,
    pub price_ranges: Vec<String>,
}

/// A basket line item enriched with the wine's display data, resolved via explicit catalog
/// lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasketLine {
    pub wine_id: i64,
    pub wine_name: String,
    pub quantity: i64,
    pub unit_price: Price,
    pub line_price: Price,
}

impl BasketLine {
    pub fn new(item: &BasketItem, wine: &Wine) -> Self {
        Self {
            wine_id: item.wine_id,
            wine_name: wine.name.clone(),
            quantity: item.quantity,
            unit_price: wine.price,
            line_price: item.price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasketPage {
    pub items: Vec<BasketLine>,
    pub total: Price,
    pub currency: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WineIdParam {
    pub wine_id: i64,
}

/// Bulk quantity update, paired by position. Missing lists deserialize as empty and make the
/// request a no-op.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateParams {
    #[serde(default)]
    pub wine_ids: Vec<i64>,
    #[serde(default)]
    pub quantities: Vec<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub color: Option<String>,
    pub flavour: Option<String>,
    #[serde(rename = "type")]
    pub wine_type: Option<String>,
    pub price: Option<String>,
}
