use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wss_common::Price;

//--------------------------------------   ReferenceKind     ---------------------------------------------------------
/// The four reference tables a wine points into. Reference entities are simple (id, name) rows
/// that are immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceKind {
    Color,
    Flavour,
    WineType,
    Grape,
}

impl ReferenceKind {
    /// The backing table for this kind of reference entity.
    pub fn table(&self) -> &'static str {
        match self {
            ReferenceKind::Color => "colors",
            ReferenceKind::Flavour => "flavours",
            ReferenceKind::WineType => "wine_types",
            ReferenceKind::Grape => "grapes",
        }
    }
}

impl Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceKind::Color => write!(f, "color"),
            ReferenceKind::Flavour => write!(f, "flavour"),
            ReferenceKind::WineType => write!(f, "wine type"),
            ReferenceKind::Grape => write!(f, "grape variety"),
        }
    }
}

//--------------------------------------  ReferenceEntity    ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct ReferenceEntity {
    pub id: i64,
    pub name: String,
}

//--------------------------------------        Wine         ---------------------------------------------------------
/// A catalog product. `stock_quantity` is the available inventory count and acts as an upper
/// bound on any basket line item's quantity; the schema guarantees it is never negative.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Wine {
    pub id: i64,
    pub name: String,
    /// Unit price
    pub price: Price,
    pub image_path: String,
    pub description: Option<String>,
    /// Suggested food pairing text
    pub pairing: Option<String>,
    pub alcohol_percent: Option<f64>,
    /// Container volume in ml. Never below 187 (the smallest split bottle sold).
    pub volume_ml: i64,
    pub serving_temperature: Option<String>,
    pub stock_quantity: i64,
    pub color_id: i64,
    pub flavour_id: i64,
    pub type_id: Option<i64>,
    pub grape_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//--------------------------------------      NewWine        ---------------------------------------------------------
#[derive(Debug, Clone)]
pub struct NewWine {
    pub name: String,
    pub price: Price,
    pub image_path: String,
    pub description: Option<String>,
    pub pairing: Option<String>,
    pub alcohol_percent: Option<f64>,
    pub volume_ml: i64,
    pub serving_temperature: Option<String>,
    pub stock_quantity: i64,
    pub color_id: i64,
    pub flavour_id: i64,
    pub type_id: Option<i64>,
    pub grape_id: Option<i64>,
}

impl NewWine {
    pub fn new(
        name: impl Into<String>,
        price: Price,
        image_path: impl Into<String>,
        volume_ml: i64,
        stock_quantity: i64,
        color_id: i64,
        flavour_id: i64,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            image_path: image_path.into(),
            description: None,
            pairing: None,
            alcohol_percent: None,
            volume_ml,
            serving_temperature: None,
            stock_quantity,
            color_id,
            flavour_id,
            type_id: None,
            grape_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_pairing(mut self, pairing: impl Into<String>) -> Self {
        self.pairing = Some(pairing.into());
        self
    }

    pub fn with_alcohol_percent(mut self, alcohol_percent: f64) -> Self {
        self.alcohol_percent = Some(alcohol_percent);
        self
    }

    pub fn with_serving_temperature(mut self, serving_temperature: impl Into<String>) -> Self {
        self.serving_temperature = Some(serving_temperature.into());
        self
    }

    pub fn with_wine_type(mut self, type_id: i64) -> Self {
        self.type_id = Some(type_id);
        self
    }

    pub fn with_grape(mut self, grape_id: i64) -> Self {
        self.grape_id = Some(grape_id);
        self
    }
}

//--------------------------------------       Basket        ---------------------------------------------------------
/// A session-scoped shopping basket. The session identifier is an opaque token assigned by the
/// presentation layer; it is unique across all baskets.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Basket {
    pub id: i64,
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//--------------------------------------     BasketItem      ---------------------------------------------------------
/// A line item in a basket. There is at most one item per (basket, wine) pair, and `price` is
/// always unit price × quantity as of the last mutation.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct BasketItem {
    pub id: i64,
    pub basket_id: i64,
    pub wine_id: i64,
    pub quantity: i64,
    pub price: Price,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
