use std::fmt::Display;

use log::warn;
use serde::{Deserialize, Serialize};
use wss_common::Price;

use crate::db_types::{ReferenceEntity, Wine};

/// The price-range tokens the catalog filter form understands, in display order.
pub const PRICE_RANGE_TOKENS: [&str; 5] = ["<20", "20-30", "30-40", "40-50", ">50"];

//--------------------------------------    PriceWindow      ---------------------------------------------------------
/// An inclusive price window. A missing bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceWindow {
    pub min: Option<Price>,
    pub max: Option<Price>,
}

impl PriceWindow {
    /// Maps a price-range token onto a window via a fixed lookup. Both bounds are inclusive.
    /// Unrecognized tokens log a warning and return `None`, so no price filter is applied.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "" => None,
            "<20" => Some(Self { min: None, max: Some(Price::from_units(20)) }),
            "20-30" => Some(Self::between(20, 30)),
            "30-40" => Some(Self::between(30, 40)),
            "40-50" => Some(Self::between(40, 50)),
            ">50" => Some(Self { min: Some(Price::from_units(50)), max: None }),
            other => {
                warn!("🍷️ Unknown price range: {other}. No price filter will be applied.");
                None
            },
        }
    }

    fn between(min: i64, max: i64) -> Self {
        Self { min: Some(Price::from_units(min)), max: Some(Price::from_units(max)) }
    }
}

impl Display for PriceWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "{min}..{max}"),
            (Some(min), None) => write!(f, "{min}.."),
            (None, Some(max)) => write!(f, "..{max}"),
            (None, None) => write!(f, ".."),
        }
    }
}

//--------------------------------------     WineFilter      ---------------------------------------------------------
/// Optional catalog filter criteria. Absent criteria contribute "always true"; the final
/// predicate is the logical AND of all four. Construction has no side effects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WineFilter {
    pub color: Option<String>,
    pub flavour: Option<String>,
    pub wine_type: Option<String>,
    pub price: Option<PriceWindow>,
}

impl WineFilter {
    /// Builds a filter from the raw criteria of a catalog search. Blank (all-whitespace) criteria
    /// are treated as absent, and the price token is resolved via [`PriceWindow::from_token`].
    pub fn from_criteria(
        color: Option<&str>,
        flavour: Option<&str>,
        wine_type: Option<&str>,
        price_token: Option<&str>,
    ) -> Self {
        let mut filter = WineFilter::default();
        if let Some(color) = trimmed(color) {
            filter = filter.with_color(color);
        }
        if let Some(flavour) = trimmed(flavour) {
            filter = filter.with_flavour(flavour);
        }
        if let Some(wine_type) = trimmed(wine_type) {
            filter = filter.with_wine_type(wine_type);
        }
        if let Some(window) = trimmed(price_token).and_then(PriceWindow::from_token) {
            filter = filter.with_price(window);
        }
        filter
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_flavour(mut self, flavour: impl Into<String>) -> Self {
        self.flavour = Some(flavour.into());
        self
    }

    pub fn with_wine_type(mut self, wine_type: impl Into<String>) -> Self {
        self.wine_type = Some(wine_type.into());
        self
    }

    pub fn with_price(mut self, price: PriceWindow) -> Self {
        self.price = Some(price);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.flavour.is_none() && self.wine_type.is_none() && self.price.is_none()
    }
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

impl Display for WineFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "No filters.")?;
            return Ok(());
        }
        if let Some(color) = &self.color {
            write!(f, "color: {color}. ")?;
        }
        if let Some(flavour) = &self.flavour {
            write!(f, "flavour: {flavour}. ")?;
        }
        if let Some(wine_type) = &self.wine_type {
            write!(f, "type: {wine_type}. ")?;
        }
        if let Some(price) = &self.price {
            write!(f, "price: {price}. ")?;
        }
        Ok(())
    }
}

//--------------------------------------    WineDetails      ---------------------------------------------------------
/// A wine together with its reference entities, resolved with explicit id lookups. This is what
/// the product detail view renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WineDetails {
    pub wine: Wine,
    pub color: ReferenceEntity,
    pub flavour: ReferenceEntity,
    pub wine_type: Option<ReferenceEntity>,
    pub grape: Option<ReferenceEntity>,
}
