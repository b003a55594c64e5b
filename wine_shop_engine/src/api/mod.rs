//! The public storefront API.
//!
//! [`CatalogApi`] answers catalog queries (filtering, detail lookups, reference listings) and
//! [`BasketApi`] owns the basket reconciliation and lifecycle flows. Both are generic over a
//! backend implementing the corresponding trait from [`crate::traits`].
pub mod basket_api;
pub mod basket_objects;
pub mod catalog_api;
pub mod catalog_objects;

pub use basket_api::BasketApi;
pub use catalog_api::CatalogApi;
