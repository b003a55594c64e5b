//! Wine Shop Engine
//!
//! The engine contains the storefront logic for the wine shop server: browsing and filtering the
//! wine catalog, and reconciling session-scoped shopping baskets against available stock. It is
//! web-framework agnostic.
//!
//! The library is divided into two main sections:
//! 1. Database management and control ([`mod@db`]). Currently, Sqlite is the supported backend.
//!    You should never need to access the database directly. Instead, use the public API provided
//!    by the engine. The exception is the data types used in the database. These are defined in
//!    the `db_types` module and are public.
//! 2. The engine public API ([`mod@api`]). [`CatalogApi`] answers catalog queries and
//!    [`BasketApi`] owns the basket reconciliation and lifecycle flows. Specific backends need to
//!    implement the traits in the [`mod@traits`] module in order to act as a backend for the
//!    wine shop server.
mod db;

pub mod api;
pub mod db_types;
pub mod traits;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

#[cfg(feature = "sqlite")]
pub use db::sqlite::SqliteDatabase;
pub use api::{BasketApi, CatalogApi};
