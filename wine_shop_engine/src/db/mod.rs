//! Database management and control.
//!
//! This module hosts the storage backends for the wine shop engine. Each backend implements the
//! traits in [`crate::traits`]:
//!
//! * [`crate::traits::CatalogManagement`] for catalog queries, and
//! * [`crate::traits::BasketManagement`] for basket storage and stock reconciliation.
//!
//! Only Sqlite is implemented at present.
#[cfg(feature = "sqlite")]
pub mod sqlite;
