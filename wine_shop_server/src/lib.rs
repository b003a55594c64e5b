//! # Wine shop server
//! This module hosts the HTTP surface of the wine shop. It is responsible for:
//! * serving the catalog (browse, filter, wine details),
//! * managing the shopper's session cookie, and
//! * translating basket requests into engine calls and engine errors into HTTP statuses.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more
//! information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: a health check route that returns a 200 OK response.
//! * `/` and `/wines`: the catalog views.
//! * `/wines/{id}`: the wine detail view.
//! * `/basket` and its `add`/`remove`/`update` actions: the session basket.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod routes;
pub mod server;
pub mod session;

#[cfg(test)]
mod endpoint_tests;
