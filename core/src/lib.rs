//! Catalog core for the ezstilius storefront.
//!
//! # Design
//!
//! - The product catalog is a read-only snapshot pulled from the commerce
//!   backend through a [`catalog::CatalogProvider`].
//! - [`query::FilterState`] describes what the shopper asked for; `apply()`
//!   turns a snapshot plus a state into a deterministic, sorted view.
//! - The filter state round-trips through a shareable query string so a
//!   listing can be bookmarked.
//! - [`listing::Listing`] ties filters, incremental reveal and catalog status
//!   into one view enum that the UI matches on.
//!
//! Nothing here performs I/O or reads the clock; callers pass `now`.

pub mod catalog;
pub mod error;
pub mod listing;
pub mod query;
pub mod types;

pub use error::{Error, Result};

#[cfg(test)]
pub(crate) mod fixtures;
