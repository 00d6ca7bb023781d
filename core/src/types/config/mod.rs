mod app;
mod catalog;
mod listing;

pub use app::{CatalogSettings, ConfigError, ListingSettings, SearchSettings, StorefrontConfig};
pub use catalog::CatalogConfig;
pub use listing::ListingConfig;
