pub mod config;
pub use config::{
    CatalogConfig, CatalogSettings, ConfigError, ListingConfig, ListingSettings, SearchSettings,
    StorefrontConfig,
};

pub(crate) mod handle;
pub use handle::{ColorTag, Handle, ProductId, MAX_HANDLE_LENGTH};

pub(crate) mod locale;
pub use locale::Locale;

pub(crate) mod price;
pub use price::Price;

pub(crate) mod product;
pub use product::Product;

pub(crate) mod category;
pub use category::{Category, CategoryOption, CategoryTree, Crumb};
