//! Read-only catalog snapshot fed by the commerce backend.

use crate::error::CatalogError;
use crate::types::{CatalogConfig, Category, CategoryTree, Handle, Locale, Product};
use serde::Deserialize;
use std::time::SystemTime;
use tracing::{debug, info, warn};

/// Source of products and categories, usually the commerce backend.
pub trait CatalogProvider {
    fn fetch_products(&self, locale: Locale) -> Result<Vec<Product>, CatalogError>;

    /// Every category node; roots are the entries without a parent id.
    fn fetch_categories(&self, locale: Locale) -> Result<Vec<Category>, CatalogError>;
}

/// Health of the last refresh, so the UI can tell an outage from an empty shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    NotLoaded,
    Ready {
        loaded_at: SystemTime,
    },
    Unavailable {
        reason: String,
        /// Whether an earlier snapshot is still being served.
        has_stale_data: bool,
    },
}

/// Last successfully loaded products and category tree.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    categories: CategoryTree,
    status: CatalogStatus,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            categories: CategoryTree::default(),
            status: CatalogStatus::NotLoaded,
        }
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ready catalog from already-fetched data.
    pub fn from_parts(products: Vec<Product>, categories: Vec<Category>, now: SystemTime) -> Self {
        Self {
            products: retain_valid(products),
            categories: CategoryTree::from_roots(categories),
            status: CatalogStatus::Ready { loaded_at: now },
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &CategoryTree {
        &self.categories
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    /// True once any refresh has succeeded, even if a later one failed.
    pub fn has_data(&self) -> bool {
        match self.status {
            CatalogStatus::NotLoaded => false,
            CatalogStatus::Ready { .. } => true,
            CatalogStatus::Unavailable { has_stale_data, .. } => has_stale_data,
        }
    }

    pub fn product(&self, handle: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.handle.as_str() == handle)
    }

    /// Products to show under `product`'s detail page.
    pub fn related_to(&self, product: &Product, config: CatalogConfig) -> Vec<&Product> {
        related(
            &self.products,
            &product.handle,
            &product.category,
            config.related_limit,
        )
    }

    /// Pulls a fresh snapshot.
    ///
    /// A product failure keeps the previous snapshot and marks the catalog
    /// unavailable. A category failure alone keeps the previous tree.
    pub fn refresh(
        &mut self,
        provider: &impl CatalogProvider,
        locale: Locale,
        now: SystemTime,
    ) -> &CatalogStatus {
        let products = match provider.fetch_products(locale) {
            Ok(products) => products,
            Err(e) => {
                let has_stale_data = self.has_data();
                warn!(%locale, error = %e, has_stale_data, "catalog refresh failed");
                self.status = CatalogStatus::Unavailable {
                    reason: e.to_string(),
                    has_stale_data,
                };
                return &self.status;
            }
        };

        match provider.fetch_categories(locale) {
            Ok(categories) => self.categories = CategoryTree::from_roots(categories),
            Err(e) => warn!(%locale, error = %e, "category refresh failed, keeping previous tree"),
        }

        self.products = retain_valid(products);
        self.status = CatalogStatus::Ready { loaded_at: now };
        info!(%locale, products = self.products.len(), "catalog refreshed");
        &self.status
    }
}

/// Drops products that break the sale-price invariant, logging each one.
pub fn retain_valid(products: Vec<Product>) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| match p.validate() {
            Ok(()) => true,
            Err(e) => {
                warn!(product = %p.id, error = %e, "dropping invalid product");
                false
            }
        })
        .collect()
}

/// Up to `limit` products to show under a product page.
///
/// Same-category items come first, then the rest, both in catalog order.
pub fn related<'a>(
    products: &'a [Product],
    current: &Handle,
    category: &Handle,
    limit: usize,
) -> Vec<&'a Product> {
    let others = products.iter().filter(|p| &p.handle != current);
    let same = others.clone().filter(|p| &p.category == category);
    let rest = others.filter(|p| &p.category != category);

    same.chain(rest).take(limit).collect()
}

/// Provider over JSON payloads already in memory, e.g. a prerendered export.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct ProductsPayload {
    #[serde(default)]
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct CategoriesPayload {
    #[serde(default)]
    product_categories: Vec<Category>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Parses `{"products": [...]}` and `{"product_categories": [...]}` bodies.
    pub fn from_json(products: &str, categories: &str) -> Result<Self, CatalogError> {
        let products: ProductsPayload = serde_json::from_str(products)?;
        let categories: CategoriesPayload = serde_json::from_str(categories)?;
        debug!(
            products = products.products.len(),
            categories = categories.product_categories.len(),
            "parsed static catalog"
        );
        Ok(Self::new(products.products, categories.product_categories))
    }
}

impl CatalogProvider for StaticCatalog {
    fn fetch_products(&self, _locale: Locale) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }

    fn fetch_categories(&self, _locale: Locale) -> Result<Vec<Category>, CatalogError> {
        Ok(self.categories.clone())
    }
}
