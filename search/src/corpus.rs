//! Searchable product snapshot.

use ezstilius_core::catalog::retain_valid;
use ezstilius_core::types::{CategoryTree, Handle, Product};
use std::collections::HashMap;

/// Products plus the category names they are matched against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    products: Vec<Product>,
    category_names: HashMap<Handle, String>,
}

impl Corpus {
    /// Products breaking the sale-price invariant are left out, as the listing does.
    pub fn new(products: Vec<Product>, categories: &CategoryTree) -> Self {
        let products = retain_valid(products);
        let category_names = products
            .iter()
            .filter_map(|p| {
                categories
                    .label_of(&p.category)
                    .map(|name| (p.category.clone(), name.to_string()))
            })
            .collect();

        Self {
            products,
            category_names,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Category display name, falling back to the handle for unknown categories.
    pub fn category_name<'a>(&'a self, product: &'a Product) -> &'a str {
        self.category_names
            .get(&product.category)
            .map(String::as_str)
            .unwrap_or_else(|| product.category.as_str())
    }
}
