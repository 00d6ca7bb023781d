//! Catalog query engine: filter, sort and the shareable query string.

mod codec;

use crate::types::{ColorTag, Handle, Product};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

pub use codec::{CATEGORY_KEY, COLOR_KEY, SORT_KEY};

/// Listing order selected by the shopper.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Newest, SortMode::PriceAsc, SortMode::PriceDesc];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
        }
    }

    /// Unrecognized or empty values yield `None`, which sorts as newest.
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortMode(pub String);

impl FromStr for SortMode {
    type Err = UnknownSortMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s.trim())
            .ok_or_else(|| UnknownSortMode(s.to_string()))
    }
}

/// The shopper's current query intent.
///
/// `categories` is ignored entirely while `lock` is set; the lock comes from the
/// route and never appears in the persisted query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub categories: BTreeSet<Handle>,
    pub colors: BTreeSet<ColorTag>,
    /// `None` means no explicit choice; sorts as [`SortMode::Newest`].
    pub sort: Option<SortMode>,
    pub lock: Option<Handle>,
}

impl FilterState {
    pub fn locked(lock: Handle) -> Self {
        Self {
            lock: Some(lock),
            ..Self::default()
        }
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort.unwrap_or_default()
    }

    /// Categories that actually constrain the result.
    pub fn effective_categories(&self) -> Option<&BTreeSet<Handle>> {
        if self.lock.is_some() {
            None
        } else {
            Some(&self.categories)
        }
    }

    /// True when the shopper narrowed or reordered the listing.
    ///
    /// A route lock alone does not count.
    pub fn has_active_filters(&self) -> bool {
        self.effective_categories().is_some_and(|c| !c.is_empty())
            || !self.colors.is_empty()
            || self.sort.is_some()
    }

    /// Number shown on the mobile filter badge.
    pub fn active_filter_count(&self) -> usize {
        self.effective_categories().map_or(0, BTreeSet::len) + self.colors.len()
    }

    /// Resets user choices, keeping the route lock.
    pub fn clear(&mut self) {
        self.categories.clear();
        self.colors.clear();
        self.sort = None;
    }

    fn matches(&self, product: &Product) -> bool {
        let category_ok = match (&self.lock, &self.categories) {
            (Some(lock), _) => &product.category == lock,
            (None, selected) if !selected.is_empty() => selected.contains(&product.category),
            (None, _) => true,
        };

        category_ok && (self.colors.is_empty() || product.has_any_color(&self.colors))
    }
}

/// Filters and sorts `products` under `state`.
///
/// Pure: the input slice is never reordered, and ties keep their input order.
pub fn apply<'a>(products: &'a [Product], state: &FilterState) -> Vec<&'a Product> {
    let mut result: Vec<&Product> = products.iter().filter(|p| state.matches(p)).collect();

    match state.sort_mode() {
        SortMode::PriceAsc => result.sort_by(|a, b| a.price.cmp(&b.price)),
        SortMode::PriceDesc => result.sort_by(|a, b| b.price.cmp(&a.price)),
        SortMode::Newest => result.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    result
}
