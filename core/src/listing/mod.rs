//! Shop listing state: filters, reveal window and the view handed to the UI.

mod reveal;

use crate::catalog::{Catalog, CatalogStatus};
use crate::query::{FilterState, SortMode, apply};
use crate::types::{ColorTag, Handle, ListingConfig, Product};
use std::collections::BTreeSet;
use tracing::debug;

pub use reveal::{RevealWindow, reveal};

/// What the listing should render.
#[derive(Debug, PartialEq)]
pub enum ListingView<'a> {
    /// The catalog has never loaded successfully.
    Unavailable { reason: String },
    /// Nothing to show and the shopper has not filtered anything.
    EmptyCatalog,
    /// Filters exclude every product; offer "clear filters".
    NoMatches,
    Results {
        visible: Vec<&'a Product>,
        total: usize,
        remaining: usize,
        next_batch: usize,
    },
}

/// Listing page state for one route.
///
/// Every filter or sort mutation resets the reveal window and returns the
/// query string to push into the address bar.
#[derive(Debug, Clone)]
pub struct Listing {
    filters: FilterState,
    window: RevealWindow,
}

impl Listing {
    /// Restores state from the persisted query, e.g. on a full reload.
    pub fn new(config: ListingConfig, lock: Option<Handle>, persisted: &str) -> Self {
        Self {
            filters: FilterState::from_query(persisted, lock),
            window: RevealWindow::new(config.initial_visible, config.batch_size),
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn window(&self) -> &RevealWindow {
        &self.window
    }

    /// Whether the category filter should be offered at all.
    pub fn shows_category_filter(&self) -> bool {
        self.filters.lock.is_none()
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.has_active_filters()
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.active_filter_count()
    }

    /// Ignored while a category lock is active.
    pub fn set_categories(&mut self, categories: impl IntoIterator<Item = Handle>) -> String {
        if self.filters.lock.is_none() {
            self.filters.categories = categories.into_iter().collect::<BTreeSet<_>>();
        }
        self.changed()
    }

    pub fn set_colors(&mut self, colors: impl IntoIterator<Item = ColorTag>) -> String {
        self.filters.colors = colors.into_iter().collect();
        self.changed()
    }

    pub fn set_sort(&mut self, sort: Option<SortMode>) -> String {
        self.filters.sort = sort;
        self.changed()
    }

    pub fn clear(&mut self) -> String {
        self.filters.clear();
        self.changed()
    }

    /// Re-reads the persisted query after back/forward navigation.
    pub fn sync_from_query(&mut self, persisted: &str) {
        self.filters = FilterState::from_query(persisted, self.filters.lock.clone());
        self.window.reset();
    }

    /// Reveals the next batch of the current result. Returns false when
    /// everything is already visible.
    pub fn load_more(&mut self, catalog: &Catalog) -> bool {
        let total = apply(catalog.products(), &self.filters).len();
        self.window.load_more(total)
    }

    pub fn view<'a>(&self, catalog: &'a Catalog) -> ListingView<'a> {
        if !catalog.has_data() {
            let reason = match catalog.status() {
                CatalogStatus::Unavailable { reason, .. } => reason.clone(),
                _ => "catalog not loaded".to_string(),
            };
            return ListingView::Unavailable { reason };
        }

        let mut matched = apply(catalog.products(), &self.filters);
        let total = matched.len();

        if total == 0 {
            return if self.has_active_filters() {
                ListingView::NoMatches
            } else {
                ListingView::EmptyCatalog
            };
        }

        matched.truncate(self.window.visible(total));
        ListingView::Results {
            visible: matched,
            total,
            remaining: self.window.remaining(total),
            next_batch: self.window.next_batch(total),
        }
    }

    fn changed(&mut self) -> String {
        self.window.reset();
        let query = self.filters.to_query();
        debug!(query = %query, "listing filters changed");
        query
    }
}
