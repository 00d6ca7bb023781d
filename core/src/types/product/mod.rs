use crate::error::ValidationError;
use crate::types::{ColorTag, Handle, Price, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One catalog item as delivered by the commerce backend.
///
/// Products are immutable for the duration of a browsing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub handle: Handle,
    /// Display title in the requested locale.
    pub title: String,
    /// Translation key for the display name.
    pub name_key: String,
    pub price: Price,
    /// Pre-discount price; present only for items on sale.
    #[serde(default)]
    pub original_price: Option<Price>,
    pub category: Handle,
    #[serde(default)]
    pub is_new: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub colors: Vec<ColorTag>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub description_key: Option<String>,
    #[serde(default)]
    pub details_key: Option<String>,
    #[serde(default)]
    pub image_count: u32,
}

impl Product {
    /// Checks the sale-price invariant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.original_price {
            Some(original) if original <= self.price => {
                Err(ValidationError::OriginalPriceNotAbove {
                    price: self.price.amount(),
                    original: original.amount(),
                })
            }
            _ => Ok(()),
        }
    }

    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }

    pub fn has_any_color<'a>(&self, wanted: impl IntoIterator<Item = &'a ColorTag>) -> bool {
        let mut wanted = wanted.into_iter();
        wanted.any(|color| self.colors.contains(color))
    }
}
