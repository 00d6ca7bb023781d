//! Shareable query-string form of [`FilterState`].
//!
//! `category=accessories,clothing&color=olive&sort=price-asc`
//!
//! Multi-value keys are comma-joined in sorted order and omitted when empty.
//! Decoding never fails: anything unrecognized falls back to "absent".

use super::{FilterState, SortMode};
use crate::types::{ColorTag, Handle};
use std::collections::BTreeSet;
use std::ops::Deref;

pub const CATEGORY_KEY: &str = "category";
pub const COLOR_KEY: &str = "color";
pub const SORT_KEY: &str = "sort";

impl FilterState {
    /// Encodes the user-editable part of the state. The lock is excluded.
    pub fn to_query(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();

        if self.lock.is_none() && !self.categories.is_empty() {
            pairs.push(format!("{CATEGORY_KEY}={}", join(&self.categories)));
        }
        if !self.colors.is_empty() {
            pairs.push(format!("{COLOR_KEY}={}", join(&self.colors)));
        }
        if let Some(sort) = self.sort {
            pairs.push(format!("{SORT_KEY}={sort}"));
        }

        pairs.join("&")
    }

    /// Decodes a persisted query. With a lock, the category key is ignored.
    pub fn from_query(query: &str, lock: Option<Handle>) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let categories = match lock {
            Some(_) => BTreeSet::new(),
            None => first_value(query, CATEGORY_KEY)
                .map(|v| parse_list(&v, |s| Handle::parse(s).ok()))
                .unwrap_or_default(),
        };
        let colors = first_value(query, COLOR_KEY)
            .map(|v| parse_list(&v, |s| ColorTag::parse(s).ok()))
            .unwrap_or_default();
        let sort = first_value(query, SORT_KEY).and_then(|v| SortMode::parse(&v));

        Self {
            categories,
            colors,
            sort,
            lock,
        }
    }
}

fn join<T: Deref<Target = String>>(values: &BTreeSet<T>) -> String {
    values
        .iter()
        .map(|v| v.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

fn first_value(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| decode_commas(v))
}

/// Browsers encode the separator as `%2C`; accept both forms.
fn decode_commas(value: &str) -> String {
    value.replace("%2C", ",").replace("%2c", ",")
}

fn parse_list<T: Ord>(value: &str, parse: impl Fn(&str) -> Option<T>) -> BTreeSet<T> {
    value
        .split(',')
        .filter(|s| !s.is_empty())
        .filter_map(parse)
        .collect()
}
