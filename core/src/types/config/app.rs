use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Storefront configuration, persisted as storefront.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub listing: ListingSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
}

impl StorefrontConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> std::path::PathBuf {
        dir.join("storefront.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the list of validation errors; empty when valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.listing.initial_visible == 0 {
            errors.push("listing.initial_visible must be at least 1".to_string());
        }
        if self.listing.batch_size == 0 {
            errors.push("listing.batch_size must be at least 1".to_string());
        }
        if self.search.min_query_len == 0 {
            errors.push("search.min_query_len must be at least 1".to_string());
        }
        if self.search.result_limit == 0 {
            errors.push("search.result_limit must be at least 1".to_string());
        }
        if self.search.corpus_ttl_secs == 0 {
            errors.push("search.corpus_ttl_secs must be at least 1".to_string());
        }
        if self.search.title_weight == 0 {
            errors.push("search.title_weight must be at least 1".to_string());
        }

        errors
    }

    /// Returns a config with every invalid value replaced by its default.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let listing = ListingSettings::default();
        let search = SearchSettings::default();

        Self {
            listing: ListingSettings {
                initial_visible: non_zero_or(self.listing.initial_visible, listing.initial_visible),
                batch_size: non_zero_or(self.listing.batch_size, listing.batch_size),
            },
            search: SearchSettings {
                min_query_len: non_zero_or(self.search.min_query_len, search.min_query_len),
                result_limit: non_zero_or(self.search.result_limit, search.result_limit),
                corpus_ttl_secs: non_zero_or(self.search.corpus_ttl_secs, search.corpus_ttl_secs),
                title_weight: non_zero_or(self.search.title_weight, search.title_weight),
                ..self.search.clone()
            },
            catalog: self.catalog.clone(),
        }
    }
}

fn non_zero_or<T: Copy + PartialEq + Default>(value: T, fallback: T) -> T {
    if value == T::default() { fallback } else { value }
}

/// Shop listing pagination.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingSettings {
    #[serde(default = "default_initial_visible")]
    pub initial_visible: u32,
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            initial_visible: default_initial_visible(),
            batch_size: default_batch_size(),
        }
    }
}

fn default_initial_visible() -> u32 {
    12
}

fn default_batch_size() -> u32 {
    4
}

/// Search overlay tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_min_query_len")]
    pub min_query_len: u32,
    #[serde(default = "default_result_limit")]
    pub result_limit: u32,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_corpus_ttl_secs")]
    pub corpus_ttl_secs: u64,
    /// Edit distance allowed per query word of at least `typo_min_word_len` chars.
    #[serde(default = "default_typo_tolerance")]
    pub typo_tolerance: u32,
    #[serde(default = "default_typo_min_word_len")]
    pub typo_min_word_len: u32,
    #[serde(default = "default_title_weight")]
    pub title_weight: u32,
    #[serde(default = "default_category_weight")]
    pub category_weight: u32,
    #[serde(default = "default_popular_searches")]
    pub popular_searches: Vec<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
            result_limit: default_result_limit(),
            debounce_ms: default_debounce_ms(),
            corpus_ttl_secs: default_corpus_ttl_secs(),
            typo_tolerance: default_typo_tolerance(),
            typo_min_word_len: default_typo_min_word_len(),
            title_weight: default_title_weight(),
            category_weight: default_category_weight(),
            popular_searches: default_popular_searches(),
        }
    }
}

fn default_min_query_len() -> u32 {
    2
}

fn default_result_limit() -> u32 {
    6
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_corpus_ttl_secs() -> u64 {
    5 * 60
}

fn default_typo_tolerance() -> u32 {
    1
}

fn default_typo_min_word_len() -> u32 {
    4
}

fn default_title_weight() -> u32 {
    2
}

fn default_category_weight() -> u32 {
    1
}

fn default_popular_searches() -> Vec<String> {
    ["scarf", "cardigan", "crochet hooks", "tablecloth"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Catalog presentation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_related_limit")]
    pub related_limit: u32,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            related_limit: default_related_limit(),
        }
    }
}

fn default_related_limit() -> u32 {
    4
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
