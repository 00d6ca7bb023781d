use ezstilius_core::types::SearchSettings;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseMatching {
    Sensitive,
    Insensitive,
    /// Case-insensitive unless query contains uppercase.
    #[default]
    Smart,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub case_matching: CaseMatching,
    pub unicode_normalization: bool,
    /// Shorter queries show popular searches instead of matching.
    pub min_query_len: usize,
    pub result_limit: usize,
    pub debounce: Duration,
    pub corpus_ttl: Duration,
    pub typo_tolerance: usize,
    pub typo_min_word_len: usize,
    pub title_weight: u32,
    pub category_weight: u32,
    pub popular_searches: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from(&SearchSettings::default())
    }
}

impl From<&SearchSettings> for SearchConfig {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            case_matching: CaseMatching::default(),
            unicode_normalization: true,
            min_query_len: settings.min_query_len as usize,
            result_limit: settings.result_limit as usize,
            debounce: Duration::from_millis(settings.debounce_ms),
            corpus_ttl: Duration::from_secs(settings.corpus_ttl_secs),
            typo_tolerance: settings.typo_tolerance as usize,
            typo_min_word_len: settings.typo_min_word_len as usize,
            title_weight: settings.title_weight,
            category_weight: settings.category_weight,
            popular_searches: settings.popular_searches.clone(),
        }
    }
}
