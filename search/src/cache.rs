//! Time-boxed corpus snapshots, one per locale.

use crate::corpus::Corpus;
use ezstilius_core::types::Locale;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tracing::debug;

struct Entry {
    corpus: Arc<Corpus>,
    fetched_at: SystemTime,
}

/// Shared across search sessions and owned by the composition root.
///
/// A snapshot is served while `now - fetched_at < ttl`; after that it is
/// dropped and the caller must fetch again. Stores replace the whole snapshot.
pub struct CorpusCache {
    ttl: Duration,
    entries: HashMap<Locale, Entry>,
}

impl CorpusCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get(&mut self, locale: Locale, now: SystemTime) -> Option<Arc<Corpus>> {
        let entry = self.entries.get(&locale)?;
        // A clock that moved backwards counts as zero age.
        let age = now.duration_since(entry.fetched_at).unwrap_or_default();

        if age < self.ttl {
            debug!(%locale, age_ms = age.as_millis() as u64, "corpus cache hit");
            return Some(entry.corpus.clone());
        }

        debug!(%locale, "corpus cache expired");
        self.entries.remove(&locale);
        None
    }

    pub fn store(&mut self, locale: Locale, corpus: Corpus, now: SystemTime) -> Arc<Corpus> {
        let corpus = Arc::new(corpus);
        debug!(%locale, products = corpus.len(), "corpus cached");
        self.entries.insert(
            locale,
            Entry {
                corpus: corpus.clone(),
                fetched_at: now,
            },
        );
        corpus
    }

    pub fn invalidate(&mut self, locale: Locale) {
        self.entries.remove(&locale);
    }
}
