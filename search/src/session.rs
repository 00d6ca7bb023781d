//! Search overlay session.
//!
//! The session is sans-IO and driven by the host event loop:
//!
//! - `open()` may hand back a [`FetchRequest`]; the host performs the fetch
//!   and reports back through `complete_fetch()` with the same token.
//! - `input()` records a keystroke; `tick()` settles it once the debounce
//!   delay has elapsed without further input.
//! - `close()` advances the generation, so any response still in flight is
//!   discarded when it arrives.

use crate::cache::CorpusCache;
use crate::config::SearchConfig;
use crate::corpus::Corpus;
use crate::debounce::Debouncer;
use crate::error::SearchError;
use crate::generation::{Generation, RequestToken};
use crate::matcher::{FuzzyMatcher, RankedMatch};
use ezstilius_core::catalog::CatalogProvider;
use ezstilius_core::types::{CategoryTree, Locale};
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, info, warn};

/// Corpus fetch the host must perform for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: RequestToken,
    pub locale: Locale,
}

/// What the overlay should render.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    /// No settled query long enough to search.
    Popular { suggestions: Vec<String> },
    /// A query settled but the corpus has not arrived yet.
    Loading { query: String },
    /// The corpus fetch failed; retried on the next open.
    Unavailable,
    NoResults {
        query: String,
        suggestions: Vec<String>,
    },
    Results {
        query: String,
        matches: Vec<RankedMatch>,
        total: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing settled, or the settled query was too short to search.
    Idle,
    /// A settled query was matched against the corpus.
    Matched,
    /// A query settled but the corpus is still being fetched.
    AwaitingCorpus,
}

pub struct SearchSession {
    matcher: FuzzyMatcher,
    generation: Generation,
    debouncer: Debouncer<String>,
    locale: Option<Locale>,
    query: String,
    settled: Option<String>,
    corpus: Option<Arc<Corpus>>,
    pending_fetch: Option<RequestToken>,
    state: SearchState,
}

impl SearchSession {
    pub fn new(config: SearchConfig) -> Self {
        let debouncer = Debouncer::new(config.debounce);
        let state = SearchState::Popular {
            suggestions: config.popular_searches.clone(),
        };

        Self {
            matcher: FuzzyMatcher::new(config),
            generation: Generation::new(),
            debouncer,
            locale: None,
            query: String::new(),
            settled: None,
            corpus: None,
            pending_fetch: None,
            state,
        }
    }

    pub fn is_open(&self) -> bool {
        self.locale.is_some()
    }

    /// Raw input text, including keystrokes that have not settled yet.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// When the host should call `tick()` next.
    pub fn next_deadline(&self) -> Option<SystemTime> {
        self.debouncer.deadline()
    }
}

/// Lifecycle operations.
impl SearchSession {
    /// Opens the overlay. A cache hit needs no fetch; otherwise the returned
    /// request must be fulfilled through [`SearchSession::complete_fetch`].
    ///
    /// Reopening an open session first discards everything in flight.
    pub fn open(
        &mut self,
        locale: Locale,
        now: SystemTime,
        cache: &mut CorpusCache,
    ) -> Option<FetchRequest> {
        if self.is_open() {
            self.close();
        }

        let token = self.generation.advance();
        self.locale = Some(locale);
        self.state = self.popular();

        if let Some(corpus) = cache.get(locale, now) {
            self.corpus = Some(corpus);
            return None;
        }

        info!(%locale, "requesting search corpus");
        self.pending_fetch = Some(token);
        Some(FetchRequest { token, locale })
    }

    /// Discards in-flight work and resets the query.
    pub fn close(&mut self) {
        self.generation.advance();
        self.debouncer.cancel();
        self.locale = None;
        self.query.clear();
        self.settled = None;
        self.corpus = None;
        self.pending_fetch = None;
        self.state = self.popular();
    }

    /// Delivers the outcome of a [`FetchRequest`].
    ///
    /// Returns false when the token was superseded and the response ignored.
    /// A failure never touches the cache, so the next open retries.
    pub fn complete_fetch(
        &mut self,
        token: RequestToken,
        result: Result<Corpus, SearchError>,
        now: SystemTime,
        cache: &mut CorpusCache,
    ) -> bool {
        let locale = match self.locale {
            Some(locale) if self.pending_fetch == Some(token) && self.generation.is_current(token) => {
                locale
            }
            _ => {
                debug!(?token, "discarding stale corpus response");
                return false;
            }
        };
        self.pending_fetch = None;

        match result {
            Ok(corpus) => {
                self.corpus = Some(cache.store(locale, corpus, now));
                if self.settled.is_some() {
                    self.run_match();
                }
            }
            Err(e) => {
                warn!(%locale, error = %e, "search corpus fetch failed");
                if self.settled.is_some() {
                    self.state = SearchState::Unavailable;
                }
            }
        }
        true
    }
}

/// Input operations.
impl SearchSession {
    /// Records a keystroke. Restarts the debounce delay.
    pub fn input(&mut self, query: impl Into<String>, now: SystemTime) {
        if !self.is_open() {
            return;
        }
        self.query = query.into();
        self.debouncer.schedule(self.query.clone(), now);
    }

    /// Fills the input with a popular search term.
    pub fn choose_popular(&mut self, term: &str, now: SystemTime) {
        self.input(term, now);
    }

    /// Settles the pending input once its debounce delay has elapsed.
    pub fn tick(&mut self, now: SystemTime) -> TickOutcome {
        match self.debouncer.poll(now) {
            Some(query) => self.settle(query),
            None => TickOutcome::Idle,
        }
    }

    fn settle(&mut self, query: String) -> TickOutcome {
        if !self.matcher.is_searchable(&query) {
            self.settled = None;
            self.state = self.popular();
            return TickOutcome::Idle;
        }

        self.settled = Some(query.clone());
        if self.corpus.is_some() {
            self.run_match();
            TickOutcome::Matched
        } else if self.pending_fetch.is_some() {
            self.state = SearchState::Loading { query };
            TickOutcome::AwaitingCorpus
        } else {
            self.state = SearchState::Unavailable;
            TickOutcome::Idle
        }
    }

    fn run_match(&mut self) {
        let (Some(corpus), Some(query)) = (self.corpus.clone(), self.settled.clone()) else {
            return;
        };

        self.state = match self.matcher.search(&query, &corpus) {
            None => self.popular(),
            Some(ranked) if ranked.is_empty() => SearchState::NoResults {
                query,
                suggestions: self.matcher.config().popular_searches.clone(),
            },
            Some(ranked) => {
                debug!(query = %query, total = ranked.total, "search matched");
                SearchState::Results {
                    query,
                    matches: ranked.matches,
                    total: ranked.total,
                }
            }
        };
    }

    fn popular(&self) -> SearchState {
        SearchState::Popular {
            suggestions: self.matcher.config().popular_searches.clone(),
        }
    }
}

/// Fetches products and categories and builds a corpus.
///
/// Category names only improve ranking, so a category failure degrades to
/// matching against handles instead of failing the whole corpus.
pub fn load_corpus(provider: &impl CatalogProvider, locale: Locale) -> Result<Corpus, SearchError> {
    let products = provider.fetch_products(locale)?;
    let categories = match provider.fetch_categories(locale) {
        Ok(categories) => CategoryTree::from_roots(categories),
        Err(e) => {
            warn!(%locale, error = %e, "categories unavailable for search corpus");
            CategoryTree::default()
        }
    };
    Ok(Corpus::new(products, &categories))
}
