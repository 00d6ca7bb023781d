//! Fuzzy product search for the storefront search overlay.
//!
//! # Design
//!
//! - The corpus (every product of a locale) is fetched once and kept in a
//!   [`CorpusCache`] with a TTL; the cache is owned by the caller and shared
//!   by every session.
//! - Matching runs synchronously against the cached snapshot: nucleo prefix
//!   scoring per word, word-level edit distance as a typo fallback.
//! - Keystrokes are debounced; only a settled query is matched.
//! - Fetches carry a [`RequestToken`]; responses whose token is no longer
//!   current are dropped.
//!
//! # Non-blocking API
//!
//! - `open()`: Starts a session, possibly requesting a corpus fetch
//! - `input()`: Records a keystroke
//! - `tick()`: Settles input whose debounce delay has elapsed
//! - `complete_fetch()`: Delivers a corpus fetch result
//! - `state()`: What the overlay should render

mod cache;
mod config;
mod corpus;
mod debounce;
mod error;
mod generation;
mod matcher;
mod session;

pub use cache::CorpusCache;
pub use config::{CaseMatching, SearchConfig};
pub use corpus::Corpus;
pub use debounce::Debouncer;
pub use error::SearchError;
pub use generation::{Generation, RequestToken};
pub use matcher::{FuzzyMatcher, RankedMatch, RankedMatches};
pub use session::{FetchRequest, SearchSession, SearchState, TickOutcome, load_corpus};
