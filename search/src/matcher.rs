//! Typo-tolerant product ranking.
//!
//! Every query word has to start some word of the field. nucleo scores those
//! prefix hits, which also handles case and diacritics. When a query word
//! starts no field word (transposed or substituted letters), the words are
//! compared by edit distance instead. Letters that merely appear in order
//! somewhere in the field never count as a match.

use crate::config::{CaseMatching, SearchConfig};
use crate::corpus::Corpus;
use ezstilius_core::types::Product;
use nucleo::pattern::{Atom, AtomKind, CaseMatching as NucleoCaseMatching, Normalization};
use nucleo::{Config as NucleoConfig, Matcher, Utf32Str};

/// Points per query character for a word matched within the typo budget.
const TYPO_CHAR_SCORE: u32 = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedMatch {
    pub product: Product,
    pub score: u32,
}

/// Best matches first, capped at the configured limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedMatches {
    pub matches: Vec<RankedMatch>,
    /// Matches before the cap was applied.
    pub total: usize,
}

impl RankedMatches {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

pub struct FuzzyMatcher {
    matcher: Matcher,
    config: SearchConfig,
}

impl FuzzyMatcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            matcher: Matcher::new(NucleoConfig::DEFAULT),
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn is_searchable(&self, query: &str) -> bool {
        query.trim().chars().count() >= self.config.min_query_len
    }

    /// Ranks `corpus` against `query`.
    ///
    /// Returns `None` when the query is too short to search at all, which is
    /// distinct from a search that found nothing.
    pub fn search(&mut self, query: &str, corpus: &Corpus) -> Option<RankedMatches> {
        if !self.is_searchable(query) {
            return None;
        }

        let atoms: Vec<Atom> = split_words(query)
            .map(|word| {
                Atom::new(
                    word,
                    self.case_matching(),
                    self.normalization(),
                    AtomKind::Prefix,
                    false,
                )
            })
            .collect();
        let words = words(query);

        let mut scored: Vec<(usize, u32)> = Vec::new();
        for (i, product) in corpus.products().iter().enumerate() {
            let title = self.field_score(&atoms, &words, &product.title);
            let category = self.field_score(&atoms, &words, corpus.category_name(product));
            let score = title * self.config.title_weight + category * self.config.category_weight;
            if score > 0 {
                scored.push((i, score));
            }
        }

        // Stable: equal scores keep corpus order.
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        let total = scored.len();
        let matches = scored
            .into_iter()
            .take(self.config.result_limit)
            .map(|(i, score)| RankedMatch {
                product: corpus.products()[i].clone(),
                score,
            })
            .collect();

        Some(RankedMatches { matches, total })
    }

    /// Sum of the best prefix hit per query word, or the typo score when any
    /// word has no prefix hit.
    fn field_score(&mut self, atoms: &[Atom], words: &[Vec<char>], field: &str) -> u32 {
        if atoms.is_empty() {
            return 0;
        }

        let field_words: Vec<&str> = split_words(field).collect();
        let mut buf = Vec::new();
        let mut total = 0;
        for atom in atoms {
            let best = field_words
                .iter()
                .filter_map(|word| atom.score(Utf32Str::new(word, &mut buf), &mut self.matcher))
                .max();
            match best {
                Some(score) => total += u32::from(score),
                None => {
                    return typo_score(
                        words,
                        field,
                        self.config.typo_tolerance,
                        self.config.typo_min_word_len,
                    );
                }
            }
        }
        total
    }

    fn case_matching(&self) -> NucleoCaseMatching {
        match self.config.case_matching {
            CaseMatching::Sensitive => NucleoCaseMatching::Respect,
            CaseMatching::Insensitive => NucleoCaseMatching::Ignore,
            CaseMatching::Smart => NucleoCaseMatching::Smart,
        }
    }

    fn normalization(&self) -> Normalization {
        if self.config.unicode_normalization {
            Normalization::Smart
        } else {
            Normalization::Never
        }
    }
}

fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}

fn words(text: &str) -> Vec<Vec<char>> {
    split_words(text)
        .map(|w| w.to_lowercase().chars().collect())
        .collect()
}

/// Every query word must sit within the typo budget of some field word
/// (or of that word's prefix, for half-typed words).
fn typo_score(query: &[Vec<char>], field: &str, tolerance: usize, min_word_len: usize) -> u32 {
    if query.is_empty() {
        return 0;
    }
    let field = words(field);

    let mut total = 0;
    for word in query {
        let budget = if word.len() >= min_word_len { tolerance } else { 0 };
        let best = field
            .iter()
            .map(|candidate| {
                let full = osa_distance(word, candidate);
                let prefix_len = word.len().min(candidate.len());
                full.min(osa_distance(word, &candidate[..prefix_len]))
            })
            .min();

        match best {
            Some(distance) if distance <= budget => {
                total += word.len() as u32 * TYPO_CHAR_SCORE / (1 + distance as u32);
            }
            _ => return 0,
        }
    }
    total
}

/// Optimal string alignment distance: Levenshtein plus adjacent transpositions.
pub(crate) fn osa_distance(a: &[char], b: &[char]) -> usize {
    let (n, m) = (a.len(), b.len());
    let mut d = vec![vec![0usize; m + 1]; n + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=m {
        d[0][j] = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(d[i - 2][j - 2] + 1);
            }
            d[i][j] = best;
        }
    }

    d[n][m]
}
