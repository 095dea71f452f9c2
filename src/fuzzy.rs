//! Relevance scoring used by the default select list filter.
//!
//! Scores come from `fuzzy-matcher`'s skim algorithm, matched without regard
//! to case, and are then weighted by how much of the candidate the query
//! covers, so that among equally good matches the tighter (shorter) candidate
//! ranks first:
//!
//! ```rust
//! use bubbletea_select_list::fuzzy::score;
//!
//! assert!(score("Joanna", "Jon") > score("Johnathan", "Jon"));
//! assert_eq!(score("Grace", "Jon"), 0.0);
//! ```

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Reusable scorer holding a configured fuzzy matcher.
pub struct FuzzyScorer {
    matcher: SkimMatcherV2,
}

impl FuzzyScorer {
    /// Creates a case-insensitive scorer.
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Scores `candidate` against `query`.
    ///
    /// Returns `0.0` when the query does not match or either string is empty.
    /// Positive scores are comparable across candidates for the same query.
    pub fn score(&self, candidate: &str, query: &str) -> f64 {
        if candidate.is_empty() || query.is_empty() {
            return 0.0;
        }
        let Some(raw) = self.matcher.fuzzy_match(candidate, query) else {
            return 0.0;
        };
        if raw <= 0 {
            return 0.0;
        }

        let query_len = query.chars().count() as f64;
        let candidate_len = candidate.chars().count().max(1) as f64;
        let coverage = (query_len / candidate_len).min(1.0);
        raw as f64 * (1.0 + coverage) / 2.0
    }
}

impl Default for FuzzyScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FuzzyScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzyScorer").finish_non_exhaustive()
    }
}

/// Scores `candidate` against `query` with a default [`FuzzyScorer`].
pub fn score(candidate: &str, query: &str) -> f64 {
    FuzzyScorer::new().score(candidate, query)
}
