use crate::config::MatchConfig;
use crate::model::{IndexedEntry, NormalizedQuery};

/// Keyword-coverage filter over an indexed catalog.
pub struct Matcher {
    min_match_ratio: f64,
}

impl Matcher {
    pub fn new(cfg: &MatchConfig) -> Self {
        Self {
            min_match_ratio: cfg.min_match_ratio,
        }
    }

    /// Number of keywords an entry must cover to count as a match.
    pub fn required_matches(&self, keyword_count: usize) -> usize {
        (keyword_count as f64 * self.min_match_ratio).ceil() as usize
    }

    /// Entries covering enough keywords, in catalog order. An empty query matches nothing.
    pub fn find_matches<'a>(
        &self,
        query: &NormalizedQuery,
        catalog: &'a [IndexedEntry],
    ) -> Vec<&'a IndexedEntry> {
        if query.is_empty() {
            return Vec::new();
        }
        let required = self.required_matches(query.keywords.len());

        catalog
            .iter()
            .filter(|entry| covered_keywords(&query.keywords, &entry.name) >= required)
            .collect()
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(&MatchConfig::default())
    }
}

/// Counts keywords contained in at least one whitespace-delimited token of `name`.
/// A keyword is counted once no matter how many tokens contain it.
pub fn covered_keywords(keywords: &[String], name: &str) -> usize {
    let tokens: Vec<&str> = name.split_whitespace().collect();
    keywords
        .iter()
        .filter(|kw| tokens.iter().any(|token| token.contains(kw.as_str())))
        .count()
}
