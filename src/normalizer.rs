use crate::config::MatchConfig;
use crate::model::NormalizedQuery;
use unicode_normalization::char::is_combining_mark;

/// Turns a scraped product name into search keywords.
pub struct Normalizer {
    max_keywords: usize,
    dedupe: bool,
}

impl Normalizer {
    pub fn new(cfg: &MatchConfig) -> Self {
        Self {
            max_keywords: cfg.max_keywords,
            dedupe: cfg.dedupe_keywords,
        }
    }

    pub fn normalize(&self, raw_name: &str) -> NormalizedQuery {
        let cleaned = clean_name(raw_name).to_lowercase();

        let mut keywords: Vec<String> = Vec::with_capacity(self.max_keywords);
        for token in cleaned.split_whitespace() {
            if keywords.len() == self.max_keywords {
                break;
            }
            if self.dedupe && keywords.iter().any(|k| k == token) {
                continue;
            }
            keywords.push(token.to_string());
        }

        NormalizedQuery { keywords }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&MatchConfig::default())
    }
}

/// Hyphens and underscores become spaces, everything that is not a word
/// character (letter, digit, combining mark) or whitespace is dropped,
/// whitespace runs collapse.
pub fn clean_name(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .filter(|&c| c.is_alphanumeric() || is_combining_mark(c) || c.is_whitespace())
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
