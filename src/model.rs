// Core structs: RawProduct, IndexedEntry, MatchResult, SavingsOutcome and the error types
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Image marker used when a listing carries no usable image url.
pub const NO_IMAGE: &str = "default_image_url.jpg";

/// Product as captured from the page being compared.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedQuery {
    pub keywords: Vec<String>,
}

impl NormalizedQuery {
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Fails with `EmptyQuery` when there is nothing to search for.
    pub fn ensure_usable(&self) -> Result<&Self, CompareError> {
        if self.is_empty() {
            Err(CompareError::EmptyQuery)
        } else {
            Ok(self)
        }
    }

    /// Keywords joined back with single spaces.
    pub fn text(&self) -> String {
        self.keywords.join(" ")
    }
}

/// Catalog listing after indexing. `name` is always lowercase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedEntry {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub entry: IndexedEntry,
    pub current_price: Option<f64>,
}

impl MatchResult {
    pub fn savings(&self) -> Result<Option<SavingsOutcome>, CompareError> {
        crate::comparator::compare(self.current_price, self.entry.price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSign {
    Cheaper,
    MoreExpensive,
    Equal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsOutcome {
    /// Current price minus catalog price; positive means the catalog is cheaper.
    pub delta: f64,
    pub percentage: f64,
    pub sign: PriceSign,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompareError {
    #[error("no usable keywords in product name")]
    EmptyQuery,
    #[error("invalid reference price: {0}")]
    InvalidPrice(f64),
    #[error("catalog record {index} is missing `{field}`")]
    MalformedCatalogEntry { index: usize, field: &'static str },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode catalog payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog payload is not a list of records")]
    NotAList,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScraperError {
    #[error("page {0} is not available")]
    Unavailable(String),
}
