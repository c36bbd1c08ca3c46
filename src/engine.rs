// Runs one product through Normalizer -> Matcher -> Comparator
use crate::config::MatchConfig;
use crate::matcher::Matcher;
use crate::model::{
    CompareError, IndexedEntry, MatchResult, NormalizedQuery, RawProduct, SavingsOutcome,
};
use crate::normalizer::Normalizer;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonStatus {
    /// Nothing usable was left of the product name.
    NoQuery,
    NoMatches,
    Matches,
}

/// One matched listing, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<SavingsOutcome>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub product: RawProduct,
    pub query: NormalizedQuery,
    pub status: ComparisonStatus,
    pub rows: Vec<ComparisonRow>,
}

pub struct Engine {
    normalizer: Normalizer,
    matcher: Matcher,
    product_url_base: String,
}

impl Engine {
    pub fn new(cfg: &MatchConfig, product_url_base: impl Into<String>) -> Self {
        Self {
            normalizer: Normalizer::new(cfg),
            matcher: Matcher::new(cfg),
            product_url_base: product_url_base.into(),
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Matches without annotating savings.
    pub fn match_product(&self, product: &RawProduct, catalog: &[IndexedEntry]) -> Vec<MatchResult> {
        let query = self.normalizer.normalize(&product.name);
        self.matcher
            .find_matches(&query, catalog)
            .into_iter()
            .map(|entry| MatchResult {
                entry: entry.clone(),
                current_price: product.price,
            })
            .collect()
    }

    pub fn compare_product(
        &self,
        product: &RawProduct,
        catalog: &[IndexedEntry],
    ) -> Result<Comparison, CompareError> {
        let query = self.normalizer.normalize(&product.name);

        if let Err(e) = query.ensure_usable() {
            info!("{}: {:?}", e, product.name);
            return Ok(Comparison {
                product: product.clone(),
                query,
                status: ComparisonStatus::NoQuery,
                rows: Vec::new(),
            });
        }

        info!("Searching for: {}", query.text());
        let matches = self.matcher.find_matches(&query, catalog);
        debug!(
            "{} of {} catalog entries cover at least {} keywords",
            matches.len(),
            catalog.len(),
            self.matcher.required_matches(query.keywords.len())
        );

        let rows = matches
            .into_iter()
            .map(|entry| -> Result<ComparisonRow, CompareError> {
                let result = MatchResult {
                    entry: entry.clone(),
                    current_price: product.price,
                };
                let savings = result.savings()?;
                Ok(self.row(result.entry, savings))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let status = if rows.is_empty() {
            ComparisonStatus::NoMatches
        } else {
            ComparisonStatus::Matches
        };
        info!("Found {} matching listings", rows.len());

        Ok(Comparison {
            product: product.clone(),
            query,
            status,
            rows,
        })
    }

    fn row(&self, entry: IndexedEntry, savings: Option<SavingsOutcome>) -> ComparisonRow {
        ComparisonRow {
            link: format!("{}{}", self.product_url_base, entry.id),
            id: entry.id,
            name: entry.name,
            price: entry.price,
            image: entry.image,
            savings,
        }
    }
}
