use crate::model::{RawProduct, ScraperError};

/// Identifies the page a product is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHandle(pub usize);

#[async_trait::async_trait]
pub trait PriceScraper: Send + Sync {
    async fn scrape(&self, page: &PageHandle) -> Result<RawProduct, ScraperError>;
}
