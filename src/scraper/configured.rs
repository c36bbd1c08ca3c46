use crate::model::{RawProduct, ScraperError};
use crate::scraper::traits::{PageHandle, PriceScraper};

/// Serves products listed in the configuration; the page handle is the list position.
pub struct ConfiguredScraper {
    products: Vec<RawProduct>,
}

impl ConfiguredScraper {
    pub fn new(products: Vec<RawProduct>) -> Self {
        Self { products }
    }

    pub fn pages(&self) -> impl Iterator<Item = PageHandle> {
        (0..self.products.len()).map(PageHandle)
    }
}

#[async_trait::async_trait]
impl PriceScraper for ConfiguredScraper {
    async fn scrape(&self, page: &PageHandle) -> Result<RawProduct, ScraperError> {
        self.products
            .get(page.0)
            .cloned()
            .ok_or_else(|| ScraperError::Unavailable(page.0.to_string()))
    }
}
