use crate::catalog::payload::{parse_payload, CatalogRecord};
use crate::model::CatalogError;
use std::path::PathBuf;
use tracing::info;

/// Supplies the raw catalog for one comparison run.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<CatalogRecord>, CatalogError>;
}

/// Catalog payload stored as a JSON file on disk.
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl CatalogSource for FileCatalog {
    async fn load(&self) -> Result<Vec<CatalogRecord>, CatalogError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let records = parse_payload(&content)?;
        info!("Loaded {} catalog records from {}", records.len(), self.path.display());
        Ok(records)
    }
}
