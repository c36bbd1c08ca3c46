// Catalog module: raw payload decoding, indexing and the source capability.

pub mod indexer;
pub mod payload;
pub mod source;

pub use indexer::{index, index_strict, CatalogIndex, SkippedRecord};
pub use payload::{parse_payload, CatalogRecord};
pub use source::{CatalogSource, FileCatalog};
