use crate::catalog::payload::CatalogRecord;
use crate::model::{CompareError, IndexedEntry, NO_IMAGE};
use tracing::{debug, warn};
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Position of the record in the raw payload.
    pub index: usize,
    pub error: CompareError,
}

/// Indexed catalog, sorted by name. Malformed records are left out and listed in `skipped`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogIndex {
    pub entries: Vec<IndexedEntry>,
    pub skipped: Vec<SkippedRecord>,
}

impl CatalogIndex {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Indexes every well-formed record and counts the rest.
pub fn index(records: &[CatalogRecord]) -> CatalogIndex {
    let mut entries = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for (i, record) in records.iter().enumerate() {
        match project(i, record) {
            Ok(entry) => entries.push(entry),
            Err(error) => {
                debug!("Skipping catalog record: {}", error);
                skipped.push(SkippedRecord { index: i, error });
            }
        }
    }

    if !skipped.is_empty() {
        warn!(
            "Skipped {} malformed catalog records out of {}",
            skipped.len(),
            records.len()
        );
    }

    sort_by_name(&mut entries);
    CatalogIndex { entries, skipped }
}

/// Like [`index`], but the first malformed record fails the whole batch.
pub fn index_strict(records: &[CatalogRecord]) -> Result<Vec<IndexedEntry>, CompareError> {
    let mut entries = records
        .iter()
        .enumerate()
        .map(|(i, record)| project(i, record))
        .collect::<Result<Vec<_>, _>>()?;
    sort_by_name(&mut entries);
    Ok(entries)
}

fn project(index: usize, record: &CatalogRecord) -> Result<IndexedEntry, CompareError> {
    let malformed = |field| CompareError::MalformedCatalogEntry { index, field };

    let fields = record.fields().ok_or_else(|| malformed("record"))?;
    let id = record.id().ok_or_else(|| malformed("id"))?;
    let name = fields.name().ok_or_else(|| malformed("name"))?;
    let price = fields.price().ok_or_else(|| malformed("price"))?;

    Ok(IndexedEntry {
        id,
        name: name.to_lowercase(),
        price,
        image: fields.image_url().unwrap_or(NO_IMAGE).to_string(),
    })
}

/// Stable sort; accents only break ties between names that are otherwise equal.
pub fn sort_by_name(entries: &mut [IndexedEntry]) {
    entries.sort_by_cached_key(|e| (collation_key(&e.name), e.name.clone()));
}

/// Lowercase, canonically decomposed text with combining marks removed.
pub fn collation_key(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .flat_map(|c| c.nfd())
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect()
}
