#![allow(dead_code)]

use bottle_sniper::catalog::{index, CatalogRecord};
use bottle_sniper::model::{IndexedEntry, NormalizedQuery};

pub fn catalog(records: &[(&str, &str, f64)]) -> Vec<IndexedEntry> {
    let records: Vec<_> = records
        .iter()
        .map(|(id, name, price)| CatalogRecord::flat(id, name, *price, None))
        .collect();
    index(&records).entries
}

pub fn query(words: &[&str]) -> NormalizedQuery {
    NormalizedQuery {
        keywords: words.iter().map(|w| w.to_string()).collect(),
    }
}

pub fn ids(entries: &[&IndexedEntry]) -> Vec<String> {
    entries.iter().map(|e| e.id.clone()).collect()
}
