pub mod catalog;
pub mod comparator;
pub mod config;
pub mod engine;
pub mod matcher;
pub mod model;
pub mod normalizer;
pub mod report;
pub mod scraper;
