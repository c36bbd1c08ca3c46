use crate::model::{ConfigError, RawProduct};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_MIN_MATCH_RATIO: f64 = 0.7;
pub const DEFAULT_MAX_KEYWORDS: usize = 5;
pub const DEFAULT_PRODUCT_URL_BASE: &str = "https://www.baxus.co/asset/";

/// Knobs for the Normalizer and Matcher.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub min_match_ratio: f64,
    pub max_keywords: usize,
    /// Drop repeated keywords before they are counted.
    pub dedupe_keywords: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_match_ratio: DEFAULT_MIN_MATCH_RATIO,
            max_keywords: DEFAULT_MAX_KEYWORDS,
            dedupe_keywords: false,
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_match_ratio > 0.0 && self.min_match_ratio <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "min_match_ratio must be in (0, 1], got {}",
                self.min_match_ratio
            )));
        }
        if self.max_keywords == 0 {
            return Err(ConfigError::Invalid("max_keywords must be at least 1".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub catalog_path: String,
    #[serde(default = "default_product_url_base")]
    pub product_url_base: String,
    #[serde(default)]
    pub matching: MatchConfig,
    #[serde(default)]
    pub products: Vec<RawProduct>,
}

fn default_product_url_base() -> String {
    DEFAULT_PRODUCT_URL_BASE.to_string()
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    config.matching.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_sections() {
        let cfg = parse_config(r#"{ "catalog_path": "listings.json" }"#).unwrap();
        assert_eq!(cfg.matching, MatchConfig::default());
        assert_eq!(cfg.product_url_base, DEFAULT_PRODUCT_URL_BASE);
        assert!(cfg.products.is_empty());
    }

    #[test]
    fn products_accept_missing_price() {
        let cfg = parse_config(
            r#"{
                "catalog_path": "listings.json",
                "matching": { "max_keywords": 3 },
                "products": [
                    { "name": "Blue Bottle Rum", "price": 42.5 },
                    { "name": "Mystery Gin" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.matching.max_keywords, 3);
        assert_eq!(cfg.matching.min_match_ratio, DEFAULT_MIN_MATCH_RATIO);
        assert_eq!(cfg.products[0].price, Some(42.5));
        assert_eq!(cfg.products[1].price, None);
    }

    #[test]
    fn rejects_out_of_range_ratio() {
        let err = parse_config(r#"{ "catalog_path": "x", "matching": { "min_match_ratio": 1.5 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_zero_keywords() {
        let err = parse_config(r#"{ "catalog_path": "x", "matching": { "max_keywords": 0 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn surfaces_parse_errors() {
        assert!(matches!(parse_config("{"), Err(ConfigError::Parse(_))));
    }
}
