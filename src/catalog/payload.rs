// Raw catalog records as delivered by the pricing service
use crate::model::CatalogError;
use serde::Deserialize;
use serde_json::Value;

/// Listing fields. Kept loosely typed so that one bad record does not fail
/// the whole payload; the indexer decides what is malformed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordFields {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default, rename = "imageUrl", alias = "image_url", alias = "image")]
    pub image_url: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CatalogRecord {
    /// `{ "_id": ..., "_source": { name, price, imageUrl } }`
    Hit {
        #[serde(rename = "_id", default)]
        id: Option<Value>,
        #[serde(rename = "_source")]
        source: RecordFields,
    },
    /// `{ id, name, price, imageUrl }`
    Flat {
        #[serde(default)]
        id: Option<Value>,
        #[serde(flatten)]
        fields: RecordFields,
    },
    /// Anything that is not an object.
    Invalid(Value),
}

impl CatalogRecord {
    pub fn flat(id: &str, name: &str, price: f64, image_url: Option<&str>) -> Self {
        CatalogRecord::Flat {
            id: Some(Value::from(id)),
            fields: RecordFields {
                name: Some(Value::from(name)),
                price: Some(Value::from(price)),
                image_url: image_url.map(Value::from),
            },
        }
    }

    pub fn id(&self) -> Option<String> {
        match self {
            CatalogRecord::Hit { id, .. } | CatalogRecord::Flat { id, .. } => match id.as_ref()? {
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            },
            CatalogRecord::Invalid(_) => None,
        }
    }

    pub fn fields(&self) -> Option<&RecordFields> {
        match self {
            CatalogRecord::Hit { source, .. } => Some(source),
            CatalogRecord::Flat { fields, .. } => Some(fields),
            CatalogRecord::Invalid(_) => None,
        }
    }
}

impl RecordFields {
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().and_then(Value::as_str)
    }

    pub fn price(&self) -> Option<f64> {
        self.price
            .as_ref()
            .and_then(Value::as_f64)
            .filter(|p| p.is_finite())
    }

    /// Blank urls count as missing.
    pub fn image_url(&self) -> Option<&str> {
        self.image_url
            .as_ref()
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Decodes a payload: a bare array, `{ "hits": [...] }`,
/// `{ "hits": { "hits": [...] } }` or `{ "listings": [...] }`.
pub fn parse_payload(content: &str) -> Result<Vec<CatalogRecord>, CatalogError> {
    let value: Value = serde_json::from_str(content)?;
    let list = match value {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("hits").or_else(|| obj.remove("listings")) {
            Some(Value::Array(items)) => items,
            Some(Value::Object(mut inner)) => match inner.remove("hits") {
                Some(Value::Array(items)) => items,
                _ => return Err(CatalogError::NotAList),
            },
            _ => return Err(CatalogError::NotAList),
        },
        _ => return Err(CatalogError::NotAList),
    };

    list.into_iter()
        .map(|item| serde_json::from_value(item).map_err(CatalogError::from))
        .collect()
}
