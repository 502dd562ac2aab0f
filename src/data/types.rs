// src/data/types.rs

// 📦 External crates
use rust_decimal::Decimal;
use serde::Deserialize;

// 🧠 Internal modules
use super::RecordSetName;
use crate::model::Tag;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("❌ Record set not found: {0}")]
    NotFound(String),
    #[error("❌ Failed to decode {name}: {reason}")]
    DecodeFailure { name: String, reason: String },
    #[error("❌ {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsdPrice {
    pub id: i64,
    pub name: String,
    pub usd: Decimal,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsdPriceSet {
    pub data: Vec<UsdPrice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricePair {
    pub usd: Decimal,
    pub eur: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AllPrice {
    pub id: i64,
    pub name: String,
    pub price: PricePair,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AllPriceSet {
    pub data: Vec<AllPrice>,
}

/// A decoded record set, still in its on-disk shape.
#[derive(Debug, Clone)]
pub enum RawRecordSet {
    UsdPrices(UsdPriceSet),
    AllPrices(AllPriceSet),
}

impl RawRecordSet {
    /// Decodes `text` as the shape `name` is stored in.
    pub fn decode(name: RecordSetName, text: &str) -> Result<Self, LoadError> {
        let decode_failure = |e: serde_json::Error| LoadError::DecodeFailure {
            name: name.to_string(),
            reason: e.to_string(),
        };
        match name {
            RecordSetName::UsdPrices => serde_json::from_str(text)
                .map(Self::UsdPrices)
                .map_err(decode_failure),
            RecordSetName::AllPrices => serde_json::from_str(text)
                .map(Self::AllPrices)
                .map_err(decode_failure),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::UsdPrices(set) => set.data.len(),
            Self::AllPrices(set) => set.data.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
