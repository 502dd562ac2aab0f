// src/fetcher/mod.rs

// 📦 External crates
use async_trait;
use thiserror::Error;
use tracing::debug;

// 🧠 Internal modules
mod normalize;

use crate::data::{DataSource, LoadError, RecordSetName};
use crate::model::PriceRecord;

pub use normalize::normalize;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("❌ Price data not found: {0}")]
    NotFound(String),
    #[error("❌ Price data could not be decoded: {0}")]
    DecodeFailure(String),
    #[error("❌ Price fetch failed: {0}")]
    Unknown(String),
}

impl From<LoadError> for FetchError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::NotFound(name) => Self::NotFound(name),
            LoadError::DecodeFailure { name, reason } => {
                Self::DecodeFailure(format!("{name}: {reason}"))
            }
            LoadError::Unknown(reason) => Self::Unknown(reason),
        }
    }
}

#[async_trait::async_trait]
pub trait PriceFetcher: Send + Sync {
    async fn fetch(&self, support_eur: bool) -> Result<Vec<PriceRecord>, FetchError>;
}

/// Picks the record set for the flag value and normalizes it. No retries.
pub struct CryptoPriceFetcher<D> {
    source: D,
}

impl<D: DataSource> CryptoPriceFetcher<D> {
    pub fn new(source: D) -> Self {
        Self { source }
    }

    pub const fn record_set_for(support_eur: bool) -> RecordSetName {
        if support_eur {
            RecordSetName::AllPrices
        } else {
            RecordSetName::UsdPrices
        }
    }
}

#[async_trait::async_trait]
impl<D: DataSource> PriceFetcher for CryptoPriceFetcher<D> {
    async fn fetch(&self, support_eur: bool) -> Result<Vec<PriceRecord>, FetchError> {
        let name = Self::record_set_for(support_eur);
        debug!("Fetching {name}");
        let raw = self.source.load(name).await?;
        Ok(normalize(&raw))
    }
}
