// src/data/mod.rs

// 🌍 Standard library
use std::fmt;

// 📦 External crates
use async_trait;

// 🧠 Internal modules
mod file;
pub mod types;

pub use file::FileDataSource;
pub use types::{AllPrice, AllPriceSet, LoadError, RawRecordSet, UsdPrice, UsdPriceSet};

/// The two bundled record sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordSetName {
    UsdPrices,
    AllPrices,
}

impl RecordSetName {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UsdPrices => "usdPrices",
            Self::AllPrices => "allPrices",
        }
    }

    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for RecordSetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Loads and decodes one record set. Implementations may suspend while the
/// underlying storage resolves.
#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    async fn load(&self, name: RecordSetName) -> Result<RawRecordSet, LoadError>;
}
