// src/fetcher/normalize.rs

use crate::data::{AllPrice, RawRecordSet, UsdPrice};
use crate::model::PriceRecord;

impl From<&UsdPrice> for PriceRecord {
    fn from(price: &UsdPrice) -> Self {
        Self {
            id: price.id,
            name: price.name.clone(),
            usd_price: price.usd,
            eur_price: None,
        }
    }
}

impl From<&AllPrice> for PriceRecord {
    fn from(price: &AllPrice) -> Self {
        Self {
            id: price.id,
            name: price.name.clone(),
            usd_price: price.price.usd,
            eur_price: Some(price.price.eur),
        }
    }
}

/// Flattens either on-disk shape into `PriceRecord`s, keeping source order.
pub fn normalize(records: &RawRecordSet) -> Vec<PriceRecord> {
    match records {
        RawRecordSet::UsdPrices(set) => set.data.iter().map(PriceRecord::from).collect(),
        RawRecordSet::AllPrices(set) => set.data.iter().map(PriceRecord::from).collect(),
    }
}
