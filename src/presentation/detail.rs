// src/presentation/detail.rs

use std::sync::Arc;

use crate::flags::FeatureFlagStore;
use crate::formatter::PriceFormatter;
use crate::model::{FeatureFlag, PriceRecord};

const MISSING_PRICE: &str = "--";

/// State behind the single-coin screen. Unlike the list it follows the flag
/// directly, with no fetch in between. The flag is read from the store on
/// each call, so nothing queues up while the screen is idle.
pub struct DetailPresenter {
    record: PriceRecord,
    formatter: Arc<dyn PriceFormatter>,
    flags: Arc<FeatureFlagStore>,
}

impl DetailPresenter {
    pub fn new(
        record: PriceRecord,
        formatter: Arc<dyn PriceFormatter>,
        flags: Arc<FeatureFlagStore>,
    ) -> Self {
        Self {
            record,
            formatter,
            flags,
        }
    }

    pub fn record(&self) -> &PriceRecord {
        &self.record
    }

    pub fn show_eur_price(&self) -> bool {
        self.flags.get_value(FeatureFlag::SupportEur)
    }

    pub fn formatted_usd_price(&self) -> String {
        self.formatter.format_price(self.record.usd_price)
    }

    pub fn formatted_eur_price(&self) -> String {
        match self.record.eur_price {
            Some(eur) => self.formatter.format_price(eur),
            None => MISSING_PRICE.to_string(),
        }
    }
}
