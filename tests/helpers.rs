#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pricelist::controller::{ControllerHandle, ControllerSettings, SearchRefreshController};
use pricelist::fetcher::{FetchError, PriceFetcher};
use pricelist::flags::FeatureFlagStore;
use pricelist::formatter::PriceFormatter;
use pricelist::model::PriceRecord;
use rust_decimal::Decimal;

pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn record(id: i64, name: &str, usd: i64, eur: Option<i64>) -> PriceRecord {
    PriceRecord::new(id, name, Decimal::from(usd), eur.map(Decimal::from))
}

pub fn usd_set() -> Vec<PriceRecord> {
    vec![record(1, "BTC", 100, None), record(2, "ETH", 50, None)]
}

pub fn all_set() -> Vec<PriceRecord> {
    vec![record(1, "BTC", 100, Some(90)), record(2, "ETH", 50, Some(45))]
}

pub enum Step {
    Respond {
        after: Duration,
        result: Result<Vec<PriceRecord>, FetchError>,
    },
    Panic,
}

impl Step {
    pub fn ok(after_ms: u64, items: Vec<PriceRecord>) -> Self {
        Self::Respond {
            after: Duration::from_millis(after_ms),
            result: Ok(items),
        }
    }

    pub fn err(after_ms: u64, err: FetchError) -> Self {
        Self::Respond {
            after: Duration::from_millis(after_ms),
            result: Err(err),
        }
    }
}

/// Plays back one step per call; once the script runs out every call returns
/// the set matching the requested flag immediately.
#[derive(Default)]
pub struct ScriptedFetcher {
    steps: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<bool>>,
}

impl ScriptedFetcher {
    pub fn new(steps: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            steps: Mutex::new(steps.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// The `support_eur` value of every call so far.
    pub fn calls(&self) -> Vec<bool> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PriceFetcher for ScriptedFetcher {
    async fn fetch(&self, support_eur: bool) -> Result<Vec<PriceRecord>, FetchError> {
        self.calls.lock().unwrap().push(support_eur);
        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(Step::Respond { after, result }) => {
                tokio::time::sleep(after).await;
                result
            }
            Some(Step::Panic) => panic!("scripted fetch panic"),
            None if support_eur => Ok(all_set()),
            None => Ok(usd_set()),
        }
    }
}

pub fn spawn_controller(
    fetcher: Arc<ScriptedFetcher>,
    flags: &FeatureFlagStore,
) -> ControllerHandle {
    SearchRefreshController::spawn(fetcher, flags, ControllerSettings::default())
}

pub struct MockFormatter;

impl PriceFormatter for MockFormatter {
    fn format(&self, value: Decimal, _decimal_places: u32) -> String {
        format!("formatted_{value}")
    }

    fn parse(&self, text: &str) -> Option<Decimal> {
        text.strip_prefix("formatted_")?.parse().ok()
    }
}
