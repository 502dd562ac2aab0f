// src/presentation/list.rs

use std::sync::Arc;

use crate::formatter::PriceFormatter;
use crate::model::{DisplaySnapshot, PriceRecord};

/// Turns list rows into text. Holds no state of its own; whether EUR is
/// shown comes from the snapshot being rendered.
pub struct ListPresenter {
    formatter: Arc<dyn PriceFormatter>,
}

impl ListPresenter {
    pub fn new(formatter: Arc<dyn PriceFormatter>) -> Self {
        Self { formatter }
    }

    pub fn price_text(&self, record: &PriceRecord, show_eur_price: bool) -> String {
        match record.eur_price {
            Some(eur) if show_eur_price => format!(
                "USD: {} EUR: {}",
                self.formatter.format_price(record.usd_price),
                self.formatter.format_price(eur)
            ),
            _ => format!("Price: {}", self.usd_price(Some(record))),
        }
    }

    pub fn usd_price(&self, record: Option<&PriceRecord>) -> String {
        record
            .map(|r| self.formatter.format_price(r.usd_price))
            .unwrap_or_default()
    }

    pub fn eur_price(&self, record: Option<&PriceRecord>) -> String {
        record
            .and_then(|r| r.eur_price)
            .map(|eur| self.formatter.format_price(eur))
            .unwrap_or_default()
    }

    /// One `name  price` line per displayed item.
    pub fn rows(&self, snapshot: &DisplaySnapshot) -> Vec<String> {
        snapshot
            .items
            .iter()
            .map(|record| {
                format!(
                    "{:<6} {}",
                    record.name,
                    self.price_text(record, snapshot.show_eur_price)
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::testing::MockFormatter;
    use rust_decimal::Decimal;

    fn presenter() -> ListPresenter {
        ListPresenter::new(Arc::new(MockFormatter))
    }

    fn btc(eur: Option<i64>) -> PriceRecord {
        PriceRecord::new(1, "BTC", Decimal::from(100), eur.map(Decimal::from))
    }

    #[test]
    fn test_usd_only_text() {
        assert_eq!(presenter().price_text(&btc(None), false), "Price: formatted_100");
    }

    #[test]
    fn test_eur_text_when_flag_on() {
        assert_eq!(
            presenter().price_text(&btc(Some(90)), true),
            "USD: formatted_100 EUR: formatted_90"
        );
    }

    #[test]
    fn test_eur_hidden_when_flag_off() {
        assert_eq!(presenter().price_text(&btc(Some(90)), false), "Price: formatted_100");
    }

    #[test]
    fn test_flag_on_without_eur_price_falls_back() {
        assert_eq!(presenter().price_text(&btc(None), true), "Price: formatted_100");
    }

    #[test]
    fn test_missing_records_render_empty() {
        let presenter = presenter();
        assert_eq!(presenter.usd_price(None), "");
        assert_eq!(presenter.eur_price(None), "");
        assert_eq!(presenter.eur_price(Some(&btc(None))), "");
        assert_eq!(presenter.eur_price(Some(&btc(Some(90)))), "formatted_90");
    }

    #[test]
    fn test_rows_follow_snapshot_order() {
        let snapshot = DisplaySnapshot {
            items: vec![
                btc(Some(90)),
                PriceRecord::new(2, "ETH", Decimal::from(50), Some(Decimal::from(45))),
            ],
            show_eur_price: true,
            ..DisplaySnapshot::default()
        };

        let rows = presenter().rows(&snapshot);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("BTC"));
        assert!(rows[1].ends_with("EUR: formatted_45"));
    }
}
