// src/controller/filter.rs

use crate::model::PriceRecord;

/// Items whose name contains `query`, ignoring case, in input order.
/// An empty query keeps everything.
pub fn filter_items(items: &[PriceRecord], query: &str) -> Vec<PriceRecord> {
    if query.is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
