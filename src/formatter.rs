// src/formatter.rs

use std::str::FromStr;

use rust_decimal::Decimal;

pub const DEFAULT_DECIMAL_PLACES: u32 = 8;
const GROUP_SEPARATOR: char = ',';
// rust_decimal keeps at most 28 fraction digits
const MAX_DECIMAL_PLACES: u32 = 28;

pub trait PriceFormatter: Send + Sync {
    fn format(&self, value: Decimal, decimal_places: u32) -> String;

    fn parse(&self, text: &str) -> Option<Decimal>;

    fn format_price(&self, value: Decimal) -> String {
        self.format(value, DEFAULT_DECIMAL_PLACES)
    }
}

/// en_US decimal style: `,` grouping, `.` fraction separator, exactly
/// `decimal_places` fraction digits, ties rounded to even.
#[derive(Debug, Clone, Copy, Default)]
pub struct CryptoFormatter;

impl CryptoFormatter {
    pub fn new() -> Self {
        Self
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

impl PriceFormatter for CryptoFormatter {
    fn format(&self, value: Decimal, decimal_places: u32) -> String {
        let places = decimal_places.min(MAX_DECIMAL_PLACES);
        let mut rounded = value.round_dp(places);
        rounded.rescale(places);
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }

        let text = rounded.to_string();
        let (sign, unsigned) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text.as_str()),
        };
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };

        let mut formatted = format!("{sign}{}", group_thousands(whole));
        if let Some(fraction) = fraction {
            formatted.push('.');
            formatted.push_str(fraction);
        }
        formatted
    }

    fn parse(&self, text: &str) -> Option<Decimal> {
        let cleaned: String = text
            .trim()
            .chars()
            .filter(|ch| *ch != GROUP_SEPARATOR)
            .collect();
        if cleaned.is_empty() {
            return None;
        }
        Decimal::from_str(&cleaned).ok()
    }
}
