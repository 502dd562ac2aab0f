// src/model/mod.rs

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

/// A price entry as the list and detail screens see it, whichever record set
/// it was read from. `eur_price` is `None` for the USD-only set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRecord {
    pub id: i64,
    pub name: String,
    pub usd_price: Decimal,
    pub eur_price: Option<Decimal>,
}

impl PriceRecord {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, usd_price: Decimal, eur_price: Option<Decimal>) -> Self {
        Self {
            id,
            name: name.into(),
            usd_price,
            eur_price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Deposit,
    Withdrawal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureFlag {
    SupportEur,
}

impl FeatureFlag {
    /// Value a flag holds before anything has been written to the store.
    #[must_use]
    pub const fn default_value(self) -> bool {
        match self {
            Self::SupportEur => false,
        }
    }
}

impl FromStr for FeatureFlag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "supporteur" => Ok(Self::SupportEur),
            _ => Err(()),
        }
    }
}

impl fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::SupportEur => "supportEUR",
        };
        write!(f, "{s}")
    }
}

/// Inputs that decide which record set a fetch asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchQuery {
    pub search_text: String,
    pub support_eur: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerPhase {
    #[default]
    Idle,
    Fetching,
    Ready,
}

impl fmt::Display for ControllerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "Idle",
            Self::Fetching => "Fetching",
            Self::Ready => "Ready",
        };
        write!(f, "{s}")
    }
}

/// What the list screen renders. Only the controller writes it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplaySnapshot {
    pub items: Vec<PriceRecord>,
    pub is_loading: bool,
    pub show_eur_price: bool,
    pub phase: ControllerPhase,
}
