// src/presentation/settings.rs

use std::sync::Arc;

use tracing::debug;

use crate::flags::FeatureFlagStore;
use crate::model::FeatureFlag;

/// Backs the settings toggle; every change is written straight through to
/// the flag store.
pub struct SettingsModel {
    flags: Arc<FeatureFlagStore>,
    support_eur: bool,
}

impl SettingsModel {
    pub fn new(flags: Arc<FeatureFlagStore>) -> Self {
        let support_eur = flags.get_value(FeatureFlag::SupportEur);
        Self { flags, support_eur }
    }

    pub fn support_eur(&self) -> bool {
        self.support_eur
    }

    pub fn set_support_eur(&mut self, value: bool) {
        debug!("Settings toggled supportEUR to {value}");
        self.support_eur = value;
        self.flags.update(FeatureFlag::SupportEur, value);
    }

    pub fn toggle_support_eur(&mut self) -> bool {
        let value = !self.support_eur;
        self.set_support_eur(value);
        value
    }
}
