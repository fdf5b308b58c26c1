//! Player preferences
//!
//! Persisted separately from the best score, as JSON under its own key.

use serde::{Deserialize, Serialize};

use crate::persistence::ScoreStore;
use crate::sim::Skin;

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Character drawn for the player
    pub skin: Skin,
}

impl Settings {
    /// Store key
    pub const STORAGE_KEY: &'static str = "flappyBonkSettings";

    /// Load settings, falling back to defaults on any problem
    pub fn load(store: &dyn ScoreStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring corrupt settings: {}", e);
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Settings unavailable ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings; failures are logged only
    pub fn save(&self, store: &mut dyn ScoreStore) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not encode settings: {}", e);
                return;
            }
        };
        match store.set(Self::STORAGE_KEY, &json) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Could not save settings: {}", e),
        }
    }
}
