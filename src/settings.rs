//! Integration preferences
//!
//! Persisted separately from tuning in LocalStorage. These describe how the
//! hand tracker is configured and how its coordinates are read, not how the
//! game plays.

use serde::{Deserialize, Serialize};

use crate::consts::PALM_LANDMARK;
use crate::error::RunnerError;

/// Hand tracking and camera preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Coordinates ===
    /// Read hand x as `1 - x` (selfie view). Verify against the tracker in use.
    pub mirror_input: bool,
    /// Landmark index used as the palm centre
    pub palm_landmark: usize,

    // === Camera ===
    pub camera_width: u32,
    pub camera_height: u32,

    // === Tracker ===
    pub max_num_hands: u32,
    /// 0 = lite, 1 = full
    pub model_complexity: u32,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mirror_input: true,
            palm_landmark: PALM_LANDMARK,

            camera_width: 640,
            camera_height: 480,

            max_num_hands: 1,
            model_complexity: 1,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, RunnerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Change the mirroring convention and persist it
    pub fn set_mirror_input(&mut self, mirror: bool) -> Result<(), RunnerError> {
        self.mirror_input = mirror;
        log::info!("Mirrored hand input: {mirror}");
        self.save()
    }

    /// Load settings from LocalStorage, falling back to defaults
    pub fn load() -> Self {
        match storage::read() {
            Some(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from LocalStorage");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring stored settings: {e}");
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Persist settings to LocalStorage
    pub fn save(&self) -> Result<(), RunnerError> {
        let json = serde_json::to_string(self)?;
        storage::write(&json);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod storage {
    const STORAGE_KEY: &str = "gesture_runner_settings";

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }

    pub fn read() -> Option<String> {
        local_storage()?.get_item(STORAGE_KEY).ok().flatten()
    }

    pub fn write(json: &str) {
        match local_storage().map(|s| s.set_item(STORAGE_KEY, json)) {
            Some(Ok(())) => log::info!("Settings saved"),
            _ => log::warn!("Settings could not be written to LocalStorage"),
        }
    }
}

/// Native builds keep settings in memory only
#[cfg(not(target_arch = "wasm32"))]
mod storage {
    pub fn read() -> Option<String> {
        None
    }

    pub fn write(_json: &str) {}
}
