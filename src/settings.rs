use std::{
    path::PathBuf,
    time::Duration,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    persistence::load_json_or_default,
    session::SessionTiming,
    speech::{
        ProfileTable,
        VoiceProfile,
    },
};

pub const SETTINGS_FILE: &str = "settings.json";
pub const DEFAULT_DECK_PATH: &str = "./data/deutsch_translations.json";

/// Read-only configuration from `settings.json` in the app data directory.
/// Every field is optional in the file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub deck_path: PathBuf,
    pub required_language: String,
    pub default_language: String,
    pub voices: Vec<VoiceProfile>,
    pub animation: AnimationSettings,
    pub play_delay_ms: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct AnimationSettings {
    pub steps: u32,
    pub interval_ms: u64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self { steps: 10, interval_ms: 20 }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            deck_path: PathBuf::from(DEFAULT_DECK_PATH),
            required_language: "German".to_string(),
            default_language: "English".to_string(),
            voices: vec![VoiceProfile::english(), VoiceProfile::german()],
            animation: AnimationSettings::default(),
            play_delay_ms: 10,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        load_json_or_default(SETTINGS_FILE)
    }

    pub fn timing(&self) -> SessionTiming {
        SessionTiming {
            animation_steps: self.animation.steps,
            step_interval: Duration::from_millis(self.animation.interval_ms),
            play_delay: Duration::from_millis(self.play_delay_ms),
        }
    }

    pub fn profile_table(&self) -> ProfileTable {
        ProfileTable::new(self.voices.clone(), &self.default_language)
    }
}
