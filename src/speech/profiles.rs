use serde::{
    Deserialize,
    Serialize,
};

use super::VoiceInfo;

/// Identifies an installed voice either by language tag or by a fragment of its display name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct VoiceSelector {
    pub locale: String,    // e.g. "de-DE", only the primary subtag is compared
    pub name_hint: String, // e.g. "German", matched case-insensitively against the voice name
}

impl VoiceSelector {
    pub fn new(locale: impl Into<String>, name_hint: impl Into<String>) -> Self {
        Self { locale: locale.into(), name_hint: name_hint.into() }
    }

    pub fn named(name_hint: impl Into<String>) -> Self {
        Self { locale: String::new(), name_hint: name_hint.into() }
    }

    pub fn matches(&self, voice: &VoiceInfo) -> bool {
        let by_name = !self.name_hint.is_empty()
            && voice.name.to_lowercase().contains(&self.name_hint.to_lowercase());

        let by_locale = match (primary_subtag(&self.locale), primary_subtag(&voice.language)) {
            (Some(wanted), Some(actual)) => wanted == actual,
            _ => false,
        };

        by_name || by_locale
    }
}

fn primary_subtag(tag: &str) -> Option<String> {
    tag.split(['-', '_']).next().filter(|s| !s.is_empty()).map(str::to_lowercase)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct VoiceProfile {
    pub language: String,
    pub rate_wpm: u32,
    pub volume: f32,
    pub voice: VoiceSelector,
}

impl Default for VoiceProfile {
    fn default() -> Self {
        Self::english()
    }
}

impl VoiceProfile {
    pub fn english() -> Self {
        Self {
            language: "English".to_string(),
            rate_wpm: 125,
            volume: 1.0,
            voice: VoiceSelector::new("en-US", "English"),
        }
    }

    pub fn german() -> Self {
        Self {
            language: "German".to_string(),
            rate_wpm: 125,
            volume: 1.0,
            voice: VoiceSelector::new("de-DE", "German"),
        }
    }
}

/// Language label to voice profile, with a fallback for labels nobody configured.
#[derive(Debug, Clone)]
pub struct ProfileTable {
    profiles: Vec<VoiceProfile>,
    default_index: usize,
}

impl ProfileTable {
    /// If `default_language` has no profile, the built-in English profile becomes the default.
    pub fn new(mut profiles: Vec<VoiceProfile>, default_language: &str) -> Self {
        let default_index = match position_of(&profiles, default_language) {
            Some(i) => i,
            None => {
                log::warn!(
                    "No voice profile for default language '{default_language}', using English"
                );
                profiles.push(VoiceProfile::english());
                profiles.len() - 1
            }
        };

        Self { profiles, default_index }
    }

    pub fn lookup(&self, language: &str) -> Option<&VoiceProfile> {
        position_of(&self.profiles, language).map(|i| &self.profiles[i])
    }

    /// Never fails: unknown labels get the default profile.
    pub fn select(&self, language: &str) -> &VoiceProfile {
        self.lookup(language).unwrap_or_else(|| {
            log::debug!("Unknown language '{language}', falling back to default voice");
            self.default_profile()
        })
    }

    pub fn default_profile(&self) -> &VoiceProfile {
        &self.profiles[self.default_index]
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::new(vec![VoiceProfile::english(), VoiceProfile::german()], "English")
    }
}

fn position_of(profiles: &[VoiceProfile], language: &str) -> Option<usize> {
    let language = language.trim();
    profiles.iter().position(|p| p.language.eq_ignore_ascii_case(language))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(name: &str, language: &str) -> VoiceInfo {
        VoiceInfo { id: name.to_string(), name: name.to_string(), language: language.to_string() }
    }

    #[test]
    fn test_select_known_and_unknown() {
        let table = ProfileTable::default();

        assert_eq!(table.select("German").language, "German");
        assert_eq!(table.select("german").language, "German");
        assert_eq!(table.select("Nonexistent").language, "English");
        assert!(table.lookup("Nonexistent").is_none());
    }

    #[test]
    fn test_missing_default_adds_english() {
        let table = ProfileTable::new(vec![VoiceProfile::german()], "Klingon");
        assert_eq!(table.len(), 2);
        assert_eq!(table.default_profile().language, "English");
        assert_eq!(table.select("French").language, "English");
    }

    #[test]
    fn test_selector_matching() {
        let german = VoiceSelector::new("de-DE", "German");

        assert!(german.matches(&voice("Microsoft Hedda Desktop - German", "de-DE")));
        assert!(german.matches(&voice("Anna", "de_AT")));
        assert!(german.matches(&voice("eSpeak german", "")));
        assert!(!german.matches(&voice("Microsoft David Desktop - English", "en-US")));

        let unnamed = VoiceSelector::new("", "");
        assert!(!unnamed.matches(&voice("Anything", "de-DE")));
    }
}
