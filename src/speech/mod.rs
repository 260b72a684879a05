pub mod profiles;
pub mod tts_engine;

pub use profiles::{
    ProfileTable,
    VoiceProfile,
    VoiceSelector,
};
pub use tts_engine::TtsEngine;

use crate::core::{
    SpeakRequest,
    SpeechError,
    VoicePreconditionError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    pub id: String,
    pub name: String,
    pub language: String,
}

/// The synthesis backend. Calls must return without waiting for the utterance to finish.
pub trait SpeechEngine {
    fn voices(&self) -> Result<Vec<VoiceInfo>, SpeechError>;

    fn configure(
        &mut self,
        profile: &VoiceProfile,
        voice: Option<&VoiceInfo>,
    ) -> Result<(), SpeechError>;

    /// Queues `text` behind anything already speaking.
    fn say(&mut self, text: &str) -> Result<(), SpeechError>;
}

impl<E: SpeechEngine + ?Sized> SpeechEngine for Box<E> {
    fn voices(&self) -> Result<Vec<VoiceInfo>, SpeechError> {
        (**self).voices()
    }

    fn configure(
        &mut self,
        profile: &VoiceProfile,
        voice: Option<&VoiceInfo>,
    ) -> Result<(), SpeechError> {
        (**self).configure(profile, voice)
    }

    fn say(&mut self, text: &str) -> Result<(), SpeechError> {
        (**self).say(text)
    }
}

pub struct VoiceDispatcher<E> {
    engine: E,
    profiles: ProfileTable,
    installed: Vec<VoiceInfo>,
}

impl<E: SpeechEngine> VoiceDispatcher<E> {
    pub fn new(engine: E, profiles: ProfileTable) -> Self {
        let installed = match engine.voices() {
            Ok(voices) => voices,
            Err(e) => {
                log::warn!("Could not list installed voices: {e}");
                Vec::new()
            }
        };
        log::info!("{} voices installed", installed.len());

        Self { engine, profiles, installed }
    }

    /// Asks the engine whether a voice for `language` is installed.
    pub fn ensure_installed(&self, language: &str) -> Result<(), VoicePreconditionError> {
        let selector = self
            .profiles
            .lookup(language)
            .map(|profile| profile.voice.clone())
            .unwrap_or_else(|| VoiceSelector::named(language));

        let voices = self.engine.voices().map_err(VoicePreconditionError::EngineUnavailable)?;

        match voices.iter().find(|voice| selector.matches(voice)) {
            Some(voice) => {
                log::info!("Found {language} voice: {}", voice.name);
                Ok(())
            }
            None => Err(VoicePreconditionError::MissingVoice { language: language.to_string() }),
        }
    }

    pub fn profile_for(&self, language: &str) -> &VoiceProfile {
        self.profiles.select(language)
    }

    pub fn speak(&mut self, word: &str, language: &str) -> Result<(), SpeechError> {
        let profile = self.profiles.select(language);
        let voice = self.installed.iter().find(|voice| profile.voice.matches(voice));
        if voice.is_none() {
            log::debug!("No installed voice for {}, using engine default", profile.language);
        }

        self.engine.configure(profile, voice)?;
        self.engine.say(word)
    }

    /// Speaks and logs failures; speech problems never interrupt the UI.
    pub fn dispatch(&mut self, request: &SpeakRequest) {
        log::debug!("Speaking '{}' ({})", request.word, request.language);
        if let Err(e) = self.speak(&request.word, &request.language) {
            log::error!("Failed to speak '{}': {e}", request.word);
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn installed_voices(&self) -> &[VoiceInfo] {
        &self.installed
    }
}
