use tts::Tts;

use super::{
    SpeechEngine,
    VoiceInfo,
    VoiceProfile,
};
use crate::core::SpeechError;

/// Words per minute that the backend's "normal" rate is assumed to correspond to.
const NORMAL_WPM: f32 = 200.0;

/// Native platform speech through the `tts` crate.
pub struct TtsEngine {
    tts: Tts,
    voices: Vec<tts::Voice>,
}

impl TtsEngine {
    pub fn new() -> Result<Self, SpeechError> {
        let tts = Tts::default()?;
        let voices = if tts.supported_features().voice { tts.voices()? } else { Vec::new() };
        Ok(Self { tts, voices })
    }
}

impl SpeechEngine for TtsEngine {
    fn voices(&self) -> Result<Vec<VoiceInfo>, SpeechError> {
        if !self.tts.supported_features().voice {
            return Err(SpeechError::Unsupported("listing voices"));
        }

        Ok(self
            .voices
            .iter()
            .map(|voice| VoiceInfo {
                id: voice.id(),
                name: voice.name(),
                language: voice.language().as_str().to_string(),
            })
            .collect())
    }

    fn configure(
        &mut self,
        profile: &VoiceProfile,
        voice: Option<&VoiceInfo>,
    ) -> Result<(), SpeechError> {
        let features = self.tts.supported_features();

        if features.rate {
            let rate = wpm_to_rate(
                profile.rate_wpm,
                self.tts.min_rate(),
                self.tts.normal_rate(),
                self.tts.max_rate(),
            );
            self.tts.set_rate(rate)?;
        }

        if features.volume {
            let volume =
                scale_volume(profile.volume, self.tts.min_volume(), self.tts.max_volume());
            self.tts.set_volume(volume)?;
        }

        if features.voice {
            if let Some(wanted) = voice {
                if let Some(native) = self.voices.iter().find(|v| v.id() == wanted.id) {
                    self.tts.set_voice(native)?;
                }
            }
        }

        Ok(())
    }

    fn say(&mut self, text: &str) -> Result<(), SpeechError> {
        self.tts.speak(text, false)?;
        Ok(())
    }
}

fn wpm_to_rate(wpm: u32, min: f32, normal: f32, max: f32) -> f32 {
    (normal * wpm as f32 / NORMAL_WPM).clamp(min, max)
}

fn scale_volume(volume: f32, min: f32, max: f32) -> f32 {
    min + volume.clamp(0.0, 1.0) * (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_mapping() {
        assert_eq!(wpm_to_rate(200, 0.1, 1.0, 10.0), 1.0);
        assert_eq!(wpm_to_rate(125, 0.1, 1.0, 10.0), 0.625);
        assert_eq!(wpm_to_rate(0, 0.1, 1.0, 10.0), 0.1);
        assert_eq!(wpm_to_rate(5000, 0.1, 1.0, 10.0), 10.0);
    }

    #[test]
    fn test_volume_mapping() {
        assert_eq!(scale_volume(1.0, 0.0, 1.0), 1.0);
        assert_eq!(scale_volume(0.5, 0.0, 100.0), 50.0);
        assert_eq!(scale_volume(3.0, 0.0, 1.0), 1.0);
    }
}
