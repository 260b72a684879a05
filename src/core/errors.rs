use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashcardError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    VoicePrecondition(#[from] VoicePreconditionError),

    #[error(transparent)]
    Speech(#[from] SpeechError),
}

impl From<std::io::Error> for FlashcardError {
    fn from(error: std::io::Error) -> Self {
        FlashcardError::Io(Box::new(error))
    }
}

/// Why a deck could not be read. Both cases are recovered by falling back to an empty deck.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File {} not found.", .path.display())]
    NotFound { path: PathBuf },

    #[error("Error decoding JSON from file {}.", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: MalformedCause,
    },
}

impl LoadError {
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::NotFound { path } => path,
            LoadError::Malformed { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }
}

#[derive(Error, Debug)]
pub enum MalformedCause {
    #[error("unreadable: {0}")]
    Io(Box<std::io::Error>),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::io::Error> for MalformedCause {
    fn from(error: std::io::Error) -> Self {
        MalformedCause::Io(Box::new(error))
    }
}

/// Fatal before the window opens.
#[derive(Error, Debug)]
pub enum VoicePreconditionError {
    #[error("Speech engine could not be started: {0}")]
    EngineUnavailable(#[source] SpeechError),

    #[error("{language} voice is not installed in this device")]
    MissingVoice { language: String },
}

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("TTS error: {0}")]
    Backend(Box<tts::Error>),

    #[error("Unsupported by the speech backend: {0}")]
    Unsupported(&'static str),
}

impl From<tts::Error> for SpeechError {
    fn from(error: tts::Error) -> Self {
        SpeechError::Backend(Box::new(error))
    }
}
