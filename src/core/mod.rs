pub mod errors;
pub mod models;

pub use errors::{
    FlashcardError,
    LoadError,
    SpeechError,
    VoicePreconditionError,
};
pub use models::{
    Face,
    Flashcard,
    SpeakRequest,
    Translation,
};
