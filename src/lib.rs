pub mod core;
pub mod deck;
pub mod gui;
pub mod persistence;
pub mod session;
pub mod settings;
pub mod speech;

pub use crate::core::{
    Face,
    Flashcard,
    FlashcardError,
    LoadError,
    SpeakRequest,
    VoicePreconditionError,
};
pub use deck::Deck;
pub use session::Session;
pub use settings::Settings;
