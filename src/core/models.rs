use serde::{
    Deserialize,
    Serialize,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub source_language: String, // e.g. "English"
    pub source_word: String,     // Shown on the front face
    pub translation: Translation,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub target_language: String,
    pub target_word: String, // Shown on the back face
}

impl Flashcard {
    pub fn new(
        source_language: impl Into<String>,
        source_word: impl Into<String>,
        target_language: impl Into<String>,
        target_word: impl Into<String>,
    ) -> Self {
        Flashcard {
            source_language: source_language.into(),
            source_word: source_word.into(),
            translation: Translation {
                target_language: target_language.into(),
                target_word: target_word.into(),
            },
        }
    }

    /// The (word, language label) pair shown on `face`.
    pub fn side(&self, face: Face) -> (&str, &str) {
        match face {
            Face::Front => (&self.source_word, &self.source_language),
            Face::Back => (&self.translation.target_word, &self.translation.target_language),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Face {
    #[default]
    Front,
    Back,
}

impl Face {
    pub fn flipped(self) -> Self {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    pub fn is_back(self) -> bool {
        self == Face::Back
    }
}

/// A request for the voice dispatcher, produced by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakRequest {
    pub word: String,
    pub language: String,
}

impl SpeakRequest {
    pub fn for_face(card: &Flashcard, face: Face) -> Self {
        let (word, language) = card.side(face);
        SpeakRequest { word: word.to_string(), language: language.to_string() }
    }
}
