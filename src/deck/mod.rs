use std::{
    fs,
    io,
    ops::Index,
    path::Path,
};

use crate::core::{
    errors::MalformedCause,
    Flashcard,
    LoadError,
};

/// Ordered flashcards as read from disk. Never mutated after loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Flashcard>,
}

impl Deck {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self { cards }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Reads a JSON array of flashcards. A record missing any required field rejects the whole file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();

        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(LoadError::NotFound { path: path.to_path_buf() });
            }
            Err(e) => {
                return Err(LoadError::Malformed {
                    path: path.to_path_buf(),
                    source: MalformedCause::from(e),
                });
            }
        };

        Self::from_json(&json).map_err(|e| LoadError::Malformed {
            path: path.to_path_buf(),
            source: MalformedCause::from(e),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let cards: Vec<Flashcard> = serde_json::from_str(json)?;
        Ok(Self { cards })
    }

    /// Like [`Deck::load`], but logs the failure and hands back an empty deck alongside it.
    pub fn load_or_empty(path: impl AsRef<Path>) -> (Self, Option<LoadError>) {
        match Self::load(path.as_ref()) {
            Ok(deck) => {
                if deck.is_empty() {
                    log::warn!("Deck {} contains no cards", path.as_ref().display());
                } else {
                    log::info!("Loaded {} cards from {}", deck.len(), path.as_ref().display());
                }
                (deck, None)
            }
            Err(e) => {
                match &e {
                    LoadError::NotFound { .. } => log::error!("{e}"),
                    LoadError::Malformed { source, .. } => log::error!("{e} ({source})"),
                }
                (Self::empty(), Some(e))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Flashcard> {
        self.cards.get(index)
    }

    pub fn last_index(&self) -> Option<usize> {
        self.cards.len().checked_sub(1)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Flashcard> {
        self.cards.iter()
    }
}

impl Index<usize> for Deck {
    type Output = Flashcard;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Flashcard;
    type IntoIter = std::slice::Iter<'a, Flashcard>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const THREE_CARDS: &str = r#"[
        {"source_language": "English", "source_word": "Hello",
         "translation": {"target_language": "German", "target_word": "Hallo"}},
        {"source_language": "English", "source_word": "House",
         "translation": {"target_language": "German", "target_word": "Haus"}},
        {"source_language": "English", "source_word": "Dog",
         "translation": {"target_language": "German", "target_word": "Hund"}}
    ]"#;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_preserves_order() {
        let file = write_temp(THREE_CARDS);
        let deck = Deck::load(file.path()).unwrap();

        assert_eq!(deck.len(), 3);
        let words: Vec<&str> = deck.iter().map(|c| c.source_word.as_str()).collect();
        assert_eq!(words, vec!["Hello", "House", "Dog"]);
        assert_eq!(deck[2].translation.target_word, "Hund");
        assert_eq!(deck.last_index(), Some(2));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = Deck::load(&path).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.path(), &path);
        assert!(err.to_string().contains("not found"));

        let (deck, err) = Deck::load_or_empty(&path);
        assert!(deck.is_empty());
        assert!(matches!(err, Some(LoadError::NotFound { .. })));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let file = write_temp("[{\"source_language\": ");

        let err = Deck::load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
        assert!(err.to_string().contains("Error decoding JSON"));

        let (deck, err) = Deck::load_or_empty(file.path());
        assert!(deck.is_empty());
        assert!(matches!(err, Some(LoadError::Malformed { .. })));
    }

    #[test]
    fn test_missing_field_rejects_whole_deck() {
        let file = write_temp(
            r#"[
                {"source_language": "English", "source_word": "Hello",
                 "translation": {"target_language": "German", "target_word": "Hallo"}},
                {"source_language": "English", "source_word": "Cat",
                 "translation": {"target_language": "German"}}
            ]"#,
        );

        assert!(matches!(Deck::load(file.path()), Err(LoadError::Malformed { .. })));
    }

    #[test]
    fn test_empty_array_loads_empty_deck() {
        let file = write_temp("[]");
        let (deck, err) = Deck::load_or_empty(file.path());
        assert!(deck.is_empty());
        assert!(err.is_none());
        assert_eq!(deck.last_index(), None);
    }
}
