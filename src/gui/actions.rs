use std::path::PathBuf;

// Widgets only record what the user asked for; the app applies it after drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    // Card
    Flip,
    FlipAndPlay,
    Play,
    Next,
    Prev,

    // Deck
    PickDeck,
    OpenDeck(PathBuf),
    ReloadDeck,
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
