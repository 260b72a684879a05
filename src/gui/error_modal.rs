use std::error::Error as _;

use eframe::egui;

use super::actions::{
    ActionQueue,
    UiAction,
};
use crate::core::LoadError;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct ErrorData {
    pub title: String,
    pub message: String,
    pub details: Option<String>,
}

impl ErrorData {
    pub fn from_load_error(error: &LoadError) -> Self {
        let title = match error {
            LoadError::NotFound { .. } => "Deck not found",
            LoadError::Malformed { .. } => "Deck could not be read",
        };

        Self {
            title: title.to_string(),
            message: format!(
                "{error}\nNavigation and playback stay disabled until a valid deck is opened."
            ),
            details: error.source().map(|cause| cause.to_string()),
        }
    }
}

/// Shown when a deck fails to load; offers to pick another file.
pub struct ErrorModal {
    open: bool,
    data: ErrorData,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self { open: false, data: ErrorData::default() }
    }

    pub fn show_load_error(&mut self, error: &LoadError) {
        self.data = ErrorData::from_load_error(error);
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self, ctx: &egui::Context, actions: &mut ActionQueue) {
        if !self.open {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("load_error_modal")).show(ctx, |ui| {
            ui.set_width(450.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(24.0).color(egui::Color32::RED));
                ui.label(egui::RichText::new(&self.data.title).size(18.0).strong());
            });

            ui.add_space(10.0);
            ui.label(egui::RichText::new(&self.data.message).size(14.0));

            if let Some(details) = &self.data.details {
                ui.add_space(10.0);
                ui.collapsing("Technical Details", |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut details.as_str())
                            .desired_width(f32::INFINITY)
                            .desired_rows(4)
                            .code_editor(),
                    );
                });
            }

            ui.add_space(15.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
                if ui.button("Open Deck…").clicked() {
                    actions.push(UiAction::PickDeck);
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
            self.data = ErrorData::default();
        }
    }
}

impl Default for ErrorModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_not_found_has_no_details() {
        let error = LoadError::NotFound { path: PathBuf::from("data/cards.json") };
        let data = ErrorData::from_load_error(&error);

        assert_eq!(data.title, "Deck not found");
        assert!(data.message.starts_with("File data/cards.json not found."));
        assert!(data.details.is_none());
    }

    #[test]
    fn test_malformed_carries_parser_message() {
        let source = serde_json::from_str::<Vec<u8>>("[1,").unwrap_err();
        let error = LoadError::Malformed { path: PathBuf::from("x.json"), source: source.into() };
        let data = ErrorData::from_load_error(&error);

        assert_eq!(data.title, "Deck could not be read");
        assert!(data.details.is_some());
    }
}
