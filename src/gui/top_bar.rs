use std::path::Path;

use eframe::egui::{
    self,
    containers,
};

use super::actions::{
    ActionQueue,
    UiAction,
};

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        actions: &mut ActionQueue,
        deck_path: &Path,
        card_count: usize,
        voice_count: usize,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Deck…").clicked() {
                        actions.push(UiAction::PickDeck);
                    }
                    if ui.button("Reload Deck").clicked() {
                        actions.push(UiAction::ReloadDeck);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicators(ui, deck_path, card_count, voice_count);
                });
            });
        });
    }

    fn show_status_indicators(
        ui: &mut egui::Ui,
        deck_path: &Path,
        card_count: usize,
        voice_count: usize,
    ) {
        let deck_color = if card_count > 0 {
            egui::Color32::from_rgb(0, 200, 0)
        } else {
            egui::Color32::from_rgb(200, 80, 80)
        };

        let deck_tooltip = if card_count > 0 {
            format!("{} cards from {}", card_count, deck_path.display())
        } else {
            format!("No cards loaded from {}", deck_path.display())
        };
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("Deck").on_hover_text(deck_tooltip.as_str());
            ui.small(egui::RichText::new("●").color(deck_color)).on_hover_text(deck_tooltip.as_str());
        });

        ui.add_space(3.0);

        ui.small(format!("{voice_count} voices"))
            .on_hover_text("Speech voices installed on this device");
    }
}
