use eframe::egui::{
    self,
    Align,
    Align2,
    CornerRadius,
    FontId,
    Id,
    Layout,
    Pos2,
    Rect,
    Sense,
    Ui,
    UiBuilder,
    Vec2,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    button::styled_button,
    theme::Theme,
};
use crate::session::CardView;

const CARD_WIDTH: f32 = 0.85;
const CARD_HEIGHT: f32 = 0.6;
const CARD_CENTER_Y: f32 = 0.43;
const SHADOW_CENTER_Y: f32 = 0.45;
const WORD_WRAP: f32 = 500.0;

/// Draws the card at `scale` of its full width. Clicking anywhere but the Play button
/// queues a flip with audio.
pub fn card(ui: &mut Ui, theme: &Theme, view: &CardView, scale: f32, actions: &mut ActionQueue) {
    let area = ui.available_rect_before_wrap();
    let size = Vec2::new(area.width() * CARD_WIDTH, area.height() * CARD_HEIGHT);
    let at = |rel_y: f32| Pos2::new(area.center().x, area.top() + area.height() * rel_y);

    let shadow_rect = Rect::from_center_size(at(SHADOW_CENTER_Y), size);
    let card_rect = Rect::from_center_size(at(CARD_CENTER_Y), Vec2::new(size.x * scale, size.y));
    let palette = theme.face(view.face);
    let rounding = CornerRadius::same(12);

    let painter = ui.painter();
    painter.rect_filled(shadow_rect, rounding, theme.shadow);
    painter.rect_filled(card_rect, rounding, palette.fill);

    let response = ui
        .interact(card_rect, Id::new("flashcard"), Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    if response.clicked() {
        actions.push(UiAction::FlipAndPlay);
    }

    let painter = ui.painter();
    painter.text(
        Pos2::new(card_rect.center().x, card_rect.top() + 50.0),
        Align2::CENTER_CENTER,
        &view.language_label,
        FontId::proportional(14.0),
        palette.language,
    );

    let galley = painter.layout(
        view.word.clone(),
        FontId::proportional(38.0),
        palette.word,
        WORD_WRAP.min(card_rect.width() - 40.0).max(1.0),
    );
    let word_pos = card_rect.center() - Vec2::new(0.0, 30.0) - galley.size() / 2.0;
    painter.galley(word_pos, galley, palette.word);

    painter.text(
        Pos2::new(card_rect.center().x, card_rect.bottom() - 22.0),
        Align2::CENTER_CENTER,
        view.hint,
        FontId::proportional(11.0),
        palette.hint,
    );

    // Added after the card's click area so it takes the clicks it covers.
    let play_rect = Rect::from_center_size(
        Pos2::new(card_rect.center().x, card_rect.bottom() - 90.0),
        Vec2::new(card_rect.width(), 64.0),
    );
    ui.scope_builder(
        UiBuilder::new().max_rect(play_rect).layout(Layout::top_down(Align::Center)),
        |ui| {
            if styled_button(ui, "Play", theme.play_button(view.face), true).clicked() {
                actions.push(UiAction::Play);
            }
        },
    );
}

pub fn empty_deck(ui: &mut Ui, theme: &Theme, actions: &mut ActionQueue) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.label(theme.muted("No flashcards loaded."));
        ui.add_space(12.0);
        if styled_button(ui, "Open Deck…", theme.nav_button(), true).clicked() {
            actions.push(UiAction::PickDeck);
        }
    });
}
