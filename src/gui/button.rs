use eframe::egui::{
    self,
    Color32,
    CursorIcon,
    FontId,
    Response,
    RichText,
    Ui,
    Vec2,
};

#[derive(Clone, Debug, PartialEq)]
pub struct ButtonStyle {
    pub font: FontId,
    pub background: Color32,
    pub foreground: Color32,
    pub padding: Vec2,
    pub cursor: CursorIcon,
    pub min_width: f32,
}

/// Adds a flat button. Disabled buttons are drawn faded and never report clicks.
pub fn styled_button(ui: &mut Ui, label: &str, style: ButtonStyle, enabled: bool) -> Response {
    ui.scope(|ui| {
        ui.spacing_mut().button_padding = style.padding;

        let text = RichText::new(label).font(style.font).color(style.foreground);
        let button = egui::Button::new(text)
            .fill(style.background)
            .stroke(egui::Stroke::NONE)
            .corner_radius(egui::CornerRadius::same(4))
            .min_size(Vec2::new(style.min_width, 0.0));

        let response = ui.add_enabled(enabled, button);
        if enabled {
            response.on_hover_cursor(style.cursor)
        } else {
            response
        }
    })
    .inner
}
