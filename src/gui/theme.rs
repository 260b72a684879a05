use eframe::egui::{
    self,
    Color32,
    CursorIcon,
    FontId,
    RichText,
    Stroke,
    Vec2,
    Visuals,
};
use egui::style::{
    Selection,
    WidgetVisuals,
    Widgets,
};

use super::button::ButtonStyle;
use crate::core::Face;

/// Colours for one side of the card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FacePalette {
    pub fill: Color32,
    pub language: Color32,
    pub word: Color32,
    pub hint: Color32,
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub background: Color32,
    pub header: Color32,
    pub accent: Color32,
    pub accent_pressed: Color32,
    pub shadow: Color32,
    pub muted: Color32,
    pub foreground: Color32,
    front: FacePalette,
    back: FacePalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Theme {
            background: Color32::from_rgb(0x1a, 0x1a, 0x2e),
            header: Color32::from_rgb(0x16, 0x21, 0x3e),
            accent: Color32::from_rgb(0x00, 0xd4, 0xff),
            accent_pressed: Color32::from_rgb(0x00, 0xb8, 0xe6),
            shadow: Color32::from_rgb(0x0f, 0x0f, 0x1e),
            muted: Color32::from_rgb(0x99, 0x99, 0x99),
            foreground: Color32::WHITE,
            front: FacePalette {
                fill: Color32::WHITE,
                language: Color32::from_rgb(0x66, 0x66, 0x66),
                word: Color32::from_rgb(0x1a, 0x1a, 0x2e),
                hint: Color32::from_rgb(0x99, 0x99, 0x99),
            },
            back: FacePalette {
                fill: Color32::from_rgb(0x00, 0xd4, 0xff),
                language: Color32::WHITE,
                word: Color32::WHITE,
                hint: Color32::WHITE,
            },
        }
    }

    pub fn face(&self, face: Face) -> FacePalette {
        match face {
            Face::Front => self.front,
            Face::Back => self.back,
        }
    }

    pub fn title(&self, content: &str) -> RichText {
        RichText::new(content).size(28.0).strong().color(self.accent)
    }

    pub fn muted(&self, content: &str) -> RichText {
        RichText::new(content).size(12.0).color(self.muted)
    }

    pub fn nav_button(&self) -> ButtonStyle {
        ButtonStyle {
            font: FontId::proportional(16.0),
            background: self.accent,
            foreground: Color32::WHITE,
            padding: Vec2::new(30.0, 12.0),
            cursor: CursorIcon::PointingHand,
            min_width: 150.0,
        }
    }

    /// The Play button sits on the card, so it has to stand out on both faces.
    pub fn play_button(&self, face: Face) -> ButtonStyle {
        let background = match face {
            Face::Front => self.accent,
            Face::Back => self.accent_pressed,
        };
        ButtonStyle {
            font: FontId::proportional(14.0),
            background,
            foreground: Color32::WHITE,
            padding: Vec2::new(30.0, 20.0),
            cursor: CursorIcon::PointingHand,
            min_width: 0.0,
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    let default = Visuals::dark();
    let widget = |base: WidgetVisuals, fill: Color32| WidgetVisuals {
        bg_fill: fill,
        weak_bg_fill: fill,
        fg_stroke: Stroke { color: theme.foreground, ..base.fg_stroke },
        ..base
    };

    ctx.set_visuals_of(
        egui::Theme::Dark,
        Visuals {
            dark_mode: true,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: widget(default.widgets.inactive, theme.header),
                hovered: widget(default.widgets.hovered, theme.accent_pressed),
                active: widget(default.widgets.active, theme.accent_pressed),
                open: widget(default.widgets.open, theme.header),
            },
            selection: Selection {
                bg_fill: theme.accent_pressed,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.accent,
            window_fill: theme.header,
            panel_fill: theme.background,
            extreme_bg_color: theme.shadow,
            ..default
        },
    );
    ctx.set_theme(egui::Theme::Dark);
}
