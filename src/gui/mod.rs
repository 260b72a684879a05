pub mod actions;
mod app;
mod button;
mod card_view;
mod error_modal;
pub mod theme;
mod top_bar;

pub use app::FlashcardApp;

pub const APP_TITLE: &str = "Language Flashcards";
pub const WINDOW_SIZE: [f32; 2] = [1000.0, 690.0];
