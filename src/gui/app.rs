use std::{
    path::PathBuf,
    time::{
        Duration,
        Instant,
    },
};

use eframe::egui;
use rfd::FileDialog;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    button::styled_button,
    card_view,
    error_modal::ErrorModal,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
    APP_TITLE,
};
use crate::{
    core::SpeakRequest,
    deck::Deck,
    session::Session,
    settings::Settings,
    speech::{
        SpeechEngine,
        VoiceDispatcher,
    },
};

pub struct FlashcardApp<E: SpeechEngine> {
    // Card state
    session: Session,
    deck_path: PathBuf,

    // Configuration
    settings: Settings,

    // UI State
    theme: Theme,
    actions: ActionQueue,
    error_modal: ErrorModal,
    started: Instant,

    // External Services
    voice: VoiceDispatcher<E>,
}

impl<E: SpeechEngine> FlashcardApp<E> {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        voice: VoiceDispatcher<E>,
    ) -> Self {
        let app = Self::build(settings, voice);
        set_theme(&cc.egui_ctx, &app.theme);
        app
    }

    /// Everything except the egui context setup.
    pub fn build(settings: Settings, voice: VoiceDispatcher<E>) -> Self {
        let deck_path = settings.deck_path.clone();
        let mut app = Self {
            session: Session::new(Deck::empty(), settings.timing()),
            deck_path: deck_path.clone(),
            settings,
            theme: Theme::default(),
            actions: ActionQueue::new(),
            error_modal: ErrorModal::new(),
            started: Instant::now(),
            voice,
        };
        app.open_deck(deck_path);
        app
    }

    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    fn open_deck(&mut self, path: PathBuf) {
        let (deck, error) = Deck::load_or_empty(&path);
        if let Some(error) = error {
            self.error_modal.show_load_error(&error);
        }
        self.session = Session::new(deck, self.settings.timing());
        self.deck_path = path;
    }

    fn speak(&mut self, request: Option<SpeakRequest>) {
        if let Some(request) = request {
            self.voice.dispatch(&request);
        }
    }

    pub fn apply(&mut self, action: UiAction, now: Duration) {
        match action {
            UiAction::Flip => {
                self.session.flip(now);
            }
            UiAction::FlipAndPlay => self.session.flip_and_play(now),
            UiAction::Play => {
                let request = self.session.play();
                self.speak(request);
            }
            UiAction::Next => {
                let request = self.session.next();
                self.speak(request);
            }
            UiAction::Prev => {
                let request = self.session.prev();
                self.speak(request);
            }
            UiAction::PickDeck => {
                let mut dialog = FileDialog::new().add_filter("JSON", &["json"]);
                if let Some(dir) = self.deck_path.parent().filter(|dir| dir.is_dir()) {
                    dialog = dialog.set_directory(dir);
                }
                if let Some(path) = dialog.pick_file() {
                    self.open_deck(path);
                }
            }
            UiAction::OpenDeck(path) => self.open_deck(path),
            UiAction::ReloadDeck => self.open_deck(self.deck_path.clone()),
        }
    }

    /// Runs due timers and speaks whatever they asked for.
    pub fn run_timers(&mut self, now: Duration) {
        for request in self.session.tick(now) {
            self.voice.dispatch(&request);
        }
    }

    fn apply_queued(&mut self) {
        let actions: Vec<UiAction> = self.actions.drain().collect();
        for action in actions {
            let now = self.now();
            self.apply(action, now);
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() || self.error_modal.is_open() {
            return;
        }

        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowLeft) {
                self.actions.push(UiAction::Prev);
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                self.actions.push(UiAction::Next);
            }
            if i.key_pressed(egui::Key::Space) {
                self.actions.push(UiAction::Flip);
            }
        });
    }

    fn show_header(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .exact_height(80.0)
            .frame(egui::Frame::new().fill(self.theme.header))
            .show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(self.theme.title("✨ Language Flashcards"));
                });
            });
    }

    fn show_controls(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("controls")
            .frame(egui::Frame::new().fill(self.theme.background).inner_margin(20.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(self.theme.muted(&self.session.counter_text()));
                    ui.add_space(15.0);

                    let style = self.theme.nav_button();
                    // Two fixed-width buttons and the gap between them.
                    let row_width = style.min_width * 2.0 + style.padding.x * 4.0 + 20.0;
                    ui.allocate_ui(egui::Vec2::new(row_width, 50.0), |ui| {
                        ui.horizontal(|ui| {
                            ui.spacing_mut().item_spacing.x = 20.0;
                            let prev = styled_button(
                                ui,
                                "← Previous",
                                style.clone(),
                                self.session.can_prev(),
                            );
                            if prev.clicked() {
                                self.actions.push(UiAction::Prev);
                            }
                            let next =
                                styled_button(ui, "Next →", style, self.session.can_next());
                            if next.clicked() {
                                self.actions.push(UiAction::Next);
                            }
                        });
                    });
                });
            });
    }

    fn show_card(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.theme.background).inner_margin(40.0))
            .show(ctx, |ui| match self.session.card_view() {
                Some(view) => {
                    card_view::card(ui, &self.theme, &view, self.session.scale(), &mut self.actions)
                }
                None => card_view::empty_deck(ui, &self.theme, &mut self.actions),
            });
    }
}

impl<E: SpeechEngine> eframe::App for FlashcardApp<E> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_timers(self.now());
        self.handle_keys(ctx);

        TopBar::show(
            ctx,
            &mut self.actions,
            &self.deck_path,
            self.session.deck().len(),
            self.voice.installed_voices().len(),
        );
        self.show_header(ctx);
        self.show_controls(ctx);
        self.show_card(ctx);
        self.error_modal.show(ctx, &mut self.actions);

        if !self.actions.is_empty() {
            self.apply_queued();
            ctx.request_repaint();
        }

        if let Some(deadline) = self.session.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_sub(self.now()));
        }
    }
}
