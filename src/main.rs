use eframe::egui;
use flashcards::{
    gui::{
        FlashcardApp,
        APP_TITLE,
        WINDOW_SIZE,
    },
    speech::{
        TtsEngine,
        VoiceDispatcher,
    },
    Settings,
    VoicePreconditionError,
};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load();

    let engine = match TtsEngine::new() {
        Ok(engine) => engine,
        Err(e) => exit_without_voice(&settings, VoicePreconditionError::EngineUnavailable(e)),
    };
    let voice = VoiceDispatcher::new(engine, settings.profile_table());

    if let Err(e) = voice.ensure_installed(&settings.required_language) {
        exit_without_voice(&settings, e);
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |cc| Ok(Box::new(FlashcardApp::new(cc, settings, voice)))),
    )
}

fn exit_without_voice(settings: &Settings, error: VoicePreconditionError) -> ! {
    log::error!("{error}");
    println!("{error}");
    println!(
        "Make sure that you install {} and {} voices before using this app",
        settings.required_language, settings.default_language
    );
    std::process::exit(0);
}
