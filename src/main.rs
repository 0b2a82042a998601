#[cfg(not(target_arch = "wasm32"))]
use olympiad_quiz::{QuizApp, config::AppConfig, data::QuestionBank};

#[cfg(not(target_arch = "wasm32"))]
fn load_bank(config: &AppConfig) -> Result<QuestionBank, olympiad_quiz::error::BankError> {
    if let Some(path) = &config.bank_path {
        match QuestionBank::from_path(path) {
            Ok(bank) => {
                log::info!("question bank loaded from {}", path.display());
                return Ok(bank);
            }
            Err(err) => log::error!("{err}; falling back to the embedded bank"),
        }
    }
    QuestionBank::embedded()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let config = AppConfig::from_env();
    pretty_env_logger::formatted_builder()
        .parse_filters(&config.log_filter)
        .init();

    let bank = load_bank(&config).map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.as_str())
            .with_inner_size(config.window_size),
        ..Default::default()
    };
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |cc| Ok(Box::new(QuizApp::from_creation_context(cc, bank)))),
    )
}

// En wasm el punto de entrada es `start` (src/web.rs)
#[cfg(target_arch = "wasm32")]
fn main() {}
