//! # Fincalc GUI Application
//!
//! Graphical interface for the financial calculators.
//! Built with Iced framework for cross-platform support (Windows, macOS, Linux, WASM).
//!
//! Layout: header with the language picker, calculator list on the left,
//! input fields in the centre, results and the monthly breakdown on the right,
//! status bar at the bottom.

use std::collections::HashMap;
use std::path::PathBuf;

use iced::widget::{column, container, row, rule, Space};
use iced::{Element, Length};

use fincalc_core::calculations::CalculatorKind;
use fincalc_core::localization::{supported_languages, Language, Localizer, Translate};
use fincalc_core::seo::page_title;
use fincalc_core::session::{CalculatorSession, SessionState};
use fincalc_core::settings::Settings;

mod ui;

/// Environment variable naming a settings file
const CONFIG_ENV: &str = "FINCALC_CONFIG";

/// Share of the width given to the input panel (results get the rest)
const INPUT_RATIO: f32 = 0.45;

#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(Language),
    SelectCalculator(CalculatorKind),
    FieldChanged(&'static str, String),
    Calculate,
    Reset,
}

pub struct App {
    settings: Settings,
    localizer: Localizer,
    languages: Vec<Language>,
    selected: CalculatorKind,
    sessions: HashMap<CalculatorKind, CalculatorSession>,
    status: String,
}

impl App {
    fn new() -> Self {
        App::with_settings(load_settings())
    }

    fn with_settings(settings: Settings) -> Self {
        let localizer = Localizer::load(&settings.language);
        let sessions = CalculatorKind::ALL
            .into_iter()
            .map(|kind| (kind, CalculatorSession::new(kind)))
            .collect();

        App {
            settings,
            localizer,
            languages: supported_languages(),
            selected: CalculatorKind::ALL[0],
            sessions,
            status: "Ready".to_string(),
        }
    }

    fn title(&self) -> String {
        page_title(self.localizer.language(), Some(self.selected))
    }

    /// Currently selected language entry for the picker
    pub fn language(&self) -> Option<Language> {
        self.languages
            .iter()
            .copied()
            .find(|l| l.code == self.localizer.language())
    }

    pub fn translator(&self) -> &Localizer {
        &self.localizer
    }

    pub fn selected(&self) -> CalculatorKind {
        self.selected
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn session(&self) -> Option<&CalculatorSession> {
        self.sessions.get(&self.selected)
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::LanguageSelected(language) => {
                log::info!("Language changed to {}", language.code);
                self.settings.language = language.code.to_string();
                self.localizer = Localizer::load(language.code);

                // Re-render existing outcomes in the new language
                for session in self.sessions.values_mut() {
                    if !matches!(session.state(), SessionState::Idle) {
                        session.calculate(&self.settings, &self.localizer);
                    }
                }
            }
            Message::SelectCalculator(kind) => {
                self.selected = kind;
                self.status = self.localizer.translate(kind.title_key());
            }
            Message::FieldChanged(id, value) => {
                if let Some(session) = self.sessions.get_mut(&self.selected) {
                    if let Err(e) = session.set_field(id, &value) {
                        log::warn!("{}", e);
                    }
                }
            }
            Message::Calculate => {
                let title = self.localizer.translate(self.selected.title_key());
                if let Some(session) = self.sessions.get_mut(&self.selected) {
                    self.status = match session.calculate(&self.settings, &self.localizer) {
                        SessionState::Computed { .. } => format!("{}: OK", title),
                        SessionState::Failed(e) => e.to_string(),
                        SessionState::Idle => String::new(),
                    };
                }
            }
            Message::Reset => {
                if let Some(session) = self.sessions.get_mut(&self.selected) {
                    session.reset();
                }
                self.status = "Ready".to_string();
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let header = ui::toolbar::view_header(self);

        let main_content = row![
            ui::calculators_panel::view_calculators_panel(self),
            rule::vertical(1),
            ui::input_panel::view_input_panel(self, INPUT_RATIO),
            ui::results_panel::view_results_panel(self, INPUT_RATIO),
        ]
        .spacing(8)
        .height(Length::Fill);

        let content = column![
            header,
            rule::horizontal(1),
            Space::new().height(4),
            main_content,
            rule::horizontal(1),
            ui::status_bar::view_status_bar(self),
        ]
        .spacing(4);

        container(content).padding(10).into()
    }
}

fn load_settings() -> Settings {
    match std::env::var(CONFIG_ENV) {
        Ok(path) if !path.is_empty() => Settings::load(&PathBuf::from(&path)).unwrap_or_else(|e| {
            log::warn!("{}; using default settings", e);
            Settings::default()
        }),
        _ => Settings::default(),
    }
}

fn main() -> iced::Result {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .window_size((1100.0, 720.0))
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english_app() -> App {
        App::with_settings(Settings::default().with_language("en"))
    }

    fn fill_roi(app: &mut App) {
        app.update(Message::SelectCalculator(CalculatorKind::Roi));
        app.update(Message::FieldChanged("initialInvestment", "1,000".to_string()));
        app.update(Message::FieldChanged("finalValue", "1500".to_string()));
    }

    #[test]
    fn test_calculate_and_reset() {
        let mut app = english_app();
        fill_roi(&mut app);
        app.update(Message::Calculate);

        let report = app.session().unwrap().report().unwrap();
        assert_eq!(report.value_of("ROI Percentage"), Some("50.00%"));

        app.update(Message::Reset);
        assert_eq!(app.session().unwrap().state(), &SessionState::Idle);
        assert_eq!(app.status(), "Ready");
    }

    #[test]
    fn test_language_change_rerenders_results() {
        let mut app = english_app();
        fill_roi(&mut app);
        app.update(Message::Calculate);

        let german = app.languages().iter().copied().find(|l| l.code == "de").unwrap();
        app.update(Message::LanguageSelected(german));

        let report = app.session().unwrap().report().unwrap();
        assert_eq!(report.language, "de");
        assert_eq!(report.value_of("Nettogewinn"), Some("500,00\u{a0}€"));
    }

    #[test]
    fn test_sessions_are_kept_per_calculator() {
        let mut app = english_app();
        fill_roi(&mut app);
        app.update(Message::SelectCalculator(CalculatorKind::Loan));
        assert_eq!(app.session().unwrap().value("loanAmount"), Some(""));

        app.update(Message::SelectCalculator(CalculatorKind::Roi));
        assert_eq!(app.session().unwrap().value("initialInvestment"), Some("1000"));
    }

    #[test]
    fn test_failure_shown_in_status() {
        let mut app = english_app();
        app.update(Message::SelectCalculator(CalculatorKind::Roi));
        app.update(Message::Calculate);
        assert!(app.session().unwrap().error().is_some());
        assert!(app.status().contains("initialInvestment"));
    }

    #[test]
    fn test_window_title_follows_calculator() {
        let mut app = english_app();
        app.update(Message::SelectCalculator(CalculatorKind::BreakEven));
        assert!(app.title().starts_with("Break-Even"));
        assert_eq!(app.language().map(|l| l.code), Some("en"));
    }
}
