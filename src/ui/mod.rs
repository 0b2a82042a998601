mod helpers;
pub mod egui_view;
pub mod layout;
pub mod views;

use crate::app::QuizController;
use crate::config::Preferences;
use crate::data::QuestionBank;
use crate::render::UiEvent;
use crate::view_models::SubjectCard;
use eframe::{APP_KEY, App, CreationContext, Frame, get_value, set_value};
use egui::{Context, Key};
use egui_view::{EguiView, Screen};
use layout::{apply_theme, bottom_panel, top_panel};

pub struct QuizApp {
    controller: QuizController<QuestionBank, EguiView>,
    prefs: Preferences,
}

impl QuizApp {
    pub fn new(bank: QuestionBank, prefs: Preferences) -> Self {
        let view = EguiView::new(bank.subject_names(), SubjectCard::from_bank(&bank));
        Self {
            controller: QuizController::new(bank, view),
            prefs,
        }
    }

    /// Recupera las preferencias guardadas por eframe y aplica el tema
    pub fn from_creation_context(cc: &CreationContext<'_>, bank: QuestionBank) -> Self {
        let prefs: Preferences = cc
            .storage
            .and_then(|storage| get_value(storage, APP_KEY))
            .unwrap_or_default();
        apply_theme(&cc.egui_ctx, prefs.dark_mode);
        Self::new(bank, prefs)
    }

    pub fn controller(&self) -> &QuizController<QuestionBank, EguiView> {
        &self.controller
    }

    /// Enter equivale a "Next" cuando el botón está activo y no hay aviso abierto
    fn accelerator_events(&self, ctx: &Context, events: &mut Vec<UiEvent>) {
        if !self.controller.can_advance() || self.controller.renderer().notice.is_some() {
            return;
        }
        if ctx.input(|i| i.key_pressed(Key::Enter)) {
            events.push(UiEvent::Next);
        }
    }

    /// Aplica las intenciones del frame. Con el aviso abierto sólo vale cerrarlo.
    pub fn dispatch(&mut self, events: Vec<UiEvent>) {
        for event in events {
            if self.controller.renderer().notice.is_some() {
                if event == UiEvent::DismissNotice {
                    self.controller.renderer_mut().dismiss_notice();
                }
                continue;
            }
            if let Err(err) = self.controller.handle_event(event) {
                log::warn!("{err}");
                self.controller.renderer_mut().show_notice(err.notice());
            }
        }
    }
}

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut events = Vec::new();
        let view = self.controller.renderer();

        top_panel(view, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        if let Some(dark_mode) = bottom_panel(ctx, self.prefs.dark_mode) {
            self.prefs.dark_mode = dark_mode;
        }

        match view.screen {
            Screen::Home => views::home::ui_home(view, ctx, &mut events),
            Screen::Quiz | Screen::Results => views::quiz::ui_quiz(view, ctx, &mut events),
        }

        if view.notice.is_some() {
            views::notice::ui_notice(view, ctx, &mut events);
        }

        self.accelerator_events(ctx, &mut events);
        self.dispatch(events);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
